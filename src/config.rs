use log::Level;

pub const BRAND: &str = "#23b5b5";
pub const BRAND_DARK: &str = "#177f82";

pub const SITE_URL: &str = "https://explified.com";
pub const APP_URL: &str = "https://app.explified.com";

// Pointer parallax over the hero section.
pub const PARALLAX_DAMPING: f64 = 40.0;
pub const PARALLAX_TWEEN_SECS: f64 = 0.6;
pub const GLOW_BACK_SCALE: f64 = 0.6;
pub const GLOW_FRONT_SCALE: f64 = 1.0;
pub const FOREGROUND_CARD_SCALE: f64 = -0.6;

// Hero entrance timeline defaults.
pub const ENTRANCE_DURATION_SECS: f64 = 0.8;
pub const FLOATING_CARD_ENTRANCE_SECS: f64 = 0.9;
pub const FLOATING_CARD_BASE_DELAY_SECS: f64 = 0.4;
pub const FLOATING_CARD_STAGGER_SECS: f64 = 0.12;

// Sections reveal when their top edge reaches 80% of the viewport height.
pub const REVEAL_TRIGGER_FRACTION: f64 = 0.8;
pub const REVEAL_DISTANCE_PX: f64 = 80.0;
pub const REVEAL_DURATION_SECS: f64 = 1.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose animator lifecycle while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn app_link(path: &str) -> String {
    format!("{}/{}", APP_URL, path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_link_joins_with_single_slash() {
        assert_eq!(app_link("/integrations"), "https://app.explified.com/integrations");
        assert_eq!(app_link("flowsense/chat"), "https://app.explified.com/flowsense/chat");
    }
}
