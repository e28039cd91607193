use chrono::{Datelike, Utc};
use yew::prelude::*;

pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [(&'static str, &'static str)],
}

pub const FOOTER_COLUMNS: [FooterColumn; 4] = [
    FooterColumn {
        heading: "Platform",
        links: &[
            ("Labs", "https://labs.explified.com/"),
            ("Stream", "https://stream.explified.com/"),
            ("Developer", "https://developer.explified.com/"),
            ("Affiliate", "https://affiliate.explified.com/"),
            ("Beacon", "https://beacon.explified.com/"),
        ],
    },
    FooterColumn {
        heading: "Products",
        links: &[
            ("Notes", "https://notes.explified.com/"),
            ("QuickShot", "https://explified.com/quickshot/"),
            ("Youtube Summariser", "https://explified.com/youtube-summarizer/"),
            ("YT Insight", "https://explified.com/yt-insight-saas/"),
            ("Expli", "https://expli.explified.com/"),
        ],
    },
    FooterColumn {
        heading: "Resources",
        links: &[
            ("Blog", "https://explified.com/blog/"),
            ("Our Projects", "https://explified.com/our-projects/"),
            ("Community", "https://community.explified.com/"),
            ("Academy", "https://academy.explified.com/"),
            ("Events", "https://events.explified.com/"),
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            ("About us", "https://explified.com/about-us/"),
            ("Partners", "https://explified.com/partners/"),
            ("Terms of Service", "https://explified.com/terms-of-service/"),
            ("Privacy Policy", "https://explified.com/privacy-policy/"),
            ("Refund Terms", "https://explified.com/refund-terms/"),
        ],
    },
];

const SOCIALS: [(&str, &str); 4] = [
    ("Instagram", "📷"),
    ("LinkedIn", "💼"),
    ("YouTube", "▶"),
    ("Twitter / X", "𝕏"),
];

pub fn copyright(year: i32) -> String {
    format!("© {} Explified. All rights reserved.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-columns">
                    {
                        FOOTER_COLUMNS.iter().map(|column| html! {
                            <div class="footer-column">
                                <h4>{ column.heading }</h4>
                                <ul>
                                    {
                                        column.links.iter().map(|(label, href)| html! {
                                            <li>
                                                <a href={*href} target="_blank" rel="noreferrer">{ *label }</a>
                                            </li>
                                        }).collect::<Html>()
                                    }
                                </ul>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="footer-bottom">
                    <div class="footer-brand">
                        <img src="/assets/logo.svg" alt="Logo" class="footer-logo" />
                        <span>{"Explified Labs"}</span>
                    </div>
                    <div class="footer-socials">
                        {
                            SOCIALS.iter().map(|(label, glyph)| html! {
                                <a href="#" target="_blank" rel="noreferrer" class="social-link" aria-label={*label}>
                                    <span class="social-glyph">{ *glyph }</span>
                                    <span class="social-label">{ *label }</span>
                                </a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                <p class="footer-copyright">{ copyright(Utc::now().year()) }</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_column_lists_five_absolute_links() {
        for column in &FOOTER_COLUMNS {
            assert_eq!(column.links.len(), 5, "{}", column.heading);
            assert!(column.links.iter().all(|(_, href)| href.starts_with("https://")));
        }
    }

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(copyright(2026), "© 2026 Explified. All rights reserved.");
    }
}
