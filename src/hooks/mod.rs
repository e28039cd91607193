pub mod use_entrance;
pub mod use_parallax;
pub mod use_scroll_reveal;

pub use use_entrance::{use_hero_entrance, HeroTargets};
pub use use_parallax::use_parallax;
pub use use_scroll_reveal::use_scroll_reveal;
