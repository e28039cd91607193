pub mod disposer;
pub mod dom;
pub mod easing;
pub mod float_loop;
pub mod geometry;
pub mod parallax;
pub mod reveal;
pub mod timeline;
pub mod tween;
