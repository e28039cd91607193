pub mod bar_chart;
pub mod cards;
pub mod footer;
pub mod nav;
