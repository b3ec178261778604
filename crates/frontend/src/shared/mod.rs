pub mod chart_js;
pub mod components;
pub mod page_frame;
pub mod page_standard;
