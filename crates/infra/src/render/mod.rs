//! Display surface adapters

pub mod assets;
pub mod html;
pub mod svg;

pub use html::HtmlSurface;
pub use svg::{chart_to_html, escape_xml, scene_to_svg};
