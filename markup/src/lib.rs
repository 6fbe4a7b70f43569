pub mod config;
pub mod element;
pub mod event;
pub mod render;

pub use config::RenderConfig;
pub use element::{find_by_attr, find_by_id, find_element, AttrValue, Attributes, Content, Element};
pub use event::Event;
pub use render::{render_html, render_html_with};
