pub mod element;
pub mod event;
pub mod query;
pub mod render;
pub mod text;
pub mod types;

pub use element::{
    closest, find_element, find_element_mut, path_ids, path_to, replace_element, Content,
    Element,
};
pub use event::{Event, MouseButton};
pub use query::{select_all, Selector};
pub use render::to_html;
pub use text::{display_width, longest_width, MonospaceMetrics, TextMetrics};
pub use types::*;
