mod enums;
mod style;

pub use enums::Overflow;
pub use style::{px, Style};
