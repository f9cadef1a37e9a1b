pub mod cursor;
pub mod error;
pub mod format;
pub mod preprocess;
pub mod render;
pub mod source;
pub mod widget;

pub use cursor::NavigationCursor;
pub use error::GroupError;
pub use render::{DisplaySurface, TextSurface};
pub use source::{DefinitionSource, SourceGroup, StaticSourceGroup};
pub use widget::{MultiDefinitionWidget, ViewState, WordField, WordInput};

#[cfg(test)]
mod tests;
