// Editor module for the humanizer UI.

pub mod input;
pub mod panel;

pub use input::InputField;
pub use panel::{PanelEvent, TextPanel};
