//! humanize-ui: view state and egui rendering for the humanizer app.
//!
//! The crate never talks to the AI service. Views hand outbound requests to
//! the host, which performs them and delivers the results back through
//! [`App::deliver_humanize`] and [`App::deliver_detection`].

pub mod app;
pub mod config;
pub mod editor;
pub mod logging;
pub mod views;

pub use app::{ActiveView, App, OutboundRequest};
pub use config::{load_config, UiConfig};
pub use editor::{InputField, PanelEvent, TextPanel};
pub use logging::init_tracing;
pub use views::{DetectorView, HumanizerView};
