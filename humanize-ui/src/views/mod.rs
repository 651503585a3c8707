// The two screens of the app.

pub mod detector;
pub mod humanizer;

pub use detector::DetectorView;
pub use humanizer::HumanizerView;
