pub mod billboard;
pub mod camera;
pub mod clock;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod layout;
pub mod picker;
pub static PANELS_WGSL: &str = include_str!("../shaders/panels.wgsl");

pub use billboard::*;
pub use camera::*;
pub use clock::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use layout::*;
pub use picker::*;
