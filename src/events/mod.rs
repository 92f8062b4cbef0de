pub mod pointer;
pub mod upload;

pub use pointer::{wire_input_handlers, InputWiring};
pub use upload::{wire_upload, UploadWiring};
