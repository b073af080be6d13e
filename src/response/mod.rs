//! The response side of an exchange: content-type driven decoding.

// region:    --- Modules

mod decoder;
mod response_body;

pub use decoder::*;
pub use response_body::*;

// endregion: --- Modules
