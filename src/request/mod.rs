//! The request side of an exchange: verbs, payloads, and how they are encoded on the wire.

// region:    --- Modules

mod encoder;
mod method;
mod multipart;
mod payload;
mod resolved_request;

// -- Flatten
pub use encoder::*;
pub use method::*;
pub use multipart::*;
pub use payload::*;
pub use resolved_request::*;

// endregion: --- Modules
