//! Transport layer: the HTTP exchange primitive the executor consumes.
//! `reqwest` in, status + content type + body bytes out.

// region:    --- Modules

mod error;
mod web_client;

pub use self::error::{Error, Result};
pub use self::web_client::*;

// endregion: --- Modules
