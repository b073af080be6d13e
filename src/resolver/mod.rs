//! Resolution of what a request is sent to and with which credentials.

// region:    --- Modules

mod credential;
mod session;
mod target;

pub use credential::*;
pub use session::*;
pub use target::*;

// endregion: --- Modules
