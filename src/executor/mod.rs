//! The request executor: one HTTP exchange per `execute()`, outcome mirrored in
//! `data` / `error` / `loading` signals.

// region:    --- Modules

mod executor_builder;
mod executor_config;
mod request_executor;
mod request_state;

pub use executor_builder::*;
pub use executor_config::*;
pub use request_executor::*;
pub use request_state::*;

// endregion: --- Modules
