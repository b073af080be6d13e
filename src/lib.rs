//! remote-data - A reactive request helper over `reqwest`.
//!
//! One [`RequestExecutor`] owns a `data` / `error` / `loading` triple of [`Signal`]s
//! and an `execute()` callable that performs one HTTP exchange, reading the
//! current target, method, auth flag, and payload at call time.
//!
//! ```no_run
//! use remote_data::{RequestExecutor, Session, Signal};
//!
//! # async fn run() -> remote_data::Result<()> {
//! let session = Session::default();
//! let target = Signal::new("https://api.example.com/profile".into());
//! let auth = Signal::new(true);
//!
//! let executor = RequestExecutor::builder(target, auth).with_credentials(session).build();
//! let body = executor.execute().await?;
//! println!("{body:?} / loading: {}", executor.loading().get());
//! # Ok(())
//! # }
//! ```

// region:    --- Modules

mod error;
mod signal;

// -- Flatten
pub use error::{Error, Result};
pub use signal::*;

// -- Public Modules
pub mod executor;
pub mod request;
pub mod resolver;
pub mod response;
pub mod webc;

// -- Flatten the common entry points
pub use executor::{ExecutorConfig, RequestExecutor, RequestState, SettlePolicy};
pub use request::{FilePart, Method, MultipartForm, Payload};
pub use resolver::{AccessToken, CredentialProvider, NoCredentials, Session, Target};
pub use response::{ObjectUrl, ResponseBody};

// endregion: --- Modules
