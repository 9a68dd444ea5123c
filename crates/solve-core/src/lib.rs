// Library root for the solver client core: configuration, wire types, the
// HTTP client, and the UI-agnostic query submitter.

pub mod client;
pub mod config;
pub mod protocol;
pub mod submitter;

pub use client::{HttpSolveClient, SolveClient, SolveError};
pub use config::{Config, ConfigError, ServerConfig, UiConfig};
pub use protocol::{SolveRequest, SolveResponse};
pub use submitter::{InputLock, QuerySubmitter, View};
