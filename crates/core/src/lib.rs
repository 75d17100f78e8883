//! Core types for frn-console
//!
//! The endpoint catalog, its derived views, the search filter, dashboard
//! aggregation and the mock response rules. Everything here is synchronous and
//! free of I/O except catalog file loading.

mod catalog;
pub mod constants;
mod credits;
mod dashboard;
mod endpoint;
pub mod env_config;
mod error;
mod filter;
mod mock;
mod sink;

pub use catalog::*;
pub use constants::*;
pub use credits::*;
pub use dashboard::*;
pub use endpoint::*;
pub use env_config::{ConsoleConfig, env_parse_with_default};
pub use error::*;
pub use filter::*;
pub use mock::*;
pub use sink::*;
