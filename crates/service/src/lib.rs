//! Service layer for the FRN API console.
//!
//! Owns per-session browser/tester/shell state and runs simulated requests
//! on behalf of the HTTP and CLI front ends.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::ref_patterns, reason = "Ref patterns are clearer in some contexts")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::let_underscore_untyped, reason = "Type is clear from context")]
#![allow(clippy::let_underscore_must_use, reason = "Intentionally ignoring results")]
#![allow(let_underscore_drop, reason = "Intentionally dropping values")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod browser;
mod error;
mod notifier;
mod session_service;
mod shell;
mod simulator;
mod tester;

pub use browser::{BrowserState, SidebarCategory, SidebarEntry, SidebarView};
pub use error::ServiceError;
pub use notifier::{BroadcastNotifier, ConsoleEvent};
pub use session_service::{CopyReport, CopyTarget, RunReport, SessionService};
pub use shell::{ConsoleSession, MainView, SessionView};
pub use simulator::{SimulationOutcome, Simulator};
pub use tester::{RunTicket, TesterState, TesterView};
