#![allow(clippy::shadow_unrelated, reason = "Shadowing in async blocks is idiomatic")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod catalog;
pub mod events;
pub mod sessions;
pub mod simulate;
