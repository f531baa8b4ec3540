#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod error;
mod protocol;

pub use client::{ChatClient, ChatOutcome};
pub use error::ChatError;
