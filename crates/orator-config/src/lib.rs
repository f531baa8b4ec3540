#![allow(clippy::must_use_candidate)]

pub mod chat;
pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod stt;
pub mod upload;

use serde::Deserialize;

pub use chat::*;
pub use cors::*;
pub use health::*;
pub use server::*;
pub use stt::*;
pub use upload::*;

/// Top-level Orator configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Speech-to-text provider configuration
    #[serde(default)]
    pub stt: SttConfig,
    /// Chat completion provider configuration
    #[serde(default)]
    pub chat: ChatConfig,
}
