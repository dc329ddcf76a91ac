//! Client for the optional remote veterinary AI bot service.
//!
//! The bot is never required. Every call that the UI depends on degrades to
//! a canned answer (chat, suggestions, health) or an empty list (history,
//! medicines) when the service is down, rate limited or returns garbage.
//! Only translation surfaces its failure, as [`BotError::TranslationUnavailable`].

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod transport;
pub mod types;

pub use client::*;
pub use config::*;
pub use envelope::*;
pub use error::*;
pub use transport::*;
pub use types::*;
