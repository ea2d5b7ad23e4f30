// Conversational session controller and the pieces it orchestrates.
// Remote calls go through advice_client; nothing here talks HTTP directly.

pub mod attachments;
pub mod composer;
pub mod controller;
pub mod fallback;
pub mod handlers;
pub mod prompts;
pub mod registry;
pub mod transcript;
