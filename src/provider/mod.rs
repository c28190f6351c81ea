//! # Completion Provider
//!
//! Boundary to the upstream chat-completion API. The rest of the crate
//! talks to a [`CompletionClient`] trait object; the HTTP implementation
//! and a mock for tests live here, along with the wire types and the
//! typed error variants the boundary produces.

mod client;
mod errors;
mod types;

pub use client::{
    create_completion_client, CompletionClient, HttpCompletionClient, MockCompletionClient,
    MockFailure,
};
pub use errors::{ProviderError, ProviderResult};
pub use types::{ChatMessage, Choice, ChoiceMessage, CompletionRequest, CompletionResponse, Role};
