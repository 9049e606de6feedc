//! LLM module for lecturer-rate
//!
//! Prompt templates and the completion client used to turn reviews into text.

pub mod client;
pub mod prompts;
pub mod responses;

pub use client::{build_client, CompletionClient, Provider};
pub use responses::ResponsesClient;
