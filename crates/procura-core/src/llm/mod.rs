//! LLM integration
//!
//! Provides the client trait and implementation for:
//! - Chat completions against hosted OpenAI-compatible services
//! - Embedding generation for the semantic index
//! - In-memory response caching to avoid repeat API calls

mod cache;
mod client;

pub use cache::{chat_cache_key, embedding_cache_key, LlmCache};
pub use client::{ChatMessage, LlmClient, MetricsSnapshot, OpenAiClient};
