//! LLM service adapters
//!
//! Implementations of the TextGenerator trait for each selectable provider:
//! - OpenAI (gpt-3.5-turbo)
//! - Anthropic (Claude 3 Haiku)
//! - Google (Gemini, model configurable)

pub mod anthropic;
pub mod google;
pub mod openai;

pub use anthropic::AnthropicService;
pub use google::GoogleService;
pub use openai::OpenAIService;
