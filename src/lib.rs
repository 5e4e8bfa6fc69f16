//! Text transforms for a text-utility page, plus tone-directed rewriting
//! through a hosted text-generation service.

pub mod config;
pub mod error;
pub mod gemini;
pub mod rewriter;
pub mod session;
pub mod tone;
pub mod tools;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{AiModelConfig, Config};
pub use error::{AiError, UnknownTool};
pub use gemini::{GeminiClient, GenerateRequest, TextGenerator};
pub use rewriter::ToneRewriter;
pub use session::{Session, TextStats};
pub use tone::Tone;
pub use tools::{apply, apply_by_id, ToolCategory, ToolDescriptor, ToolId, TOOLS};
