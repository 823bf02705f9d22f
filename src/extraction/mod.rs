//! Model-backed record extraction
//!
//! Turns sanitized listing markup into structured product records by
//! round-tripping it through a chat-completion service with a fixed
//! few-shot prompt. The prompt carries the schema; nothing past
//! JSON-parseability is enforced at runtime.

pub mod client;
pub mod prompt;
pub mod records;

pub use client::{parse_records, ExtractionClient, ExtractionConfig, RecordExtractor};
pub use prompt::{few_shot_messages, ChatMessage, Role};
pub use records::{ProductRecord, MISSING_FIELD};
