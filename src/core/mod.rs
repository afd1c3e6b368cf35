pub mod counter;
pub mod service;
pub mod synthesizer;

pub use crate::domain::model::{FetchOutcome, Handle, MentionReport, TextCorpus};
pub use crate::domain::ports::{ConfigProvider, ContentExtractor, ContentSource};
pub use crate::utils::error::Result;
