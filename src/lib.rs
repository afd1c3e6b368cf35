pub mod config;
pub mod core;
pub mod domain;
pub mod fetch;
pub mod server;
pub mod utils;

pub use crate::config::ServerConfig;
pub use crate::core::counter::{count_mentions, estimate_item_count, KEYWORD};
pub use crate::core::service::MentionService;
pub use crate::core::synthesizer::Synthesizer;
pub use crate::fetch::{HtmlContentExtractor, ProfileFetcher};
pub use crate::utils::error::{Result, TrackerError};
