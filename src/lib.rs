mod block;
mod config;
mod document;
mod html;
mod outline;
mod parser;
mod pipeline;
mod sectionizer;
mod stack;

pub use block::{Block, BlockId, BlockSequence};
pub use config::{Config, ConfigError, MarkdownConfig, Overrides, RootLevel, SectionsConfig};
pub use document::Document;
pub use html::SectionEmitter;
pub use outline::{Container, Node, Outline, Section, SectionId};
pub use pipeline::Pipeline;
pub use sectionizer::Sectionizer;
pub use stack::SectionStack;

/// Parse markdown text into its top-level blocks using default config.
pub fn parse(markdown: &str) -> Vec<Block<'_>> {
    parser::parse(markdown, &Config::compiled_default().markdown)
}

/// Convert markdown to sectioned HTML using default config.
pub fn markdown_to_html(markdown: &str) -> String {
    markdown_to_html_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to sectioned HTML with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> String {
    Pipeline::new(config.clone()).render_html(markdown)
}
