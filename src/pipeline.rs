use crate::block::{Block, BlockSequence};
use crate::config::Config;
use crate::document::Document;
use crate::html::SectionEmitter;
use crate::parser;
use crate::sectionizer::Sectionizer;

/// Parse, sectionize and render with one fixed configuration.
///
/// Holds no per-document state, so one pipeline can serve any number of
/// documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Config,
    sectionizer: Sectionizer,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        let sectionizer = Sectionizer::new(config.sections.root_level);
        Self {
            config,
            sectionizer,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn parse<'a>(&self, markdown: &'a str) -> Vec<Block<'a>> {
        parser::parse(markdown, &self.config.markdown)
    }

    /// Turn parsed blocks into a document, nesting them into sections unless
    /// sections are disabled.
    pub fn sectionize<'a>(&self, blocks: Vec<Block<'a>>) -> Document<'a> {
        if !self.config.sections.enabled {
            log::debug!("sections disabled, keeping {} blocks flat", blocks.len());
            return Document::flat(blocks);
        }
        let outline = self.sectionizer.run(BlockSequence::new(&blocks));
        Document::new(blocks, outline)
    }

    pub fn document<'a>(&self, markdown: &'a str) -> Document<'a> {
        self.sectionize(self.parse(markdown))
    }

    pub fn emitter<'d, 'a>(&self, document: &'d Document<'a>) -> SectionEmitter<'d, 'a> {
        SectionEmitter::new(document).level_class(self.config.sections.level_class)
    }

    pub fn render_html(&self, markdown: &str) -> String {
        let document = self.document(markdown);
        self.emitter(&document).to_html()
    }

    pub fn render_outline(&self, markdown: &str) -> String {
        let document = self.document(markdown);
        self.emitter(&document).outline_text()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Config::compiled_default())
    }
}
