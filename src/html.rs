use pulldown_cmark::{CowStr, Event, Tag, html};

use crate::block::Block;
use crate::document::Document;
use crate::outline::Node;

/// Walks a sectioned document and renders it.
///
/// Section boundaries become raw HTML events spliced into the engine's own
/// event stream, and the whole stream goes through the engine's HTML writer in
/// one pass so footnote numbering carries across sections.
pub struct SectionEmitter<'d, 'a> {
    document: &'d Document<'a>,
    level_class: bool,
}

impl<'d, 'a> SectionEmitter<'d, 'a> {
    pub fn new(document: &'d Document<'a>) -> Self {
        Self {
            document,
            level_class: false,
        }
    }

    /// Tag each section with `class="levelN"`.
    pub fn level_class(mut self, enabled: bool) -> Self {
        self.level_class = enabled;
        self
    }

    /// The document's events with section markers inserted.
    pub fn events(&self) -> Vec<Event<'a>> {
        let mut out = Vec::new();
        self.emit_nodes(self.document.outline().root(), &mut out);
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        html::push_html(&mut out, self.events().into_iter());
        out
    }

    fn emit_nodes(&self, nodes: &[Node], out: &mut Vec<Event<'a>>) {
        for node in nodes {
            match node {
                Node::Block(id) => out.extend(self.document.block(*id).events().iter().cloned()),
                Node::Section(id) => {
                    let section = self.document.outline().section(*id);
                    out.push(Event::Html(self.open_marker(section.level)));
                    self.emit_nodes(&section.children, out);
                    out.push(Event::Html(CowStr::Borrowed("</section>\n")));
                }
            }
        }
    }

    fn open_marker(&self, level: u8) -> CowStr<'a> {
        if self.level_class {
            CowStr::from(format!("<section class=\"level{}\">\n", level))
        } else {
            CowStr::Borrowed("<section>\n")
        }
    }

    /// Indented plain-text dump of the section tree.
    pub fn outline_text(&self) -> String {
        let mut out = String::new();
        self.outline_nodes(self.document.outline().root(), 0, &mut out);
        out
    }

    fn outline_nodes(&self, nodes: &[Node], indent: usize, out: &mut String) {
        let indent_str: String = "  ".repeat(indent);

        for node in nodes {
            out.push_str(&indent_str);
            match node {
                Node::Block(id) => {
                    out.push_str(&describe(self.document.block(*id)));
                    out.push('\n');
                }
                Node::Section(id) => {
                    let section = self.document.outline().section(*id);
                    out.push_str(&format!("section (level {})\n", section.level));
                    self.outline_nodes(&section.children, indent + 1, out);
                }
            }
        }
    }
}

fn describe(block: &Block) -> String {
    match block {
        Block::Heading { level, events } => {
            format!("h{} {:?}", level, plain_text(events))
        }
        Block::Content { events } => match events.first() {
            Some(Event::Start(tag)) => tag_name(tag).to_string(),
            Some(Event::Rule) => "rule".to_string(),
            _ => "content".to_string(),
        },
    }
}

fn tag_name(tag: &Tag) -> &'static str {
    match tag {
        Tag::Paragraph => "paragraph",
        Tag::BlockQuote(_) => "blockquote",
        Tag::CodeBlock(_) => "code block",
        Tag::HtmlBlock => "html",
        Tag::List(Some(_)) => "ordered list",
        Tag::List(None) => "list",
        Tag::FootnoteDefinition(_) => "footnote",
        Tag::Table(_) => "table",
        Tag::DefinitionList => "definition list",
        Tag::MetadataBlock(_) => "metadata",
        _ => "content",
    }
}

/// Concatenated text of a heading, without markup.
fn plain_text(events: &[Event]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }
    text
}
