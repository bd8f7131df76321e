//! Event-driven DOM construction.
//!
//! `TreeBuilder` is an explicit state machine with one method per event kind,
//! independent of any particular tokenizer's calling convention. The builder
//! keeps a cursor at the current insertion point and descends/ascends as
//! start/end events arrive; the first reported error is sticky and turns
//! every later event into a no-op.

use crate::error::XmlError;
use crate::event::XmlEvent;
use crate::tree::{Document, NodeId};

/// Event producer contract.
///
/// `run` scans whatever input the tokenizer is bound to and pushes the
/// resulting structural events into `sink` in document order, returning once
/// the input is exhausted.
pub trait Tokenizer {
    fn run(&mut self, sink: &mut TreeBuilder);
}

/// Any plain event iterator is a tokenizer; this is how synthetic streams
/// drive the builder in tests.
impl<I> Tokenizer for I
where
    I: Iterator<Item = XmlEvent>,
{
    fn run(&mut self, sink: &mut TreeBuilder) {
        for event in self {
            sink.push_event(event);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BuilderState {
    BeforeRoot,
    Building,
    Errored,
}

/// Builds a `Document` from a stream of structural events.
///
/// Error policy is first-error-wins: once an error event is recorded the
/// builder stops mutating the tree and drops everything that follows, and the
/// stored error is never replaced. The partially built tree is left as-is,
/// not rolled back.
pub struct TreeBuilder {
    doc: Document,
    cursor: Option<NodeId>,
    state: BuilderState,
    first_error: Option<XmlError>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            doc: Document::new(),
            cursor: None,
            state: BuilderState::BeforeRoot,
            first_error: None,
        }
    }

    /// Drives `tokenizer` to completion with `self` as the event sink and
    /// returns the first recorded error, if any.
    pub fn parse<T: Tokenizer>(&mut self, tokenizer: &mut T) -> Option<&XmlError> {
        tokenizer.run(self);
        self.first_error.as_ref()
    }

    /// Dispatches one event to the matching handler.
    pub fn push_event(&mut self, event: XmlEvent) {
        match event {
            XmlEvent::StartDocument => self.start_document(),
            XmlEvent::StartElement { name, attributes } => self.start_element(&name, attributes),
            XmlEvent::Characters(text) => self.characters(&text),
            XmlEvent::EndElement { name } => self.end_element(&name),
            XmlEvent::Error(error) => self.report_error(error),
            XmlEvent::EndDocument => self.end_document(),
        }
    }

    pub fn start_document(&mut self) {
        log::trace!(target: "xml.tree_builder", "start document");
    }

    /// The first element becomes the root; every later one is appended under
    /// the cursor and the cursor descends into it.
    pub fn start_element(&mut self, name: &str, attributes: Vec<(String, String)>) {
        if self.state == BuilderState::Errored {
            return;
        }
        log::trace!(target: "xml.tree_builder", "start element <{name}>");
        let id = self.doc.create_element(name, attributes);
        if self.state == BuilderState::BeforeRoot {
            self.doc.set_root(id);
            self.cursor = Some(id);
            self.state = BuilderState::Building;
            return;
        }
        let parent = self
            .cursor
            .expect("start tag after the root element was closed");
        self.doc.append_child(parent, id);
        self.cursor = Some(id);
    }

    /// Character data is not modeled in the tree.
    pub fn characters(&mut self, text: &str) {
        log::trace!(
            target: "xml.tree_builder",
            "discarding {} bytes of character data",
            text.len()
        );
    }

    /// Ascends one level. A well-formed event stream never emits an end
    /// without a matching prior start, so a missing cursor is a bug in the
    /// event source and panics.
    pub fn end_element(&mut self, name: &str) {
        if self.state == BuilderState::Errored {
            return;
        }
        let current = self.cursor.expect("end tag with no open element");
        debug_assert_eq!(
            self.doc.name(current),
            name,
            "end tag does not match the open element"
        );
        log::trace!(target: "xml.tree_builder", "end element </{name}>");
        self.cursor = self.doc.parent(current);
    }

    /// Records the first error and goes terminal; later errors are dropped.
    pub fn report_error(&mut self, error: XmlError) {
        if self.state == BuilderState::Errored {
            log::debug!(
                target: "xml.tree_builder",
                "suppressing error after the first: {error}"
            );
            return;
        }
        log::debug!(target: "xml.tree_builder", "recording first error: {error}");
        self.first_error = Some(error);
        self.state = BuilderState::Errored;
    }

    /// On a clean parse the cursor must have ascended past the root; anything
    /// else means the event stream was unbalanced.
    pub fn end_document(&mut self) {
        if self.state == BuilderState::Errored {
            return;
        }
        assert!(
            self.cursor.is_none(),
            "document ended with unclosed elements"
        );
        log::trace!(target: "xml.tree_builder", "end document");
    }

    pub fn first_error(&self) -> Option<&XmlError> {
        self.first_error.as_ref()
    }

    /// The tree built so far.
    ///
    /// Only trustworthy when `first_error` is `None`. After a failed parse
    /// this is a partial tree that stops wherever the first error cut the
    /// stream off; it is exposed for diagnostics, not for use as a document.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Consumes the builder; see `document` for the partial-tree caveat.
    pub fn into_document(self) -> Document {
        self.doc
    }
}

/// One-shot entry point: drives `tokenizer` into a fresh builder and returns
/// the finished document, or the first error the event stream reported.
pub fn build_dom<T: Tokenizer>(tokenizer: &mut T) -> Result<Document, XmlError> {
    let mut builder = TreeBuilder::new();
    tokenizer.run(&mut builder);
    match builder.first_error.take() {
        Some(error) => Err(error),
        None => Ok(builder.doc),
    }
}
