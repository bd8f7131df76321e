mod dom_builder;
mod error;
mod event;
mod serializer;
mod tree;

pub use crate::dom_builder::{Tokenizer, TreeBuilder, build_dom};
pub use crate::error::{XmlError, XmlErrorKind};
pub use crate::event::XmlEvent;
pub use crate::serializer::{document_to_text, to_text};
pub use crate::tree::{Document, NodeId};
