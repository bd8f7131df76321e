//! Whitespace-exact XML rendering.

use crate::tree::{Document, NodeId};
use std::fmt::Write;

/// Renders the subtree rooted at `id` as XML text, indented `depth` tabs.
///
/// Output contract: one start or end tag per line, tab indentation, childless
/// elements collapse to `<name />`, attributes in stored order. Attribute
/// values are emitted verbatim: `<`, `&`, and `"` are not escaped. That is a
/// known gap kept for byte-compatibility with the upstream format: a value
/// containing `"` round-trips into ambiguous XML.
pub fn to_text(doc: &Document, id: NodeId, depth: usize) -> String {
    let mut out = String::new();
    write_element(doc, id, depth, &mut out);
    out
}

/// Renders the whole document from its root; `None` when no root exists.
pub fn document_to_text(doc: &Document) -> Option<String> {
    doc.root().map(|root| to_text(doc, root, 0))
}

fn write_element(doc: &Document, id: NodeId, depth: usize, out: &mut String) {
    push_indent(out, depth);
    out.push('<');
    out.push_str(doc.name(id));
    for (name, value) in doc.attributes(id) {
        let _ = write!(out, " {name}=\"{value}\"");
    }
    let children = doc.children(id);
    if children.is_empty() {
        out.push_str(" />\n");
        return;
    }
    out.push_str(">\n");
    for &child in children {
        write_element(doc, child, depth + 1, out);
    }
    push_indent(out, depth);
    out.push_str("</");
    out.push_str(doc.name(id));
    out.push_str(">\n");
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push('\t');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn childless_element_collapses_to_self_closing() {
        let mut doc = Document::new();
        let x = doc.create_element("x", Vec::new());
        assert_eq!(to_text(&doc, x, 0), "<x />\n");
    }

    #[test]
    fn nested_child_is_tab_indented() {
        let mut doc = Document::new();
        let root = doc.create_element("root", Vec::new());
        let leaf = doc.create_element("leaf", Vec::new());
        doc.append_child(root, leaf);

        assert_eq!(to_text(&doc, root, 0), "<root>\n\t<leaf />\n</root>\n");
    }

    #[test]
    fn depth_indents_start_and_end_tags() {
        let mut doc = Document::new();
        let root = doc.create_element("a", Vec::new());
        let leaf = doc.create_element("b", Vec::new());
        doc.append_child(root, leaf);

        assert_eq!(to_text(&doc, root, 2), "\t\t<a>\n\t\t\t<b />\n\t\t</a>\n");
    }

    #[test]
    fn attributes_render_in_stored_order() {
        let mut doc = Document::new();
        let node = doc.create_element(
            "n",
            vec![
                ("b".to_string(), "2".to_string()),
                ("a".to_string(), "1".to_string()),
            ],
        );
        doc.append_attribute(node, "a", "dup");

        assert_eq!(to_text(&doc, node, 0), "<n b=\"2\" a=\"1\" a=\"dup\" />\n");
    }

    #[test]
    fn attribute_values_are_emitted_verbatim() {
        let mut doc = Document::new();
        let node = doc.create_element("n", vec![("v".to_string(), "a<b&\"c".to_string())]);
        assert_eq!(to_text(&doc, node, 0), "<n v=\"a<b&\"c\" />\n");
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut doc = Document::new();
        let root = doc.create_element("root", vec![("k".to_string(), "v".to_string())]);
        let a = doc.create_element("a", Vec::new());
        let b = doc.create_element("b", Vec::new());
        doc.append_child(root, a);
        doc.append_child(root, b);

        let first = to_text(&doc, root, 0);
        let second = to_text(&doc, root, 0);
        assert_eq!(first, second);
    }

    #[test]
    fn document_to_text_requires_a_root() {
        let mut doc = Document::new();
        assert_eq!(document_to_text(&doc), None);

        let root = doc.create_element("root", Vec::new());
        doc.set_root(root);
        assert_eq!(document_to_text(&doc), Some("<root />\n".to_string()));
    }
}
