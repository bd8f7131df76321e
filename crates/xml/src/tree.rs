//! Arena-backed XML DOM.
//!
//! Nodes live in a flat `Vec` owned by `Document`; a `NodeId` is a plain
//! index into it. Parent links are navigational only: ownership always flows
//! from `Document` to node to child ids, so the tree is acyclic by
//! construction and drops flatly regardless of nesting depth.

/// Handle into a `Document`'s node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

#[derive(Debug)]
struct NodeData {
    name: String,
    attributes: Vec<(String, String)>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// XML document tree.
///
/// All navigation and accessor operations are keyed by `NodeId`. Passing an
/// id from a different `Document` is a programmer error and may panic or
/// return nonsense.
#[derive(Debug, Default)]
pub struct Document {
    nodes: Vec<NodeData>,
    root: Option<NodeId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached element node with its attributes fixed at creation.
    ///
    /// Panics on an empty name: the event source guarantees non-empty element
    /// names, so an empty one is a bug in the caller, not input to recover
    /// from.
    pub fn create_element(&mut self, name: &str, attributes: Vec<(String, String)>) -> NodeId {
        assert!(!name.is_empty(), "element name must not be empty");
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            name: name.to_string(),
            attributes,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn set_root(&mut self, id: NodeId) {
        debug_assert!(self.node(id).parent.is_none(), "root must not have a parent");
        self.root = Some(id);
    }

    /// Appends `child` as the last child of `parent` and sets the child's
    /// parent back-reference.
    ///
    /// Detachment is not supported, so a node can only ever be appended once;
    /// appending a node that already has a parent panics.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        assert!(
            self.node(child).parent.is_none(),
            "node already has a parent"
        );
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.node(id).name
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.node(id).children.len()
    }

    pub fn child_at(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.node(id).children.get(index).copied()
    }

    /// First direct child named `name`, in insertion order. Not recursive.
    pub fn child_named(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.node(id)
            .children
            .iter()
            .copied()
            .find(|&child| self.node(child).name == name)
    }

    pub fn attributes(&self, id: NodeId) -> &[(String, String)] {
        &self.node(id).attributes
    }

    /// Value of the first attribute named `name`, in insertion order.
    ///
    /// Duplicate names are legal; later pairs are shadowed by the first, not
    /// removed.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id)
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Boolean view of an attribute: `"1"`/`"true"` and `"0"`/`"false"`
    /// parse; a missing attribute and an unparsable value both read as
    /// `None`. Callers who care about the difference check `attribute` first.
    pub fn attribute_bool(&self, id: NodeId, name: &str) -> Option<bool> {
        match self.attribute(id, name)? {
            "1" | "true" => Some(true),
            "0" | "false" => Some(false),
            _ => None,
        }
    }

    /// Integer view of an attribute; unparsable values read as missing.
    pub fn attribute_i64(&self, id: NodeId, name: &str) -> Option<i64> {
        self.attribute(id, name)?.parse().ok()
    }

    /// Owned-string view of an attribute.
    pub fn attribute_string(&self, id: NodeId, name: &str) -> Option<String> {
        self.attribute(id, name).map(str::to_string)
    }

    /// Appends a `(name, value)` pair. Existing pairs with the same name are
    /// kept; duplicates are legal and preserved.
    pub fn append_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        self.node_mut(id)
            .attributes
            .push((name.to_string(), value.to_string()));
    }

    /// Total number of nodes in the arena, reachable or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0 as usize]
    }
}
