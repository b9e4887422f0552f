use std::cmp::Ordering;

/// Handle to a node stored in a [`SearchTree`](super::SearchTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(super) usize);

/// One explored board: its serialized state, heuristic value and how it was reached.
#[derive(Debug, Clone)]
pub struct SearchNode {
    state: String,
    value: usize,
    tile_moved: Option<u32>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SearchNode {
    pub fn new(state: impl Into<String>, value: usize) -> Self {
        Self {
            state: state.into(),
            value,
            tile_moved: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_move(state: impl Into<String>, value: usize, tile_moved: u32) -> Self {
        Self {
            tile_moved: Some(tile_moved),
            ..Self::new(state, value)
        }
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn value(&self) -> usize {
        self.value
    }

    /// Tile moved from the parent to reach this node; `None` for the root.
    pub fn tile_moved(&self) -> Option<u32> {
        self.tile_moved
    }

    pub fn set_tile_moved(&mut self, tile: u32) {
        self.tile_moved = Some(tile);
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub(super) fn add_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    /// Orders by heuristic value only. A missing node always ranks after this one.
    pub fn compare(&self, other: Option<&SearchNode>) -> Ordering {
        match other {
            Some(other) => self.value.cmp(&other.value),
            None => Ordering::Less,
        }
    }
}

/// Frontier entry. Entries with equal heuristic values compare equal.
#[derive(Debug)]
pub(super) struct FrontierEntry {
    pub(super) value: usize,
    pub(super) id: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
impl Eq for FrontierEntry {}
impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}
