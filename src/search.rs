//! Greedy best-first search over board states.
//!
//! The frontier is ordered by heuristic value alone, with no path cost, so the
//! path found reaches the goal but is not necessarily the shortest one.

mod node;

pub use node::{NodeId, SearchNode};

use log::{debug, info, trace, warn};
use node::FrontierEntry;
use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashSet},
};

use crate::puzzle::{Puzzle, PuzzleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Unstarted,
    /// A goal board was dequeued.
    Solved,
    /// The frontier ran dry without reaching the goal.
    Exhausted,
}

/// Search tree rooted at the starting board. Nodes live in an arena and refer
/// to each other by [`NodeId`].
#[derive(Debug)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
    visited: HashSet<String>,
    status: SearchStatus,
    terminal: Option<Puzzle>,
    moves: Vec<u32>,
}

impl SearchTree {
    const ROOT: NodeId = NodeId(0);

    pub fn new(mut root: SearchNode) -> Self {
        root.set_parent(None);
        Self {
            nodes: vec![root],
            visited: HashSet::new(),
            status: SearchStatus::Unstarted,
            terminal: None,
            moves: Vec::new(),
        }
    }

    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        Self::new(SearchNode::new(puzzle.serialize(), puzzle.heuristic()))
    }

    /// Expands nodes in order of lowest heuristic until a solved board is found
    /// or every reachable board has been expanded, then records the moves from
    /// the root to the goal, or to the best board seen if the goal is unreachable.
    ///
    /// Runs once; later calls do nothing.
    pub fn solve(&mut self) -> Result<(), PuzzleError> {
        if self.status != SearchStatus::Unstarted {
            warn!("Search already ran ({:?})", self.status);
            return Ok(());
        }
        debug!("Solving from {}", self.nodes[Self::ROOT.0].state());

        // A bad root key fails here, before any state changes.
        let _: Puzzle = self.root().state().parse()?;

        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse(self.entry(Self::ROOT)));
        let mut best: Option<NodeId> = None;
        let mut solved = false;

        while let Some(Reverse(FrontierEntry { id, .. })) = frontier.pop() {
            let node = &self.nodes[id.0];
            if node.compare(best.map(|b| &self.nodes[b.0])).is_lt() {
                best = Some(id);
            }
            if node.value() == 0 {
                solved = true;
                break;
            }
            if self.visited.contains(node.state()) {
                continue;
            }

            let state = node.state().to_owned();
            let board: Puzzle = state.parse()?;
            trace!("Expanding {} (h = {})", state, node.value());
            self.visited.insert(state);

            for tile in board.legal_moves() {
                let mut next = board.clone();
                next.apply_move(tile);

                let child = self.push_child(id, &next, tile);
                frontier.push(Reverse(self.entry(child)));
            }
        }

        // The root is always dequeued first, so a best node exists.
        let terminal = best.unwrap_or(Self::ROOT);
        let board: Puzzle = self.nodes[terminal.0].state().parse()?;
        self.terminal = Some(board);
        self.status = if solved {
            SearchStatus::Solved
        } else {
            SearchStatus::Exhausted
        };
        self.set_moves(terminal);

        info!(
            "Search {:?} after {} states, {} moves to h = {}",
            self.status,
            self.visited.len(),
            self.moves.len(),
            self.nodes[terminal.0].value()
        );
        Ok(())
    }

    fn entry(&self, id: NodeId) -> FrontierEntry {
        FrontierEntry {
            value: self.nodes[id.0].value(),
            id,
        }
    }

    fn push_child(&mut self, parent: NodeId, board: &Puzzle, tile: u32) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut child = SearchNode::with_move(board.serialize(), board.heuristic(), tile);
        child.set_parent(Some(parent));
        self.nodes.push(child);
        self.nodes[parent.0].add_child(id);
        id
    }

    /// Stacks the moves from `terminal` back to the root so they pop in play order.
    fn set_moves(&mut self, terminal: NodeId) {
        self.moves.clear();
        let mut current = &self.nodes[terminal.0];
        while let Some(parent) = current.parent() {
            if let Some(tile) = current.tile_moved() {
                self.moves.push(tile);
            }
            current = &self.nodes[parent.0];
        }
    }

    pub fn has_next_move(&self) -> bool {
        !self.moves.is_empty()
    }

    /// Next tile to move, or `None` once the path is used up.
    pub fn next_move(&mut self) -> Option<u32> {
        self.moves.pop()
    }

    pub fn drain_moves(&mut self) -> impl Iterator<Item = u32> + '_ {
        std::iter::from_fn(move || self.next_move())
    }

    /// Number of distinct boards expanded.
    pub fn moves_tried(&self) -> usize {
        self.visited.len()
    }

    pub fn is_solvable(&self) -> bool {
        self.status == SearchStatus::Solved
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Board the move path leads to: the goal, or the best board found. `None` before [`solve`](Self::solve).
    pub fn best_terminal_board(&self) -> Option<&Puzzle> {
        self.terminal.as_ref()
    }

    pub fn root(&self) -> &SearchNode {
        &self.nodes[Self::ROOT.0]
    }

    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}
