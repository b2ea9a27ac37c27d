//! Search-node arena.
//!
//! BFS builds a tree of states rooted at the start board. Nodes live in a
//! single arena owned by one solve call and store the index of their parent
//! instead of a reference, so parent chains can be walked without ownership
//! cycles. Nodes are never mutated after creation; applying a move always
//! pushes a new node.

use npuzzle_core::{Board, Move};

/// Stable handle to a node in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

/// A single state in the search tree.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode {
    board: Board,
    parent: Option<NodeId>,
    moved: Option<Move>,
    depth: u8,
}

impl SearchNode {
    pub(crate) fn board(&self) -> Board {
        self.board
    }

    pub(crate) fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The move that produced this node from its parent; `None` for the root.
    pub(crate) fn moved(&self) -> Option<Move> {
        self.moved
    }

    /// Path length from the start node.
    pub(crate) fn depth(&self) -> u8 {
        self.depth
    }
}

/// Arena owning every node created during one solve call.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Pushes the start node (depth 0, no parent).
    pub(crate) fn push_root(&mut self, board: Board) -> NodeId {
        self.push(SearchNode {
            board,
            parent: None,
            moved: None,
            depth: 0,
        })
    }

    /// Pushes a node produced by applying `moved` to `parent`'s board.
    ///
    /// Depth strictly increases along parent chains, so the tree is acyclic
    /// by construction.
    pub(crate) fn push_child(&mut self, parent: NodeId, moved: Move, board: Board) -> NodeId {
        let depth = self.get(parent).depth + 1;
        self.push(SearchNode {
            board,
            parent: Some(parent),
            moved: Some(moved),
            depth,
        })
    }

    pub(crate) fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0 as usize]
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        let id = u32::try_from(self.nodes.len()).expect("arena never outgrows u32 indices");
        self.nodes.push(node);
        NodeId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use npuzzle_core::Move;

    #[test]
    fn test_root_has_no_parent() {
        let mut arena = NodeArena::new();
        let root = arena.push_root(Board::SOLVED);
        let node = arena.get(root);
        assert_eq!(node.depth(), 0);
        assert!(node.parent().is_none());
        assert!(node.moved().is_none());
    }

    #[test]
    fn test_child_depth_increments() {
        let mut arena = NodeArena::new();
        let root = arena.push_root(Board::SOLVED);
        let next = Board::SOLVED.apply(Move::Up).unwrap();
        let child = arena.push_child(root, Move::Up, next);
        let grandchild = arena.push_child(child, Move::Down, Board::SOLVED);

        assert_eq!(arena.get(child).depth(), 1);
        assert_eq!(arena.get(child).parent(), Some(root));
        assert_eq!(arena.get(child).moved(), Some(Move::Up));
        assert_eq!(arena.get(grandchild).depth(), 2);
    }
}
