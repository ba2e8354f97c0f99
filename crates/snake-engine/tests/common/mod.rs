//! A hand-built game tree that implements the position oracle.
//!
//! Node 0 is the root, White moves there and sides alternate by depth.
//! A move is the id of the child node it leads to. A leaf's value is
//! encoded as material: `+v` white pawns or `-v` black pawns, so the static
//! evaluation of a leaf is exactly its value.

#![allow(dead_code)]

use proptest::prelude::*;
use snake_core::{Color, Outcome, PieceKind, PositionOracle};

#[derive(Debug, Clone)]
pub enum Tree {
    Leaf(i32),
    Node(Vec<Tree>),
}

pub fn leaf(value: i32) -> Tree {
    Tree::Leaf(value)
}

pub fn node(children: Vec<Tree>) -> Tree {
    Tree::Node(children)
}

#[derive(Debug, Clone)]
struct Node {
    children: Vec<usize>,
    value: i32,
    side: Color,
}

/// The oracle over a [`Tree`], recording every move applied.
#[derive(Debug, Clone)]
pub struct TreeOracle {
    nodes: Vec<Node>,
    path: Vec<usize>,
    /// Node ids in the order they were applied.
    pub applied: Vec<usize>,
    pub undone: usize,
}

impl TreeOracle {
    pub fn new(tree: &Tree) -> Self {
        let mut nodes = Vec::new();
        build(tree, Color::White, &mut nodes);
        Self {
            nodes,
            path: vec![0],
            applied: Vec::new(),
            undone: 0,
        }
    }

    pub fn current(&self) -> usize {
        *self.path.last().expect("path always holds the root")
    }

    /// Ids of the root-to-current path.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn was_applied(&self, id: usize) -> bool {
        self.applied.contains(&id)
    }

    /// Id of the node reached by following child indices from the root.
    pub fn id_of(&self, child_indices: &[usize]) -> usize {
        child_indices
            .iter()
            .fold(0, |id, &index| self.nodes[id].children[index])
    }
}

fn build(tree: &Tree, side: Color, nodes: &mut Vec<Node>) -> usize {
    let id = nodes.len();
    nodes.push(Node {
        children: Vec::new(),
        value: 0,
        side,
    });
    match tree {
        Tree::Leaf(value) => nodes[id].value = *value,
        Tree::Node(children) => {
            let ids = children.iter().map(|child| build(child, !side, nodes)).collect();
            nodes[id].children = ids;
        }
    }
    id
}

impl PositionOracle for TreeOracle {
    type Move = usize;
    type Location = usize;

    fn legal_moves(&self) -> Vec<usize> {
        self.nodes[self.current()].children.clone()
    }

    fn apply_move(&mut self, mv: usize) {
        assert!(
            self.nodes[self.current()].children.contains(&mv),
            "move {mv} is not a child of node {}",
            self.current()
        );
        self.path.push(mv);
        self.applied.push(mv);
    }

    fn undo_move(&mut self) {
        assert!(self.path.len() > 1, "undo at the root");
        self.path.pop();
        self.undone += 1;
    }

    fn outcome(&self) -> Option<Outcome> {
        None
    }

    fn is_terminal(&self) -> bool {
        self.nodes[self.current()].children.is_empty()
    }

    fn side_to_move(&self) -> Color {
        self.nodes[self.current()].side
    }

    fn is_in_check(&self) -> bool {
        false
    }

    fn locations(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.nodes[self.current()].value.unsigned_abs() as usize
    }

    fn piece_at(&self, _location: usize) -> Option<(PieceKind, Color)> {
        let value = self.nodes[self.current()].value;
        let color = if value > 0 { Color::White } else { Color::Black };
        Some((PieceKind::Pawn, color))
    }
}

/// Random trees up to four plies deep with values in `-20..=20`.
pub fn arb_tree() -> impl Strategy<Value = Tree> {
    let leaf = (-20i32..=20).prop_map(Tree::Leaf);
    leaf.prop_recursive(4, 128, 4, |inner| {
        prop::collection::vec(inner, 1..5).prop_map(Tree::Node)
    })
}
