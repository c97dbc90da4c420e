use crate::bits::Bits;
use crate::util;
use std::{
    cmp::Reverse,
    collections::HashMap,
    io::{self, Write},
};

/// represents the prefix code for one text's symbols
#[derive(Debug, PartialEq, Eq)]
pub struct Tree(Node);

/// Branches carry no symbol at all, so no placeholder value can collide
/// with a legitimate input symbol.
#[derive(Debug, PartialEq, Eq)]
enum Node {
    Leaf {
        symbol: char,
        weight: usize,
    },
    Branch {
        weight: usize,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Tree {
    /// Build the tree from a mapping of symbol to occurrence count.
    /// Returns None at empty input.
    ///
    /// Leaves are ordered by descending weight, ties broken by symbol so the
    /// result is repeatable across runs. Each round pairs adjacent nodes in
    /// that order (an odd trailing node carries forward unchanged), then
    /// re-sorts by descending weight; the sort is stable, so equal weights
    /// keep the previous round's order.
    pub fn new(occurrences: HashMap<char, usize>) -> Option<Self> {
        let mut entries: Vec<(char, usize)> = occurrences.into_iter().collect();
        entries.sort_by_key(|&(symbol, weight)| (Reverse(weight), symbol));
        let mut nodes: Vec<Node> = entries
            .into_iter()
            .map(|(symbol, weight)| Node::Leaf { symbol, weight })
            .collect();
        while nodes.len() > 1 {
            let mut paired = Vec::with_capacity(nodes.len() / 2 + 1);
            let mut remaining = nodes.into_iter();
            while let Some(left) = remaining.next() {
                match remaining.next() {
                    Some(right) => paired.push(Node::branch(left, right)),
                    None => paired.push(left),
                }
            }
            paired.sort_by_key(|node| Reverse(node.weight()));
            nodes = paired;
        }
        nodes.pop().map(Tree)
    }

    /// count occurrence of each symbol in the given text and build the tree
    pub fn from_text(text: &str) -> Option<Self> {
        Self::new(util::count_occurrences(text.chars()))
    }

    /// Root-to-leaf path for `symbol`: bit 0 descends left, bit 1 right.
    /// A tree whose root is a leaf yields the empty path for its one symbol.
    pub fn path_of(&self, symbol: char) -> Option<Bits> {
        let Tree(root) = self;
        let mut path = Bits::new();
        root.search(symbol, &mut path).then(|| path)
    }

    /// Encode the whole text, searching fresh from the root for each symbol
    /// in original order. Err carries the first symbol with no leaf in the
    /// tree, which cannot happen when the tree was built from this text.
    pub fn encode(&self, text: &str) -> Result<Bits, char> {
        let mut encoded = Bits::new();
        for symbol in text.chars() {
            let path = self.path_of(symbol).ok_or(symbol)?;
            encoded.extend_from_bitslice(&path);
        }
        Ok(encoded)
    }

    /// print the tree shape, right subtree above left, indented by depth
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let Tree(root) = self;
        root.dump(out, 0)
    }
}

impl Node {
    fn branch(left: Node, right: Node) -> Self {
        Node::Branch {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } | Node::Branch { weight, .. } => *weight,
        }
    }

    /// depth-first search, left before right, unwinding the path on failure
    fn search(&self, target: char, path: &mut Bits) -> bool {
        match self {
            Node::Leaf { symbol, .. } => *symbol == target,
            Node::Branch { left, right, .. } => {
                path.push(false);
                if left.search(target, path) {
                    return true;
                }
                path.pop();
                path.push(true);
                if right.search(target, path) {
                    return true;
                }
                path.pop();
                false
            }
        }
    }

    fn dump<W: Write>(&self, out: &mut W, depth: usize) -> io::Result<()> {
        match self {
            Node::Leaf { symbol, weight } => {
                writeln!(out, "{}{:?}->{}", "  ".repeat(depth), symbol, weight)
            }
            Node::Branch {
                weight,
                left,
                right,
            } => {
                right.dump(out, depth + 1)?;
                writeln!(out, "{}*->{}", "  ".repeat(depth), weight)?;
                left.dump(out, depth + 1)
            }
        }
    }
}
