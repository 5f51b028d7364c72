use log::{debug, trace};
use std::cell::OnceCell;

use super::code_table::CodeTable;
use crate::error::{Result, ShrinkError};
use crate::tools::freq_count::FrequencyEntry;

/// A node of the code tree. Leaves own a symbol, internal nodes own exactly two children.
/// Every node carries the frequency of its whole subtree.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Node {
    Leaf {
        symbol: u8,
        freq: u32,
    },
    Internal {
        freq: u32,
        zero: Box<Node>,
        one: Box<Node>,
    },
}

impl Node {
    /// Create a leaf from a frequency entry
    pub fn leaf(entry: &FrequencyEntry) -> Node {
        Node::Leaf {
            symbol: entry.symbol,
            freq: entry.count,
        }
    }

    /// Join two subtrees under a new internal node
    pub fn join(zero: Node, one: Node) -> Node {
        Node::Internal {
            freq: zero.freq() + one.freq(),
            zero: Box::new(zero),
            one: Box::new(one),
        }
    }

    pub fn freq(&self) -> u32 {
        match self {
            Node::Leaf { freq, .. } | Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Longest root-to-leaf path below this node.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { zero, one, .. } => 1 + zero.depth().max(one.depth()),
        }
    }
}

/// An immutable code tree. The code table is derived on first use and kept with the tree.
#[derive(Debug)]
pub struct CodeTree {
    root: Node,
    table: OnceCell<CodeTable>,
}

impl CodeTree {
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Encode/decode maps of this tree, computed once.
    pub fn table(&self) -> &CodeTable {
        self.table.get_or_init(|| CodeTable::from_tree(&self.root))
    }
}

/// Build the code tree from an ascending frequency list.
///
/// This is a sequential fold over the list, not a priority queue merge. The two lowest entries
/// form the first root. Each following entry is hung on the zero branch of a new root whose one
/// branch is the running tree. When exactly two entries remain they are first paired into a
/// sibling node, which becomes the zero branch of the final root. The result is a chain, which
/// is not Huffman-optimal for skewed frequencies, but the exact shape must be kept so that
/// decode tables written earlier stay valid.
pub fn build_tree(list: &[FrequencyEntry]) -> Result<CodeTree> {
    let (first, second) = match list {
        [] => return Err(ShrinkError::EmptyInput),
        [_] => return Err(ShrinkError::DegenerateAlphabet(1)),
        [first, second, ..] => (first, second),
    };
    let n = list.len();

    // The two lowest entries make the first root
    let mut root = Node::join(Node::leaf(first), Node::leaf(second));
    let mut i = 2;

    while i < n {
        if i == n - 2 {
            // The last two entries become siblings under the final root
            let sibling = Node::join(Node::leaf(&list[i]), Node::leaf(&list[i + 1]));
            root = Node::join(sibling, root);
            break;
        }
        root = Node::join(Node::leaf(&list[i]), root);
        i += 1;
    }

    debug!(
        "Built code tree of {} leaves, weight {}, depth {}",
        n,
        root.freq(),
        root.depth()
    );
    trace!("{:?}", root);
    Ok(CodeTree {
        root,
        table: OnceCell::new(),
    })
}
