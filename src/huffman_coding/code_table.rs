//! Walks a code tree and records the bit path of every leaf.
//!
//! A zero branch appends "0" to the path, a one branch appends "1". Each branch gets its own
//! copy of the path, so siblings never see each other's digits.

use log::debug;
use rustc_hash::FxHashMap;

use super::huffman::Node;
use crate::error::{Result, ShrinkError};

/// Bit code -> symbol map, in the order the leaves were reached during the tree walk.
/// That order is the one written to compressed files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeTable {
    entries: Vec<(String, u8)>,
    lookup: FxHashMap<String, u8>,
    longest: usize,
}

impl DecodeTable {
    /// Build a decode table from (code, symbol) pairs. Codes must be non-empty strings of
    /// binary digits and appear only once.
    pub fn from_entries(entries: Vec<(String, u8)>) -> Result<Self> {
        let mut lookup = FxHashMap::default();
        let mut longest = 0;
        for (code, symbol) in &entries {
            if code.is_empty() || !code.bytes().all(|b| b == b'0' || b == b'1') {
                return Err(ShrinkError::InvalidTable(format!(
                    "code {:?} is not a bit string",
                    code
                )));
            }
            if lookup.insert(code.clone(), *symbol).is_some() {
                return Err(ShrinkError::InvalidTable(format!(
                    "code {} appears twice",
                    code
                )));
            }
            longest = longest.max(code.len());
        }
        Ok(Self {
            entries,
            lookup,
            longest,
        })
    }

    /// Symbol for an exact code match
    #[inline(always)]
    pub fn get(&self, code: &str) -> Option<u8> {
        self.lookup.get(code).copied()
    }

    pub fn entries(&self) -> &[(String, u8)] {
        &self.entries
    }

    /// Length of the longest code. No match is possible past it.
    pub fn longest(&self) -> usize {
        self.longest
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if no code is a prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        self.entries.iter().all(|(a, _)| {
            self.entries
                .iter()
                .all(|(b, _)| a == b || !b.starts_with(a.as_str()))
        })
    }
}

/// The symbol <-> bit code mapping derived from one code tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    encode: FxHashMap<u8, String>,
    decode: DecodeTable,
}

impl CodeTable {
    /// Walk the tree zero branch first and collect the code of every leaf.
    pub fn from_tree(root: &Node) -> CodeTable {
        let mut leaves: Vec<(String, u8)> = Vec::new();
        // Explicit stack of (node, path). The one branch is pushed first so the zero
        // branch is visited first.
        let mut stack: Vec<(&Node, String)> = vec![(root, String::new())];

        while let Some((node, path)) = stack.pop() {
            match node {
                Node::Internal { zero, one, .. } => {
                    let mut one_path = path.clone();
                    one_path.push('1');
                    let mut zero_path = path;
                    zero_path.push('0');
                    stack.push((&**one, one_path));
                    stack.push((&**zero, zero_path));
                }
                Node::Leaf { symbol, .. } => leaves.push((path, *symbol)),
            }
        }

        let encode = leaves
            .iter()
            .map(|(code, symbol)| (*symbol, code.clone()))
            .collect::<FxHashMap<u8, String>>();
        debug!(
            "Code table: {:?}",
            leaves
                .iter()
                .map(|(code, symbol)| format!("{}:{}", *symbol as char, code))
                .collect::<Vec<_>>()
        );

        let lookup = leaves.iter().cloned().collect::<FxHashMap<String, u8>>();
        let longest = leaves.iter().map(|(code, _)| code.len()).max().unwrap_or(0);
        CodeTable {
            encode,
            decode: DecodeTable {
                entries: leaves,
                lookup,
                longest,
            },
        }
    }

    /// Bit code of a symbol
    pub fn code(&self, symbol: u8) -> Option<&str> {
        self.encode.get(&symbol).map(String::as_str)
    }

    pub fn decode_table(&self) -> &DecodeTable {
        &self.decode
    }

    /// Concatenate the code of every symbol. Codes are prefix free, so no separator is needed.
    pub fn encode(&self, data: &[u8]) -> Result<String> {
        let mut bits = String::with_capacity(data.len() * 2);
        for &symbol in data {
            match self.encode.get(&symbol) {
                Some(code) => bits.push_str(code),
                None => return Err(ShrinkError::UnknownSymbol(symbol as char)),
            }
        }
        Ok(bits)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::huffman::build_tree;
    use crate::tools::freq_count::{freqs, FrequencyEntry};

    #[test]
    fn encode_two_symbols_test() {
        let list = vec![FrequencyEntry::new(b'C', 1), FrequencyEntry::new(b'A', 3)];
        let tree = build_tree(&list).unwrap();
        let bits = tree.table().encode(b"AC").unwrap();
        assert_eq!(bits, "10");
    }

    #[test]
    fn bijection_test() {
        let tree = build_tree(&freqs(b"GATTACA$NNCCG").unwrap()).unwrap();
        let table = tree.table();
        let decode = table.decode_table();
        assert_eq!(decode.len(), 6);
        for &sym in b"ATGCN$" {
            let code = table.code(sym).unwrap();
            assert_eq!(decode.get(code), Some(sym));
        }
    }

    #[test]
    fn prefix_free_test() {
        let inputs: [&[u8]; 6] = [b"AC", b"ACG", b"ACGT", b"ACGTN", b"ACGTN$", b"AAAAAACCCGT$N"];
        for input in inputs {
            let tree = build_tree(&freqs(input).unwrap()).unwrap();
            assert!(tree.table().decode_table().is_prefix_free());
        }
    }

    #[test]
    fn walk_order_test() {
        let tree = build_tree(&freqs(b"AATC").unwrap()).unwrap();
        let order = tree
            .table()
            .decode_table()
            .entries()
            .iter()
            .map(|(code, sym)| (code.as_str(), *sym))
            .collect::<Vec<_>>();
        assert_eq!(order, vec![("0", b'A'), ("10", b'T'), ("11", b'C')]);
    }

    #[test]
    fn unknown_symbol_test() {
        let tree = build_tree(&freqs(b"ACCA").unwrap()).unwrap();
        assert!(matches!(
            tree.table().encode(b"ACG"),
            Err(ShrinkError::UnknownSymbol('G'))
        ));
    }

    #[test]
    fn table_checks_test() {
        let ok = DecodeTable::from_entries(vec![("0".into(), b'A'), ("1".into(), b'C')]).unwrap();
        assert_eq!(ok.longest(), 1);
        assert!(DecodeTable::from_entries(vec![("0".into(), b'A'), ("0".into(), b'C')]).is_err());
        assert!(DecodeTable::from_entries(vec![("2".into(), b'A')]).is_err());
        let not_prefix_free =
            DecodeTable::from_entries(vec![("0".into(), b'A'), ("01".into(), b'C')]).unwrap();
        assert!(!not_prefix_free.is_prefix_free());
    }
}
