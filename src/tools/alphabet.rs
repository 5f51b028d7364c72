/// Sentinel appended by the forward BWT. It never occurs in a raw sequence.
pub const SENTINEL: u8 = b'$';

/// Every symbol the codec accepts, sentinel included.
pub const ALPHABET: [u8; 6] = [b'A', b'T', b'G', b'C', b'N', SENTINEL];

/// True if the byte is one of the nucleotide codes or the sentinel.
#[inline(always)]
pub fn is_symbol(byte: u8) -> bool {
    ALPHABET.contains(&byte)
}

/// True if every character of the text belongs to the alphabet. An uncompressed sequence is
/// one that passes this test; anything else is treated as packed Huffman output.
pub fn is_uncompressed(text: &str) -> bool {
    text.bytes().all(is_symbol)
}

/// True if the sequence carries the BWT sentinel.
pub fn is_transformed(text: &str) -> bool {
    text.as_bytes().contains(&SENTINEL)
}

/// Strip the spaces and line breaks a sequence file may be wrapped with.
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|c| !matches!(c, ' ' | '\n' | '\r')).collect()
}

/// Return the first character outside the alphabet, if any.
pub fn first_foreign(text: &str) -> Option<char> {
    text.chars().find(|&c| !c.is_ascii() || !is_symbol(c as u8))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn alphabet_test() {
        assert!(is_uncompressed("ATGCN$"));
        assert!(is_uncompressed(""));
        assert!(!is_uncompressed("ATGX"));
        assert!(!is_uncompressed("atgc"));
    }

    #[test]
    fn sanitize_test() {
        assert_eq!(sanitize("AT GC\nNA\r\n"), "ATGCNA");
    }

    #[test]
    fn foreign_test() {
        assert_eq!(first_foreign("ACGT"), None);
        assert_eq!(first_foreign("ACéT"), Some('é'));
        assert_eq!(first_foreign("AC,T"), Some(','));
    }

    #[test]
    fn transformed_test() {
        assert!(is_transformed("AC$T"));
        assert!(!is_transformed("ACT"));
    }
}
