//! BitReader: reads the code bits back out of a packed sequence and decodes them.
//!
//! Every unit is read at its full 8 bit width except the last one, which is read at the
//! width recorded when the sequence was packed.

use log::debug;

use super::bitpacker::PackedSequence;
use crate::error::{Result, ShrinkError};
use crate::huffman_coding::code_table::DecodeTable;

/// Reads the bits of a packed sequence, most significant first.
#[derive(Debug)]
pub struct BitReader<'a> {
    units: &'a [u8],
    last_width: u8,
    cursor: usize,
    bit_index: u8,
}

impl<'a> BitReader<'a> {
    pub fn new(packed: &'a PackedSequence) -> Self {
        Self {
            units: packed.units(),
            last_width: packed.last_width(),
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Bit width of the unit at the cursor
    #[inline(always)]
    fn width(&self) -> u8 {
        if self.cursor + 1 == self.units.len() {
            self.last_width
        } else {
            8
        }
    }

    /// Return the next bit as Some(true) for 1, Some(false) for 0, or None when the
    /// sequence is exhausted.
    pub fn bit(&mut self) -> Option<bool> {
        if self.cursor >= self.units.len() {
            return None;
        }
        let width = self.width();
        let bit = (self.units[self.cursor] >> (width - 1 - self.bit_index)) & 1;
        self.bit_index += 1;
        if self.bit_index == width {
            self.cursor += 1;
            self.bit_index = 0;
        }
        Some(bit == 1)
    }

    /// Debugging function. Report current position in the units.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

/// Rebuild the bit string held by a packed sequence.
pub fn unpack(packed: &PackedSequence) -> String {
    let mut br = BitReader::new(packed);
    let mut bits = String::with_capacity(packed.bit_len());
    while let Some(bit) = br.bit() {
        bits.push(if bit { '1' } else { '0' });
    }
    bits
}

/// Greedy prefix decoding: grow a candidate one bit at a time until it matches a code, emit
/// the symbol and start over after the match.
pub fn decode_bits(bits: &str, table: &DecodeTable) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(bits.len());
    let mut offset = 0;
    let end = bits.len();

    while offset < end {
        let mut len = 1;
        loop {
            // Ran off the end, or past anything the table could match
            if offset + len > end || len > table.longest() {
                return Err(ShrinkError::MalformedCode { offset });
            }
            if let Some(symbol) = table.get(&bits[offset..offset + len]) {
                out.push(symbol);
                offset += len;
                break;
            }
            len += 1;
        }
    }
    debug!("Decoded {} bits into {} symbols", end, out.len());
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bitstream::bitpacker::pack;

    fn table(pairs: &[(&str, u8)]) -> DecodeTable {
        DecodeTable::from_entries(pairs.iter().map(|&(c, s)| (c.to_string(), s)).collect())
            .unwrap()
    }

    #[test]
    fn basic_test() {
        let packed = PackedSequence::new(vec![0b1000_0001], 8).unwrap();
        let mut br = BitReader::new(&packed);
        let bits = (0..8).map(|_| br.bit().unwrap()).collect::<Vec<_>>();
        assert_eq!(
            bits,
            vec![true, false, false, false, false, false, false, true]
        );
        assert_eq!(br.bit(), None);
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn ten_bit_test() {
        let packed = pack("1010110110").unwrap();
        assert_eq!(unpack(&packed), "1010110110");
    }

    #[test]
    fn short_last_unit_test() {
        // A leading zero in the final unit must survive
        let packed = PackedSequence::new(vec![0xff, 0b01], 3).unwrap();
        assert_eq!(unpack(&packed), "11111111001");
    }

    #[test]
    fn loc_test() {
        let packed = PackedSequence::new(vec![1, 2, 3], 8).unwrap();
        let mut br = BitReader::new(&packed);
        (0..9).for_each(|_| {
            br.bit();
        });
        assert_eq!(br.loc(), "[1.1]");
    }

    #[test]
    fn greedy_decode_test() {
        let t = table(&[("0", b'A'), ("10", b'T'), ("11", b'C')]);
        assert_eq!(decode_bits("00101011", &t).unwrap(), b"AATTC");
        assert_eq!(decode_bits("", &t).unwrap(), b"");
    }

    #[test]
    fn malformed_test() {
        let t = table(&[("0", b'A'), ("10", b'T'), ("11", b'C')]);
        // A dangling 1 at the end has no match
        assert!(matches!(
            decode_bits("0101", &t),
            Err(ShrinkError::MalformedCode { offset: 3 })
        ));
        // Mismatched table: nothing ever matches
        let other = table(&[("00", b'A'), ("01", b'C')]);
        assert!(matches!(
            decode_bits("1100", &other),
            Err(ShrinkError::MalformedCode { offset: 0 })
        ));
    }
}
