use log::debug;

use crate::error::{Result, ShrinkError};

/// Concatenated code bits grouped into 8 bit code units. The last unit is not padded: it holds
/// its bits at their natural width, recorded in `last_width` (1-8).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedSequence {
    units: Vec<u8>,
    last_width: u8,
}

impl PackedSequence {
    /// Check that the width is 1-8 and that the final unit fits in it.
    pub fn new(units: Vec<u8>, last_width: u8) -> Result<Self> {
        if !(1..=8).contains(&last_width) {
            return Err(ShrinkError::InvalidTable(format!(
                "final unit width {} is not in 1..=8",
                last_width
            )));
        }
        if let Some(&last) = units.last() {
            if last_width < 8 && last >> last_width != 0 {
                return Err(ShrinkError::InvalidTable(format!(
                    "final unit {} does not fit in {} bits",
                    last, last_width
                )));
            }
        }
        Ok(Self { units, last_width })
    }

    /// Rebuild a packed sequence from its text form, one char per code unit.
    pub fn from_text(text: &str, last_width: u8) -> Result<Self> {
        let units = text
            .chars()
            .map(|c| u8::try_from(c).map_err(|_| ShrinkError::InvalidPackedChar(c)))
            .collect::<Result<Vec<u8>>>()?;
        Self::new(units, last_width)
    }

    pub fn units(&self) -> &[u8] {
        &self.units
    }

    pub fn last_width(&self) -> u8 {
        self.last_width
    }

    /// Number of code bits held
    pub fn bit_len(&self) -> usize {
        match self.units.len() {
            0 => 0,
            n => (n - 1) * 8 + self.last_width as usize,
        }
    }

    /// Text form: every code unit becomes the char U+0000..=U+00FF of the same value.
    pub fn as_text(&self) -> String {
        self.units.iter().map(|&unit| char::from(unit)).collect()
    }
}

/// Packs a bit string into code units, most significant bit first.
pub struct BitPacker {
    pub output: Vec<u8>,
    pub last_bits: u8,
    queue: u64,
    q_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of the size specified (in units). Call
    /// flush() to push the final partial unit before reading the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            last_bits: 0,
            queue: 0,
            q_bits: 0,
        }
    }

    /// Internal write function common to all out functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Puts a single bit on the stream.
    pub fn out_bit(&mut self, bit: bool) {
        self.queue <<= 1;
        self.queue |= bit as u64;
        self.q_bits += 1;
        self.write_stream();
    }

    /// Puts a string of '0' and '1' on the stream. `offset` is only used for error reports.
    pub fn out_code(&mut self, code: &str, offset: usize) -> Result<()> {
        for (i, digit) in code.bytes().enumerate() {
            match digit {
                b'0' => self.out_bit(false),
                b'1' => self.out_bit(true),
                _ => return Err(ShrinkError::NotBinary { offset: offset + i }),
            }
        }
        Ok(())
    }

    /// Flushes the remaining bits (1-7) as one final unit WITHOUT padding, and records
    /// their count. A stream ending on a unit boundary records a width of 8.
    pub fn flush(&mut self) {
        if self.q_bits > 0 {
            self.last_bits = self.q_bits;
            let mask = (1_u64 << self.q_bits) - 1;
            self.output.push((self.queue & mask) as u8);
            self.queue = 0;
            self.q_bits = 0;
        } else {
            self.last_bits = 8;
        }
    }

    /// Flush and hand over the packed units.
    pub fn finish(mut self) -> PackedSequence {
        self.flush();
        PackedSequence {
            units: self.output,
            last_width: self.last_bits,
        }
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format! {"[{}.{}]",((self.output.len() * 8) + self.q_bits as usize)/8, ((self.output.len() * 8) + self.q_bits as usize)%8}
    }
}

/// Pack a bit string into 8 bit code units.
pub fn pack(bits: &str) -> Result<PackedSequence> {
    let mut bw = BitPacker::new(bits.len() / 8 + 1);
    bw.out_code(bits, 0)?;
    let packed = bw.finish();
    debug!(
        "Packed {} bits into {} units, final unit width {}",
        bits.len(),
        packed.units.len(),
        packed.last_width
    );
    Ok(packed)
}
