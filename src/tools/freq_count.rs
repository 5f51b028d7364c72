use crate::error::{Result, ShrinkError};

/// One symbol and the number of times it occurs in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub symbol: u8,
    pub count: u32,
}

impl FrequencyEntry {
    pub fn new(symbol: u8, count: u32) -> Self {
        Self { symbol, count }
    }
}

/// Frequency entries in ascending count order. Ties keep first-occurrence order.
pub type FrequencyList = Vec<FrequencyEntry>;

/// Returns the frequency list of the input data, ascending by count.
///
/// The sort is stable over the order in which symbols first appear, so "AATC" gives
/// T(1), C(1), A(2). The code tree shape depends on this ordering.
pub fn freqs(data: &[u8]) -> Result<FrequencyList> {
    if data.is_empty() {
        return Err(ShrinkError::EmptyInput);
    }
    let mut counts = [0_u32; 256];
    // Symbols in the order we first see them
    let mut seen: Vec<u8> = Vec::with_capacity(8);
    data.iter().for_each(|&el| {
        if counts[el as usize] == 0 {
            seen.push(el);
        }
        counts[el as usize] += 1;
    });

    let mut list = seen
        .iter()
        .map(|&sym| FrequencyEntry::new(sym, counts[sym as usize]))
        .collect::<FrequencyList>();
    // sort_by_key is stable
    list.sort_by_key(|entry| entry.count);
    Ok(list)
}
