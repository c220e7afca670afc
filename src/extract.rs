//! Byte-to-field windowing
//!
//! Slices a byte stream into the three overlapping field sequences: every
//! byte, every aligned big-endian pair and every aligned big-endian quad.

/// Fields completed by a single byte
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fields {
    /// The byte itself
    pub byte: u8,
    /// Big-endian pair ending at this byte, on every second byte
    pub word: Option<u16>,
    /// Big-endian quad ending at this byte, on every fourth byte
    pub dword: Option<u32>,
}

/// Incremental field extractor
///
/// Keeps the most recent four bytes in a shift register. Pairs and quads are
/// aligned to the start of the stream; a trailing group shorter than two or
/// four bytes never produces a field.
///
/// # Example
///
/// ```
/// use bytestats::extract::FieldExtractor;
///
/// let mut extractor = FieldExtractor::new();
///
/// let fields: Vec<_> = [0x00, 0x01, 0x00, 0x02]
///     .into_iter()
///     .map(|b| extractor.push(b))
///     .collect();
///
/// assert_eq!(fields[1].word, Some(0x0001));
/// assert_eq!(fields[3].word, Some(0x0002));
/// assert_eq!(fields[3].dword, Some(0x0001_0002));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FieldExtractor {
    /// Last four bytes, most recent in the low byte
    window: u32,
    /// Number of bytes pushed
    bytes_seen: u64,
}

impl FieldExtractor {
    /// Create an extractor at the start of a stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bytes consumed so far
    pub fn bytes_seen(&self) -> u64 {
        self.bytes_seen
    }

    /// Consume one byte and return the fields it completes
    #[inline]
    pub fn push(&mut self, byte: u8) -> Fields {
        self.window = (self.window << 8) | u32::from(byte);
        self.bytes_seen += 1;

        let word = (self.bytes_seen % 2 == 0).then_some(self.window as u16);
        let dword = (self.bytes_seen % 4 == 0).then_some(self.window);

        Fields { byte, word, dword }
    }

    /// Number of fields of each width emitted so far, `(bytes, words, dwords)`
    pub fn field_counts(&self) -> (u64, u64, u64) {
        (self.bytes_seen, self.bytes_seen / 2, self.bytes_seen / 4)
    }
}
