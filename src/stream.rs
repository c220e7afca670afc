//! Whole-stream analysis across all three field widths

use crate::extract::FieldExtractor;
use crate::statistics::{FieldStats, Summary};
use crate::traits::StatsError;
use crate::width::BitWidth;

/// Size of the buffer [`StreamStats::read_from`] drains a reader with
#[cfg(feature = "std")]
pub const READ_CHUNK_SIZE: usize = 64 * 1024;

/// Byte-stream analyzer
///
/// Feeds every byte through a [`FieldExtractor`] into one [`FieldStats`] per
/// width. Input may arrive in chunks of any size; the result depends only on
/// the concatenated bytes.
///
/// # Example
///
/// ```
/// use bytestats::{BitWidth, StreamStats};
///
/// let mut stream = StreamStats::new();
/// stream.update(&[0x00, 0x01]);
/// stream.update(&[0x00, 0x02]);
///
/// let report = stream.finish().unwrap();
/// assert_eq!(report.bytes.count, 4);
/// assert!((report.words.average - 1.5).abs() < 1e-12);
/// assert_eq!(report.dwords.count, 1);
/// assert_eq!(report.get(BitWidth::DWord).average, 65538.0);
/// ```
#[derive(Clone, Debug)]
pub struct StreamStats {
    extractor: FieldExtractor,
    bytes: FieldStats,
    words: FieldStats,
    dwords: FieldStats,
}

impl Default for StreamStats {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamStats {
    /// Create an analyzer at the start of a stream
    pub fn new() -> Self {
        Self {
            extractor: FieldExtractor::new(),
            bytes: FieldStats::new(BitWidth::Byte),
            words: FieldStats::new(BitWidth::Word),
            dwords: FieldStats::new(BitWidth::DWord),
        }
    }

    /// Number of bytes consumed so far
    pub fn bytes_seen(&self) -> u64 {
        self.extractor.bytes_seen()
    }

    /// Accumulator for one width
    pub fn accumulator(&self, width: BitWidth) -> &FieldStats {
        match width {
            BitWidth::Byte => &self.bytes,
            BitWidth::Word => &self.words,
            BitWidth::DWord => &self.dwords,
        }
    }

    /// Consume a chunk of the stream
    ///
    /// # Panics
    ///
    /// Panics if an accumulator counter would overflow
    pub fn update(&mut self, data: &[u8]) {
        if let Err(err) = self.try_update(data) {
            panic!("{}", err);
        }
    }

    /// Consume a chunk of the stream, reporting counter overflow
    pub fn try_update(&mut self, data: &[u8]) -> Result<(), StatsError> {
        for &byte in data {
            let fields = self.extractor.push(byte);
            self.bytes.try_add_field(u32::from(fields.byte))?;
            if let Some(word) = fields.word {
                self.words.try_add_field(u32::from(word))?;
            }
            if let Some(dword) = fields.dword {
                self.dwords.try_add_field(dword)?;
            }
        }
        Ok(())
    }

    /// Drain `reader` to end-of-stream, returning the number of bytes read
    ///
    /// Counter overflow surfaces as an [`std::io::ErrorKind::InvalidData`] error
    /// wrapping the [`StatsError`].
    #[cfg(feature = "std")]
    pub fn read_from<R: std::io::Read>(&mut self, mut reader: R) -> std::io::Result<u64> {
        let mut buf = std::vec![0u8; READ_CHUNK_SIZE];
        let mut total = 0u64;
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => return Ok(total),
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            self.try_update(&buf[..n])
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            total += n as u64;
        }
    }

    /// Summarize all three widths
    ///
    /// Fails with [`StatsError::Empty`] for the narrowest width that received
    /// no fields, e.g. the 32-bit width when fewer than four bytes were read.
    pub fn finish(&self) -> Result<Report, StatsError> {
        Ok(Report {
            bytes: self.bytes.try_finish()?,
            words: self.words.try_finish()?,
            dwords: self.dwords.try_finish()?,
        })
    }
}

/// Summaries for all three widths of one stream
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Report {
    /// 8-bit summary
    pub bytes: Summary,
    /// 16-bit summary
    pub words: Summary,
    /// 32-bit summary
    pub dwords: Summary,
}

impl Report {
    /// Summary for one width
    pub fn get(&self, width: BitWidth) -> &Summary {
        match width {
            BitWidth::Byte => &self.bytes,
            BitWidth::Word => &self.words,
            BitWidth::DWord => &self.dwords,
        }
    }

    /// Summaries narrowest first
    pub fn iter(&self) -> impl Iterator<Item = &Summary> {
        [&self.bytes, &self.words, &self.dwords].into_iter()
    }
}

impl core::fmt::Display for Report {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, summary) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f)?;
            }
            write!(f, "{}", summary)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Report {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(3))?;
        for summary in self.iter() {
            seq.serialize_element(summary)?;
        }
        seq.end()
    }
}
