//! Field widths supported by the accumulators

/// Width of the unsigned fields an accumulator consumes
///
/// Only the three widths a byte stream is sliced into are supported: single
/// bytes, big-endian 16-bit words and big-endian 32-bit double-words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BitWidth {
    /// 8-bit fields
    Byte,
    /// 16-bit fields
    Word,
    /// 32-bit fields
    DWord,
}

impl BitWidth {
    /// All widths, narrowest first
    pub const ALL: [BitWidth; 3] = [BitWidth::Byte, BitWidth::Word, BitWidth::DWord];

    /// Look up a width by its size in bits
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(BitWidth::Byte),
            16 => Some(BitWidth::Word),
            32 => Some(BitWidth::DWord),
            _ => None,
        }
    }

    /// Field size in bits
    pub const fn bits(self) -> u32 {
        match self {
            BitWidth::Byte => 8,
            BitWidth::Word => 16,
            BitWidth::DWord => 32,
        }
    }

    /// Mask every valid field satisfies (`2^bits - 1`)
    pub const fn mask(self) -> u32 {
        match self {
            BitWidth::Byte => 0xFF,
            BitWidth::Word => 0xFFFF,
            BitWidth::DWord => 0xFFFF_FFFF,
        }
    }

    /// Largest field value, same as [`mask`](Self::mask)
    pub const fn max_value(self) -> u32 {
        self.mask()
    }

    /// Number of distinct field values (`2^bits`)
    pub const fn range_size(self) -> u64 {
        1u64 << self.bits()
    }

    /// Number of stream bytes packed into one field
    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }

    /// Human-readable name used in reports
    pub const fn label(self) -> &'static str {
        match self {
            BitWidth::Byte => "Byte",
            BitWidth::Word => "Short",
            BitWidth::DWord => "DWord",
        }
    }

    /// Check whether `field` fits in this width
    #[inline]
    pub const fn contains(self, field: u32) -> bool {
        field & self.mask() == field
    }
}

impl core::fmt::Display for BitWidth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BitWidth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_constants() {
        assert_eq!(BitWidth::Byte.mask(), 255);
        assert_eq!(BitWidth::Byte.range_size(), 256);
        assert_eq!(BitWidth::Word.mask(), 65_535);
        assert_eq!(BitWidth::Word.range_size(), 65_536);
        assert_eq!(BitWidth::DWord.mask(), u32::MAX);
        assert_eq!(BitWidth::DWord.range_size(), 1u64 << 32);

        for width in BitWidth::ALL {
            assert_eq!(u64::from(width.mask()) + 1, width.range_size());
            assert_eq!(width.bytes() * 8, width.bits() as usize);
        }
    }

    #[test]
    fn test_from_bits() {
        assert_eq!(BitWidth::from_bits(8), Some(BitWidth::Byte));
        assert_eq!(BitWidth::from_bits(16), Some(BitWidth::Word));
        assert_eq!(BitWidth::from_bits(32), Some(BitWidth::DWord));
        assert_eq!(BitWidth::from_bits(12), None);
        assert_eq!(BitWidth::from_bits(64), None);
    }

    #[test]
    fn test_contains() {
        assert!(BitWidth::Byte.contains(0));
        assert!(BitWidth::Byte.contains(255));
        assert!(!BitWidth::Byte.contains(256));
        assert!(BitWidth::Word.contains(65_535));
        assert!(!BitWidth::Word.contains(65_536));
        assert!(BitWidth::DWord.contains(u32::MAX));
    }
}
