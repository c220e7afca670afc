//! Finished statistics for one field width

use crate::math;
use crate::width::BitWidth;

/// Statistics derived from a finished accumulator
///
/// Besides the observed values, a summary knows what each statistic would be
/// expected to look like for uniformly random input of the same length, which
/// is what the report compares against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    /// Width of the summarized fields
    pub width: BitWidth,
    /// Number of fields ingested
    pub count: u64,
    /// Number of distinct field values
    pub unique: u64,
    /// Arithmetic mean of the field values
    pub average: f64,
    /// Shannon entropy in bits
    pub entropy: f64,
}

impl Summary {
    /// Field size in bits
    pub fn bits(&self) -> u32 {
        self.width.bits()
    }

    /// Mask every field satisfies
    pub fn mask(&self) -> u32 {
        self.width.mask()
    }

    /// Number of possible field values
    pub fn range_size(&self) -> u64 {
        self.width.range_size()
    }

    /// Distinct values as a percentage of the value space
    pub fn unique_percent(&self) -> f64 {
        self.unique as f64 / self.range_size() as f64 * 100.0
    }

    /// Expected number of distinct values among `count` uniform random draws
    ///
    /// `R · (1 - (1 - 1/R)^n)` for a value space of size `R`, evaluated in log
    /// space so it stays accurate for the 32-bit range.
    pub fn expected_unique(&self) -> f64 {
        let range = self.range_size() as f64;
        let n = self.count as f64;
        -range * math::exp_m1(n * math::ln_1p(-1.0 / range))
    }

    /// [`expected_unique`](Self::expected_unique) as a percentage of the value space
    pub fn expected_unique_percent(&self) -> f64 {
        self.expected_unique() / self.range_size() as f64 * 100.0
    }

    /// Average as a percentage of the largest field value
    pub fn average_percent(&self) -> f64 {
        self.average / f64::from(self.width.max_value()) * 100.0
    }

    /// Mean of uniformly random fields, half the largest field value
    pub fn expected_average(&self) -> f64 {
        f64::from(self.width.max_value()) / 2.0
    }

    /// Entropy as a percentage of the field size
    pub fn entropy_percent(&self) -> f64 {
        self.entropy / f64::from(self.bits()) * 100.0
    }

    /// Entropy of a uniform distribution over the value space
    pub fn expected_entropy(&self) -> f64 {
        f64::from(self.bits())
    }
}

/// Right-align `label stat` in a 15-column field followed by `: `
fn write_label(f: &mut core::fmt::Formatter<'_>, label: &str, stat: &str) -> core::fmt::Result {
    let width = 14usize.saturating_sub(stat.len());
    write!(f, "{:>width$} {}: ", label, stat, width = width)
}

impl core::fmt::Display for Summary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = self.width.label();

        write_label(f, label, "Count")?;
        writeln!(f, "{:>15}", self.count)?;

        write_label(f, label, "Unique")?;
        writeln!(
            f,
            "{:>15}, {:.1}% (random: {:>15.1}, {:.1}%)",
            self.unique,
            self.unique_percent(),
            self.expected_unique(),
            self.expected_unique_percent()
        )?;

        write_label(f, label, "Average")?;
        writeln!(
            f,
            "{:>15.3}, {:.1}% (random: {:>15.1}, 50%)",
            self.average,
            self.average_percent(),
            self.expected_average()
        )?;

        write_label(f, label, "Entropy")?;
        write!(
            f,
            "{:>15.3}, {:.1}% (random: {:>15.1}, 100%)",
            self.entropy,
            self.entropy_percent(),
            self.expected_entropy()
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Summary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Summary", 5)?;
        state.serialize_field("bits", &self.width)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("unique", &self.unique)?;
        state.serialize_field("average", &self.average)?;
        state.serialize_field("entropy", &self.entropy)?;
        state.end()
    }
}
