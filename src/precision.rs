use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The unit a [`Timestamp`](crate::Timestamp) value is counted in.
///
/// Variants are ordered coarse to fine, so `Seconds < Nanoseconds`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Precision {
    #[default]
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl Precision {
    /// All four precisions, coarse to fine.
    pub const ALL: [Precision; 4] = [
        Precision::Seconds,
        Precision::Milliseconds,
        Precision::Microseconds,
        Precision::Nanoseconds,
    ];

    /// Number of units of this precision in one second.
    pub const fn units_per_second(self) -> i64 {
        match self {
            Precision::Seconds => 1,
            Precision::Milliseconds => 1_000,
            Precision::Microseconds => 1_000_000,
            Precision::Nanoseconds => 1_000_000_000,
        }
    }

    /// Byte tag: 0 = s, 1 = ms, 2 = μs, 3 = ns.
    pub const fn tag(self) -> u8 {
        match self {
            Precision::Seconds => 0,
            Precision::Milliseconds => 1,
            Precision::Microseconds => 2,
            Precision::Nanoseconds => 3,
        }
    }

    /// Short unit name, as used by `Display`.
    pub const fn short_name(self) -> &'static str {
        match self {
            Precision::Seconds => "s",
            Precision::Milliseconds => "ms",
            Precision::Microseconds => "μs",
            Precision::Nanoseconds => "ns",
        }
    }

    /// Rescales `value` from one precision to another.
    ///
    /// Going coarser truncates toward zero, so 1_999 ms becomes 1 s and
    /// -1_999 ms becomes -1 s. Going finer multiplies exactly and wraps on
    /// 64-bit overflow.
    pub const fn convert(value: i64, from: Precision, to: Precision) -> i64 {
        let from_units = from.units_per_second();
        let to_units = to.units_per_second();
        if to_units >= from_units {
            value.wrapping_mul(to_units / from_units)
        } else {
            value / (from_units / to_units)
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Precision {
    type Err = Error;

    /// Parses the case-sensitive unit names: `s`/`seconds`, `ms`/`milliseconds`,
    /// `us`/`μs`/`microseconds`, `ns`/`nanoseconds`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" | "seconds" => Ok(Precision::Seconds),
            "ms" | "milliseconds" => Ok(Precision::Milliseconds),
            "us" | "μs" | "microseconds" => Ok(Precision::Microseconds),
            "ns" | "nanoseconds" => Ok(Precision::Nanoseconds),
            other => Err(Error::invalid_precision(other)),
        }
    }
}

impl TryFrom<&str> for Precision {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<u8> for Precision {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Precision::Seconds),
            1 => Ok(Precision::Milliseconds),
            2 => Ok(Precision::Microseconds),
            3 => Ok(Precision::Nanoseconds),
            other => Err(Error::invalid_precision(other.to_string())),
        }
    }
}

impl From<Precision> for u8 {
    fn from(precision: Precision) -> Self {
        precision.tag()
    }
}
