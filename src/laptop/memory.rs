//! Memory quantities and their normalization to a bit count.

use serde::{Deserialize, Serialize};

/// Unit of a memory quantity.
///
/// `Unknown` is what an unset or unrecognized wire value decodes to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemoryUnit {
    #[default]
    Unknown,
    Bit,
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
}

impl MemoryUnit {
    /// Left-shift that converts one of this unit into bits (1024-based).
    fn shift(self) -> Option<u32> {
        match self {
            MemoryUnit::Bit => Some(0),
            MemoryUnit::Byte => Some(3),
            MemoryUnit::Kilobyte => Some(13),
            MemoryUnit::Megabyte => Some(23),
            MemoryUnit::Gigabyte => Some(33),
            MemoryUnit::Terabyte => Some(43),
            MemoryUnit::Unknown => None,
        }
    }
}

/// A memory quantity such as `16 GIGABYTE`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Memory {
    pub value: u64,
    pub unit: MemoryUnit,
}

impl Memory {
    pub fn new(value: u64, unit: MemoryUnit) -> Self {
        Self { value, unit }
    }

    /// Canonical bit count of this quantity. See [`to_bits`].
    pub fn bits(&self) -> u64 {
        to_bits(self.value, self.unit)
    }
}

/// Normalize `value` expressed in `unit` to a number of bits.
///
/// Scaling is binary: one kilobyte is 1024 bytes. Bits shifted past the top
/// of the `u64` are dropped. An unknown unit normalizes to 0.
pub fn to_bits(value: u64, unit: MemoryUnit) -> u64 {
    match unit.shift() {
        Some(shift) => value << shift,
        None => 0,
    }
}
