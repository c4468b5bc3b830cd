//! Filter - the search predicate over laptops.

use serde::{Deserialize, Serialize};

use crate::laptop::{Laptop, Memory};

/// Search predicate. Every unset bound is non-restrictive.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    pub max_price_usd: Option<f64>,
    pub min_cpu_cores: u32,
    pub min_cpu_ghz: f64,
    pub min_ram: Option<Memory>,
}

impl Filter {
    /// A filter that matches every laptop.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn max_price_usd(mut self, price: f64) -> Self {
        self.max_price_usd = Some(price);
        self
    }

    pub fn min_cpu_cores(mut self, cores: u32) -> Self {
        self.min_cpu_cores = cores;
        self
    }

    pub fn min_cpu_ghz(mut self, ghz: f64) -> Self {
        self.min_cpu_ghz = ghz;
        self
    }

    pub fn min_ram(mut self, ram: Memory) -> Self {
        self.min_ram = Some(ram);
        self
    }

    /// Whether `laptop` satisfies every bound of this filter.
    ///
    /// Bounds are checked in order (price, cores, clock, ram) and the first
    /// failing one rejects.
    pub fn qualifies(&self, laptop: &Laptop) -> bool {
        if let Some(max_price) = self.max_price_usd {
            if laptop.price_usd > max_price {
                return false;
            }
        }

        if laptop.cpu.number_cores < self.min_cpu_cores {
            return false;
        }

        if laptop.cpu.min_ghz < self.min_cpu_ghz {
            return false;
        }

        if let Some(min_ram) = &self.min_ram {
            if laptop.ram.bits() < min_ram.bits() {
                return false;
            }
        }

        true
    }
}
