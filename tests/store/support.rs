use laptop_catalog::{Cpu, Laptop, Memory, MemoryUnit};

/// A laptop with just the fields the store looks at.
pub fn laptop(id: &str, price: f64, cores: u32, min_ghz: f64, ram: Memory) -> Laptop {
    Laptop {
        id: id.to_string(),
        brand: "Dell".into(),
        name: "XPS".into(),
        cpu: Cpu {
            brand: "Intel".into(),
            name: "Core i7-9750H".into(),
            number_cores: cores,
            number_threads: cores * 2,
            min_ghz,
            max_ghz: min_ghz + 1.5,
        },
        ram,
        price_usd: price,
        ..Laptop::default()
    }
}

pub fn gb(value: u64) -> Memory {
    Memory::new(value, MemoryUnit::Gigabyte)
}
