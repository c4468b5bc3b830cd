//! Conversions between wire messages and domain types.

use chrono::{DateTime, Utc};

use super::messages::*;
use crate::filter::Filter;
use crate::laptop::{
    Cpu, Gpu, Keyboard, KeyboardLayout, Laptop, Memory, MemoryUnit, Panel, Resolution, Screen,
    Storage, StorageDriver, Weight,
};

impl MemoryUnit {
    pub fn from_wire(value: i32) -> Self {
        match value {
            1 => MemoryUnit::Bit,
            2 => MemoryUnit::Byte,
            3 => MemoryUnit::Kilobyte,
            4 => MemoryUnit::Megabyte,
            5 => MemoryUnit::Gigabyte,
            6 => MemoryUnit::Terabyte,
            _ => MemoryUnit::Unknown,
        }
    }

    pub fn to_wire(self) -> i32 {
        match self {
            MemoryUnit::Unknown => 0,
            MemoryUnit::Bit => 1,
            MemoryUnit::Byte => 2,
            MemoryUnit::Kilobyte => 3,
            MemoryUnit::Megabyte => 4,
            MemoryUnit::Gigabyte => 5,
            MemoryUnit::Terabyte => 6,
        }
    }
}

fn driver_from_wire(value: i32) -> StorageDriver {
    match value {
        1 => StorageDriver::Hdd,
        2 => StorageDriver::Ssd,
        _ => StorageDriver::Unknown,
    }
}

fn driver_to_wire(driver: StorageDriver) -> i32 {
    match driver {
        StorageDriver::Unknown => 0,
        StorageDriver::Hdd => 1,
        StorageDriver::Ssd => 2,
    }
}

fn panel_from_wire(value: i32) -> Panel {
    match value {
        1 => Panel::Ips,
        2 => Panel::Oled,
        _ => Panel::Unknown,
    }
}

fn panel_to_wire(panel: Panel) -> i32 {
    match panel {
        Panel::Unknown => 0,
        Panel::Ips => 1,
        Panel::Oled => 2,
    }
}

fn layout_from_wire(value: i32) -> KeyboardLayout {
    match value {
        1 => KeyboardLayout::Qwerty,
        2 => KeyboardLayout::Qwertz,
        3 => KeyboardLayout::Azerty,
        _ => KeyboardLayout::Unknown,
    }
}

fn layout_to_wire(layout: KeyboardLayout) -> i32 {
    match layout {
        KeyboardLayout::Unknown => 0,
        KeyboardLayout::Qwerty => 1,
        KeyboardLayout::Qwertz => 2,
        KeyboardLayout::Azerty => 3,
    }
}

impl From<MemoryMessage> for Memory {
    fn from(m: MemoryMessage) -> Self {
        Memory::new(m.value, MemoryUnit::from_wire(m.unit))
    }
}

impl From<Memory> for MemoryMessage {
    fn from(m: Memory) -> Self {
        MemoryMessage {
            value: m.value,
            unit: m.unit.to_wire(),
        }
    }
}

impl From<CpuMessage> for Cpu {
    fn from(m: CpuMessage) -> Self {
        Cpu {
            brand: m.brand,
            name: m.name,
            number_cores: m.number_cores,
            number_threads: m.number_threads,
            min_ghz: m.min_ghz,
            max_ghz: m.max_ghz,
        }
    }
}

impl From<Cpu> for CpuMessage {
    fn from(c: Cpu) -> Self {
        CpuMessage {
            brand: c.brand,
            name: c.name,
            number_cores: c.number_cores,
            number_threads: c.number_threads,
            min_ghz: c.min_ghz,
            max_ghz: c.max_ghz,
        }
    }
}

impl From<GpuMessage> for Gpu {
    fn from(m: GpuMessage) -> Self {
        Gpu {
            brand: m.brand,
            name: m.name,
            min_ghz: m.min_ghz,
            max_ghz: m.max_ghz,
            memory: m.memory.map(Memory::from).unwrap_or_default(),
        }
    }
}

impl From<Gpu> for GpuMessage {
    fn from(g: Gpu) -> Self {
        GpuMessage {
            brand: g.brand,
            name: g.name,
            min_ghz: g.min_ghz,
            max_ghz: g.max_ghz,
            memory: Some(g.memory.into()),
        }
    }
}

impl From<StorageMessage> for Storage {
    fn from(m: StorageMessage) -> Self {
        Storage {
            driver: driver_from_wire(m.driver),
            memory: m.memory.map(Memory::from).unwrap_or_default(),
        }
    }
}

impl From<Storage> for StorageMessage {
    fn from(s: Storage) -> Self {
        StorageMessage {
            driver: driver_to_wire(s.driver),
            memory: Some(s.memory.into()),
        }
    }
}

impl From<ScreenMessage> for Screen {
    fn from(m: ScreenMessage) -> Self {
        let resolution = m
            .resolution
            .map(|r| Resolution {
                width: r.width,
                height: r.height,
            })
            .unwrap_or_default();

        Screen {
            size_inch: m.size_inch,
            resolution,
            panel: panel_from_wire(m.panel),
            multitouch: m.multitouch,
        }
    }
}

impl From<Screen> for ScreenMessage {
    fn from(s: Screen) -> Self {
        ScreenMessage {
            size_inch: s.size_inch,
            resolution: Some(ResolutionMessage {
                width: s.resolution.width,
                height: s.resolution.height,
            }),
            panel: panel_to_wire(s.panel),
            multitouch: s.multitouch,
        }
    }
}

impl From<KeyboardMessage> for Keyboard {
    fn from(m: KeyboardMessage) -> Self {
        Keyboard {
            layout: layout_from_wire(m.layout),
            backlit: m.backlit,
        }
    }
}

impl From<Keyboard> for KeyboardMessage {
    fn from(k: Keyboard) -> Self {
        KeyboardMessage {
            layout: layout_to_wire(k.layout),
            backlit: k.backlit,
        }
    }
}

impl From<WeightMessage> for Weight {
    fn from(m: WeightMessage) -> Self {
        match m {
            WeightMessage::WeightKg(kg) => Weight::WeightKg(kg),
            WeightMessage::WeightLb(lb) => Weight::WeightLb(lb),
        }
    }
}

impl From<Weight> for WeightMessage {
    fn from(w: Weight) -> Self {
        match w {
            Weight::WeightKg(kg) => WeightMessage::WeightKg(kg),
            Weight::WeightLb(lb) => WeightMessage::WeightLb(lb),
        }
    }
}

fn timestamp_from_wire(m: TimestampMessage) -> Option<DateTime<Utc>> {
    let nanos = u32::try_from(m.nanos).ok()?;
    DateTime::from_timestamp(m.seconds, nanos)
}

fn timestamp_to_wire(t: DateTime<Utc>) -> TimestampMessage {
    TimestampMessage {
        seconds: t.timestamp(),
        nanos: t.timestamp_subsec_nanos() as i32,
    }
}

impl From<LaptopMessage> for Laptop {
    fn from(m: LaptopMessage) -> Self {
        Laptop {
            id: m.id,
            brand: m.brand,
            name: m.name,
            cpu: m.cpu.map(Cpu::from).unwrap_or_default(),
            ram: m.ram.map(Memory::from).unwrap_or_default(),
            gpus: m.gpus.into_iter().map(Gpu::from).collect(),
            storages: m.storages.into_iter().map(Storage::from).collect(),
            screen: m.screen.map(Screen::from).unwrap_or_default(),
            keyboard: m.keyboard.map(Keyboard::from).unwrap_or_default(),
            weight: m.weight.map(Weight::from),
            price_usd: m.price_usd,
            release_year: m.release_year,
            updated_at: m.updated_at.and_then(timestamp_from_wire),
        }
    }
}

impl From<Laptop> for LaptopMessage {
    fn from(l: Laptop) -> Self {
        LaptopMessage {
            id: l.id,
            brand: l.brand,
            name: l.name,
            cpu: Some(l.cpu.into()),
            ram: Some(l.ram.into()),
            gpus: l.gpus.into_iter().map(GpuMessage::from).collect(),
            storages: l.storages.into_iter().map(StorageMessage::from).collect(),
            screen: Some(l.screen.into()),
            keyboard: Some(l.keyboard.into()),
            weight: l.weight.map(WeightMessage::from),
            price_usd: l.price_usd,
            release_year: l.release_year,
            updated_at: l.updated_at.map(timestamp_to_wire),
        }
    }
}

impl From<FilterMessage> for Filter {
    fn from(m: FilterMessage) -> Self {
        Filter {
            max_price_usd: m.max_price_usd,
            min_cpu_cores: m.min_cpu_cores,
            min_cpu_ghz: m.min_cpu_ghz,
            min_ram: m.min_ram.map(Memory::from),
        }
    }
}

impl From<Filter> for FilterMessage {
    fn from(f: Filter) -> Self {
        FilterMessage {
            max_price_usd: f.max_price_usd,
            min_cpu_cores: f.min_cpu_cores,
            min_cpu_ghz: f.min_cpu_ghz,
            min_ram: f.min_ram.map(MemoryMessage::from),
        }
    }
}
