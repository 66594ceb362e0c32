use std::collections::BTreeSet;
use std::fmt;

/// The six component categories of a build.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    Cpu,
    Gpu,
    Ram,
    Storage,
    Motherboard,
    Psu,
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartKind::Cpu => "CPU",
            PartKind::Gpu => "GPU",
            PartKind::Ram => "RAM",
            PartKind::Storage => "storage",
            PartKind::Motherboard => "motherboard",
            PartKind::Psu => "PSU",
        };
        f.write_str(name)
    }
}

/// Memory generation of a RAM module or motherboard slot.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryType {
    Ddr3,
    Ddr4,
    Ddr5,
}

impl fmt::Display for MemoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryType::Ddr3 => f.write_str("DDR3"),
            MemoryType::Ddr4 => f.write_str("DDR4"),
            MemoryType::Ddr5 => f.write_str("DDR5"),
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    Ssd,
    Hdd,
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::Ssd => f.write_str("SSD"),
            StorageKind::Hdd => f.write_str("HDD"),
        }
    }
}

/// A processor.
///
/// `performance` is a relative benchmark score. `integrated_graphics` holds
/// the power rating of the on-die GPU, or `None` when the CPU has none.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Cpu {
    pub maker: String,
    pub model: String,
    pub performance: u32,
    pub price: f64,
    pub power_consumption: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub integrated_graphics: Option<u32>,
}

impl Cpu {
    pub fn new(
        maker: impl Into<String>,
        model: impl Into<String>,
        performance: u32,
        price: f64,
        power_consumption: u32,
    ) -> Self {
        Self {
            maker: maker.into(),
            model: model.into(),
            performance,
            price,
            power_consumption,
            integrated_graphics: None,
        }
    }

    pub fn with_integrated_graphics(mut self, power: u32) -> Self {
        self.integrated_graphics = Some(power);
        self
    }

    pub fn has_integrated_graphics(&self) -> bool {
        self.integrated_graphics.is_some()
    }
}

impl fmt::Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU: {} {}, performance: {}, Price: ${:.2}",
            self.maker, self.model, self.performance, self.price
        )
    }
}

/// A discrete graphics card. `power` is its relative performance rating.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Gpu {
    pub maker: String,
    pub model: String,
    pub price: f64,
    pub power_consumption: u32,
    pub power: u32,
}

impl Gpu {
    pub fn new(
        maker: impl Into<String>,
        model: impl Into<String>,
        price: f64,
        power_consumption: u32,
        power: u32,
    ) -> Self {
        Self {
            maker: maker.into(),
            model: model.into(),
            price,
            power_consumption,
            power,
        }
    }
}

impl fmt::Display for Gpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GPU: {} {}, power: {}, Price: ${:.2}",
            self.maker, self.model, self.power, self.price
        )
    }
}

/// A memory kit. Capacity in GB, frequency in MHz.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Ram {
    pub maker: String,
    pub model: String,
    pub capacity: u32,
    pub frequency: u32,
    pub memory_type: MemoryType,
    pub price: f64,
}

impl Ram {
    pub fn new(
        maker: impl Into<String>,
        model: impl Into<String>,
        capacity: u32,
        frequency: u32,
        memory_type: MemoryType,
        price: f64,
    ) -> Self {
        Self {
            maker: maker.into(),
            model: model.into(),
            capacity,
            frequency,
            memory_type,
            price,
        }
    }
}

impl fmt::Display for Ram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RAM: {} {}, Capacity: {}GB, Frequency: {}MHz, Type: {}, Price: ${:.2}",
            self.maker, self.model, self.capacity, self.frequency, self.memory_type, self.price
        )
    }
}

/// A storage drive. Capacity in GB.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Storage {
    pub maker: String,
    pub model: String,
    pub kind: StorageKind,
    pub capacity: u32,
    pub price: f64,
}

impl Storage {
    pub fn new(
        maker: impl Into<String>,
        model: impl Into<String>,
        kind: StorageKind,
        capacity: u32,
        price: f64,
    ) -> Self {
        Self {
            maker: maker.into(),
            model: model.into(),
            kind,
            capacity,
            price,
        }
    }

    pub fn is_ssd(&self) -> bool {
        self.kind == StorageKind::Ssd
    }
}

impl fmt::Display for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Storage: {} {} {} {}GB, Price: ${:.2}",
            self.maker, self.model, self.kind, self.capacity, self.price
        )
    }
}

/// A motherboard and the limits it places on the CPU and memory.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Motherboard {
    pub maker: String,
    pub model: String,
    pub price: f64,
    pub power_consumption: u32,
    pub max_ram_capacity: u32,
    pub max_ram_frequency: u32,
    pub ram_type: MemoryType,
    /// Model identifiers of the CPUs this board accepts.
    pub compatible_cpus: BTreeSet<String>,
}

impl Motherboard {
    #[allow(clippy::too_many_arguments)]
    pub fn new<I, S>(
        maker: impl Into<String>,
        model: impl Into<String>,
        price: f64,
        power_consumption: u32,
        max_ram_capacity: u32,
        max_ram_frequency: u32,
        ram_type: MemoryType,
        compatible_cpus: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            maker: maker.into(),
            model: model.into(),
            price,
            power_consumption,
            max_ram_capacity,
            max_ram_frequency,
            ram_type,
            compatible_cpus: compatible_cpus.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the board lists `cpu` by exact model identifier.
    ///
    /// A CPU whose identifier is blank cannot be resolved and is reported as
    /// incompatible.
    pub fn is_cpu_compatible(&self, cpu: &Cpu) -> bool {
        !cpu.model.trim().is_empty() && self.compatible_cpus.contains(&cpu.model)
    }

    pub fn is_ram_compatible(&self, ram: &Ram) -> bool {
        ram.memory_type == self.ram_type
            && ram.frequency <= self.max_ram_frequency
            && ram.capacity <= self.max_ram_capacity
    }
}

impl fmt::Display for Motherboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Motherboard: {} {}, {} up to {}GB @ {}MHz, Price: ${:.2}",
            self.maker,
            self.model,
            self.ram_type,
            self.max_ram_capacity,
            self.max_ram_frequency,
            self.price
        )
    }
}

/// A power supply. Capacity in watts.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Psu {
    pub maker: String,
    pub model: String,
    pub capacity: u32,
    pub price: f64,
}

impl Psu {
    pub fn new(maker: impl Into<String>, model: impl Into<String>, capacity: u32, price: f64) -> Self {
        Self {
            maker: maker.into(),
            model: model.into(),
            capacity,
            price,
        }
    }
}

impl fmt::Display for Psu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PSU: {} {}, capacity: {}W, Price: ${:.2}",
            self.maker, self.model, self.capacity, self.price
        )
    }
}
