//! # Component Catalog
//!
//! The catalog is the read-only pool of parts the search draws from: one
//! ordered sequence per category. It is built once, shared by reference for
//! the whole run and never mutated. Parts are stored behind `Arc` so builds
//! can hold cheap handles to them.
//!
//! ## Example
//!
//! ```rust
//! use pcgen::catalog::{Catalog, Cpu, Gpu, MemoryType, Motherboard, Psu, Ram, Storage, StorageKind};
//!
//! let catalog = Catalog::new(
//!     vec![Cpu::new("Intel", "i5-12400", 55, 3_300.0, 65)],
//!     vec![Gpu::new("NVIDIA", "RTX 3060", 6_500.0, 170, 55)],
//!     vec![Ram::new("Corsair", "Vengeance LPX", 16, 3200, MemoryType::Ddr4, 850.0)],
//!     vec![Storage::new("Crucial", "P3", StorageKind::Ssd, 1000, 1_300.0)],
//!     vec![Motherboard::new("MSI", "PRO B660M-A", 2_900.0, 35, 128, 3600, MemoryType::Ddr4, ["i5-12400"])],
//!     vec![Psu::new("Corsair", "CX550M", 550, 1_300.0)],
//! )
//! .unwrap();
//!
//! assert_eq!(catalog.cpus().len(), 1);
//! ```

mod builtin;
mod parts;

use std::sync::Arc;

use crate::error::{GeneticError, Result};

pub use parts::{Cpu, Gpu, MemoryType, Motherboard, PartKind, Psu, Ram, Storage, StorageKind};

/// Six ordered, non-empty sequences of candidate parts.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Catalog {
    cpus: Vec<Arc<Cpu>>,
    gpus: Vec<Arc<Gpu>>,
    rams: Vec<Arc<Ram>>,
    storages: Vec<Arc<Storage>>,
    motherboards: Vec<Arc<Motherboard>>,
    psus: Vec<Arc<Psu>>,
}

impl Catalog {
    /// Creates a catalog, rejecting any empty category.
    pub fn new(
        cpus: Vec<Cpu>,
        gpus: Vec<Gpu>,
        rams: Vec<Ram>,
        storages: Vec<Storage>,
        motherboards: Vec<Motherboard>,
        psus: Vec<Psu>,
    ) -> Result<Self> {
        let catalog = Self {
            cpus: cpus.into_iter().map(Arc::new).collect(),
            gpus: gpus.into_iter().map(Arc::new).collect(),
            rams: rams.into_iter().map(Arc::new).collect(),
            storages: storages.into_iter().map(Arc::new).collect(),
            motherboards: motherboards.into_iter().map(Arc::new).collect(),
            psus: psus.into_iter().map(Arc::new).collect(),
        };
        catalog.ensure_non_empty()?;
        Ok(catalog)
    }

    /// The sample catalog shipped with the crate.
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    /// Loads a catalog from a JSON document.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.ensure_non_empty()?;
        Ok(catalog)
    }

    /// Loads a catalog from a JSON file.
    #[cfg(feature = "serde")]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        use crate::error::ResultExt;

        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .context(format!("Failed to read catalog {}", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Serializes the catalog as pretty-printed JSON.
    #[cfg(feature = "serde")]
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn ensure_non_empty(&self) -> Result<()> {
        let sizes = [
            (PartKind::Cpu, self.cpus.len()),
            (PartKind::Gpu, self.gpus.len()),
            (PartKind::Ram, self.rams.len()),
            (PartKind::Storage, self.storages.len()),
            (PartKind::Motherboard, self.motherboards.len()),
            (PartKind::Psu, self.psus.len()),
        ];
        match sizes.iter().find(|(_, len)| *len == 0) {
            Some((kind, _)) => Err(GeneticError::EmptyCatalog(*kind)),
            None => Ok(()),
        }
    }

    pub fn cpus(&self) -> &[Arc<Cpu>] {
        &self.cpus
    }

    pub fn gpus(&self) -> &[Arc<Gpu>] {
        &self.gpus
    }

    pub fn rams(&self) -> &[Arc<Ram>] {
        &self.rams
    }

    pub fn storages(&self) -> &[Arc<Storage>] {
        &self.storages
    }

    pub fn motherboards(&self) -> &[Arc<Motherboard>] {
        &self.motherboards
    }

    pub fn psus(&self) -> &[Arc<Psu>] {
        &self.psus
    }
}
