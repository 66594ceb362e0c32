use std::sync::Arc;

use super::{Catalog, Cpu, Gpu, MemoryType, Motherboard, Psu, Ram, Storage, StorageKind};

pub(super) fn catalog() -> Catalog {
    Catalog {
        cpus: cpus().into_iter().map(Arc::new).collect(),
        gpus: gpus().into_iter().map(Arc::new).collect(),
        rams: rams().into_iter().map(Arc::new).collect(),
        storages: storages().into_iter().map(Arc::new).collect(),
        motherboards: motherboards().into_iter().map(Arc::new).collect(),
        psus: psus().into_iter().map(Arc::new).collect(),
    }
}

fn cpus() -> Vec<Cpu> {
    vec![
        Cpu::new("AMD", "Athlon 3000G", 12, 900.0, 35).with_integrated_graphics(8),
        Cpu::new("AMD", "Ryzen 3 3200G", 25, 1_500.0, 65).with_integrated_graphics(12),
        Cpu::new("Intel", "i3-12100", 35, 2_100.0, 60).with_integrated_graphics(15),
        Cpu::new("AMD", "Ryzen 5 5600G", 50, 2_700.0, 65).with_integrated_graphics(25),
        Cpu::new("Intel", "i5-12400", 55, 3_300.0, 65).with_integrated_graphics(18),
        Cpu::new("AMD", "Ryzen 7 5800X", 72, 4_500.0, 105),
        Cpu::new("Intel", "i7-12700K", 78, 6_900.0, 125).with_integrated_graphics(20),
        Cpu::new("AMD", "Ryzen 9 7950X", 98, 10_500.0, 170).with_integrated_graphics(10),
        Cpu::new("Intel", "i9-13900K", 95, 11_500.0, 125).with_integrated_graphics(22),
    ]
}

fn gpus() -> Vec<Gpu> {
    vec![
        Gpu::new("NVIDIA", "GT 1030", 1_800.0, 30, 15),
        Gpu::new("NVIDIA", "GTX 1650", 3_200.0, 75, 28),
        Gpu::new("AMD", "RX 6600", 5_200.0, 132, 48),
        Gpu::new("NVIDIA", "RTX 3060", 6_500.0, 170, 55),
        Gpu::new("NVIDIA", "RTX 4070", 12_500.0, 200, 75),
        Gpu::new("AMD", "RX 7900 XT", 16_500.0, 300, 85),
        Gpu::new("NVIDIA", "RTX 4090", 35_000.0, 450, 100),
    ]
}

fn rams() -> Vec<Ram> {
    vec![
        Ram::new("Kingston", "Fury Beast", 8, 3200, MemoryType::Ddr4, 450.0),
        Ram::new("Corsair", "Vengeance LPX", 16, 3200, MemoryType::Ddr4, 850.0),
        Ram::new("G.Skill", "Ripjaws V", 32, 3600, MemoryType::Ddr4, 1_600.0),
        Ram::new("Crucial", "Classic", 16, 4800, MemoryType::Ddr5, 1_000.0),
        Ram::new("Corsair", "Vengeance", 32, 5600, MemoryType::Ddr5, 2_300.0),
        Ram::new("Kingston", "Fury Beast", 64, 5200, MemoryType::Ddr5, 4_200.0),
    ]
}

fn storages() -> Vec<Storage> {
    vec![
        Storage::new("Kingston", "A400", StorageKind::Ssd, 240, 450.0),
        Storage::new("Crucial", "MX500", StorageKind::Ssd, 480, 700.0),
        Storage::new("WD", "Blue", StorageKind::Hdd, 1000, 900.0),
        Storage::new("Crucial", "P3", StorageKind::Ssd, 1000, 1_300.0),
        Storage::new("Seagate", "Barracuda", StorageKind::Hdd, 2000, 1_100.0),
        Storage::new("Samsung", "970 EVO Plus", StorageKind::Ssd, 2000, 2_900.0),
    ]
}

fn motherboards() -> Vec<Motherboard> {
    vec![
        Motherboard::new(
            "ASUS",
            "PRIME H610M-E",
            1_800.0,
            30,
            64,
            3200,
            MemoryType::Ddr4,
            ["i3-12100", "i5-12400"],
        ),
        Motherboard::new(
            "MSI",
            "PRO B660M-A",
            2_900.0,
            35,
            128,
            3600,
            MemoryType::Ddr4,
            ["i3-12100", "i5-12400", "i7-12700K"],
        ),
        Motherboard::new(
            "Gigabyte",
            "Z790 AORUS ELITE",
            5_200.0,
            45,
            128,
            6000,
            MemoryType::Ddr5,
            ["i5-12400", "i7-12700K", "i9-13900K"],
        ),
        Motherboard::new(
            "ASRock",
            "B450M Steel Legend",
            1_900.0,
            30,
            64,
            3200,
            MemoryType::Ddr4,
            ["Athlon 3000G", "Ryzen 3 3200G", "Ryzen 5 5600G", "Ryzen 7 5800X"],
        ),
        Motherboard::new(
            "MSI",
            "MAG B650 TOMAHAWK",
            4_300.0,
            40,
            128,
            6000,
            MemoryType::Ddr5,
            ["Ryzen 9 7950X"],
        ),
    ]
}

fn psus() -> Vec<Psu> {
    vec![
        Psu::new("EVGA", "400 N1", 400, 800.0),
        Psu::new("Corsair", "CV450", 450, 1_000.0),
        Psu::new("Corsair", "CX550M", 550, 1_300.0),
        Psu::new("EVGA", "600 BR", 600, 1_400.0),
        Psu::new("Seasonic", "Focus GX-650", 650, 2_000.0),
        Psu::new("Corsair", "RM750x", 750, 2_400.0),
        Psu::new("Seasonic", "Focus GX-850", 850, 2_900.0),
        Psu::new("Corsair", "HX1000", 1000, 4_200.0),
    ]
}
