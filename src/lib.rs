// NES Emulator Library
// Core library for the NES emulator implementation

// Public modules
pub mod apu;
pub mod bus;
pub mod cartridge;
#[cfg(feature = "config")]
pub mod config;
pub mod console;
pub mod controller;
pub mod cpu;
pub mod ppu;
pub mod ram;

// Re-export main types for convenience
pub use apu::Apu;
pub use bus::{Bus, MemoryMappedDevice};
pub use cartridge::{Cartridge, Mapper, Mirroring, RomError};
#[cfg(feature = "config")]
pub use config::EmulatorConfig;
pub use console::Console;
pub use controller::{Button, Controller};
pub use cpu::Cpu;
pub use ppu::Ppu;
pub use ram::Ram;
