// Common test utilities for ROM-based integration tests
//
// This module provides shared functionality for running and validating
// test ROMs across different test suites (CPU, PPU, APU, etc.)

#![allow(dead_code)]

use nes_rs::console::Console;
use std::fs;
use std::path::Path;

/// Maximum number of frames to run a test ROM before timing out
pub const MAX_TEST_FRAMES: u32 = 600; // ~10 seconds at 60 FPS

/// Maximum number of CPU cycles to run before timing out
pub const MAX_TEST_CYCLES: u64 = 100_000_000; // 100 million cycles

/// Result of running a test ROM
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Passed,
    Failed(u8),
    Timeout,
    Unknown,
}

/// Build a `Console` directly from an in-memory iNES image. Returns `Err`
/// with a message if the ROM can't be parsed or uses an unsupported mapper.
pub fn load_console(rom_path: &Path) -> Result<Console, String> {
    let rom_data = fs::read(rom_path)
        .map_err(|e| format!("Failed to load ROM from {}: {}", rom_path.display(), e))?;
    let cartridge = nes_rs::Cartridge::from_ines_bytes(&rom_data)
        .map_err(|e| format!("Failed to parse ROM {}: {}", rom_path.display(), e))?;
    Console::new(cartridge).map_err(|e| format!("Failed to build console: {}", e))
}

/// Run a "blargg-style" test ROM to completion: these write `$80` to $6000
/// while running, then a final status byte (0 = pass) and a null-terminated
/// ASCII message at $6004. Returns `(passed, message)`, or `Err` if the ROM
/// never signals completion within `max_cycles` CPU cycles.
///
/// Requires direct bus access to the $6000-family status region, which
/// `Console` doesn't expose; this drives the CPU/bus pair directly the same
/// way `Console::exec` does, so it can peek at those addresses between
/// instructions.
pub fn run_blargg_style_test(rom_path: &str, max_cycles: u64) -> Result<(bool, String), String> {
    use std::cell::RefCell;
    use std::rc::Rc;

    let path = Path::new(rom_path);
    if !path.exists() {
        return Err(format!("test ROM not found: {}", rom_path));
    }

    let rom_data = fs::read(path).map_err(|e| format!("failed to read {}: {}", rom_path, e))?;
    let cartridge = nes_rs::Cartridge::from_ines_bytes(&rom_data)
        .map_err(|e| format!("failed to parse {}: {}", rom_path, e))?;
    let mapper = nes_rs::cartridge::mappers::create_mapper(cartridge)
        .map_err(|e| format!("failed to build mapper for {}: {}", rom_path, e))?;
    let mut bus = nes_rs::Bus::new(Rc::new(RefCell::new(mapper)));
    let mut cpu = nes_rs::Cpu::new();
    cpu.reset(&mut bus);

    let mut cycles = 0u64;
    let mut saw_running = false;

    while cycles < max_cycles {
        cycles += cpu.step(&mut bus) as u64;
        if bus.nmi_pending() {
            cpu.nmi(&mut bus);
        }

        let status = bus.read(0x6000);
        if status == 0x80 {
            saw_running = true;
            continue;
        }

        if saw_running {
            let message = read_status_message(&mut bus);
            return Ok((status == 0x00, message));
        }
    }

    Err(format!(
        "timed out after {} cycles without seeing a result",
        cycles
    ))
}

fn read_status_message(bus: &mut nes_rs::Bus) -> String {
    let mut message = String::new();
    let mut addr = 0x6004u16;
    for _ in 0..256 {
        let byte = bus.read(addr);
        if byte == 0 {
            break;
        }
        if (0x20..=0x7E).contains(&byte) {
            message.push(byte as char);
        }
        addr = addr.wrapping_add(1);
    }
    message
}

pub fn format_result(result: &TestResult) -> String {
    match result {
        TestResult::Passed => "PASSED".to_string(),
        TestResult::Failed(code) => format!("FAILED (error code: ${:02X})", code),
        TestResult::Timeout => "TIMEOUT".to_string(),
        TestResult::Unknown => "UNKNOWN".to_string(),
    }
}
