// NES Emulator - headless entry point
//
// Loads an iNES ROM and runs it, logging frame-boundary diagnostics. There
// is no host I/O here (no video/audio/input backend) by design; the binary
// exists to exercise the core, not to play games.

use std::env;
use std::process::ExitCode;

use log::{error, info};
use nes_rs::Console;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(rom_path) = args.get(1) else {
        eprintln!("usage: {} <rom.nes>", args[0]);
        return ExitCode::FAILURE;
    };

    #[cfg(feature = "config")]
    let _config = nes_rs::EmulatorConfig::load_or_default();

    let mut console = match Console::from_ines_file(rom_path) {
        Ok(console) => console,
        Err(err) => {
            error!("failed to load '{}': {}", rom_path, err);
            return ExitCode::FAILURE;
        }
    };

    info!("running '{}'", rom_path);

    loop {
        console.exec_frame();
        if console.frame_count() % 60 == 0 {
            info!("frame {}", console.frame_count());
        }
    }
}
