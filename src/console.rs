// Console module - top-level emulator session
//
// `Console` wires a parsed `Cartridge` into a `Mapper`, owns the `Bus` and
// `Cpu`, and drives the simulation loop by stepping the CPU one instruction
// at a time. Each `Bus::read`/`write` the CPU performs while stepping drives
// the PPU three dots and the APU one clock itself, and the CPU services any
// latched NMI/IRQ inline, so `Console::exec` only has to drain the
// frame-ready flag the bus accumulates. Grounded on `core/console.h`, which
// performs the same wiring (cartridge, shared bus, CPU, PPU, APU,
// controllers) around a single owning object.

use std::cell::RefCell;
use std::rc::Rc;

use log::trace;

use crate::bus::Bus;
use crate::cartridge::mappers::create_mapper;
use crate::cartridge::{Cartridge, RomError};
use crate::controller::Button;
use crate::cpu::Cpu;

/// An assembled, runnable NES session.
pub struct Console {
    bus: Bus,
    cpu: Cpu,
}

impl Console {
    /// Build a console from an already-parsed cartridge.
    pub fn new(cartridge: Cartridge) -> Result<Self, RomError> {
        let mapper = create_mapper(cartridge)?;
        let mut bus = Bus::new(Rc::new(RefCell::new(mapper)));
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);
        Ok(Console { bus, cpu })
    }

    /// Parse an iNES file and build a console from it.
    pub fn from_ines_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, RomError> {
        Self::new(Cartridge::from_ines_file(path)?)
    }

    /// Run one CPU instruction and advance the PPU/APU alongside it.
    /// Returns true if a new video frame became available.
    ///
    /// `Cpu::step` itself drives every PPU/APU tick, one per bus access, and
    /// services any latched NMI/IRQ before or after the instruction as
    /// appropriate; `Console` only drains the frame-ready flag `Bus`
    /// accumulates along the way.
    pub fn exec(&mut self) -> bool {
        self.cpu.step(&mut self.bus);
        let frame_ready = self.bus.take_frame_ready();

        if frame_ready {
            trace!("frame {} ready", self.frame_count());
        }

        frame_ready
    }

    /// Run CPU instructions until a full video frame has been produced.
    pub fn exec_frame(&mut self) {
        while !self.exec() {}
    }

    /// The most recently completed video frame: one NES palette index
    /// (0x00-0x3F) per pixel, 256x240 pixels.
    pub fn framebuf(&self) -> &[u8] {
        self.bus.ppu().frame()
    }

    /// Every audio sample mixed since the last call.
    pub fn audiobuf(&mut self) -> Vec<f32> {
        self.bus.apu_mut().drain_samples()
    }

    pub fn frame_count(&self) -> u64 {
        self.bus.ppu().frame_count()
    }

    pub fn set_port_one(&mut self, button: Button, pressed: bool) {
        self.bus.controller(0).set_button(button, pressed);
    }

    pub fn set_port_two(&mut self, button: Button, pressed: bool) {
        self.bus.controller(1).set_button(button, pressed);
    }

    pub fn reset_controllers(&mut self) {
        self.bus.controller(0).reset();
        self.bus.controller(1).reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_console() -> Console {
        let mut cartridge = Cartridge::new();
        cartridge.prg_rom = vec![0xEA; 32 * 1024]; // fill with NOP
        Console::new(cartridge).unwrap()
    }

    #[test]
    fn test_console_runs_nop_stream() {
        let mut console = test_console();
        for _ in 0..100 {
            console.exec();
        }
    }

    #[test]
    fn test_framebuf_has_expected_size() {
        let console = test_console();
        assert_eq!(console.framebuf().len(), 256 * 240);
    }

    #[test]
    fn test_button_routes_to_controller() {
        let mut console = test_console();
        console.set_port_one(Button::Start, true);
    }
}
