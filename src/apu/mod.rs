// APU module - Audio Processing Unit (Ricoh 2A03)
//
// Orchestrates the four sound channels (two pulse, triangle, noise) plus the
// DMC's register interface, driven by a shared frame sequencer. Grounded on
// `core/apu.h`: the frame sequencer dispatches quarter/half-frame events to
// each channel's envelope, sweep, length and linear counters, and the final
// sample is produced by the same non-linear mixer lookup the reference core
// builds (`lookup_pulse_out`, `lookup_tnd_out`).
//
// ## Register map
//
// | Address       | Channel  | Description                      |
// |---------------|----------|----------------------------------|
// | $4000-$4003   | Pulse 1  | duty/envelope, sweep, timer, len  |
// | $4004-$4007   | Pulse 2  | duty/envelope, sweep, timer, len  |
// | $4008-$400B   | Triangle | linear counter, timer, len        |
// | $400C-$400F   | Noise    | envelope, mode/period, len        |
// | $4010-$4013   | DMC      | flags/rate, direct load, sample   |
// | $4015         | Status   | channel enable (W), status (R)    |
// | $4017         | Frame    | sequencer mode / IRQ inhibit (W)  |
//
// DMC sample playback is not wired to the CPU bus: the channel accepts its
// register writes and reports an active/inactive status on $4015 like real
// hardware, but `needs_sample_read`/`load_sample_byte` are never invoked, so
// it never performs the DMA-driven sample fetch that produces audible DMC
// output. Real sample synthesis is explicitly out of scope.

pub mod channels;
pub mod components;
pub mod constants;

use channels::{DmcChannel, NoiseChannel, PulseChannel, TriangleChannel};
use components::{FrameCounter, FrameEvent};

/// Samples per buffer: one CPU-cycle-rate sample per `clock()` call, sized to
/// hold one NTSC video frame's worth of audio (1,789,773 Hz / 60.0988 Hz).
pub const AUDIO_BUFFER_CAPACITY: usize = 29785;

/// The Audio Processing Unit: four channels, a shared frame sequencer, and a
/// double-buffered mixed-sample output consumed once per frame by `Console`.
#[derive(Debug, Clone)]
pub struct Apu {
    pulse1: PulseChannel,
    pulse2: PulseChannel,
    triangle: TriangleChannel,
    noise: NoiseChannel,
    dmc: DmcChannel,
    frame_counter: FrameCounter,
    /// Alternates every CPU cycle; pulse/noise/DMC timers only advance on the
    /// APU's own clock, which ticks at half the CPU rate.
    half_cycle: bool,
    /// Samples accumulated since the buffer was last swapped.
    back_buffer: Box<[f32; AUDIO_BUFFER_CAPACITY]>,
    back_len: usize,
    /// Samples ready to be drained by `Console`, filled by the last swap.
    front_buffer: Box<[f32; AUDIO_BUFFER_CAPACITY]>,
    front_len: usize,
}

impl Default for Apu {
    fn default() -> Self {
        Self::new()
    }
}

impl Apu {
    pub fn new() -> Self {
        Apu {
            pulse1: PulseChannel::new(1),
            pulse2: PulseChannel::new(2),
            triangle: TriangleChannel::new(),
            noise: NoiseChannel::new(),
            dmc: DmcChannel::new(),
            frame_counter: FrameCounter::new(),
            half_cycle: false,
            back_buffer: Box::new([0.0; AUDIO_BUFFER_CAPACITY]),
            back_len: 0,
            front_buffer: Box::new([0.0; AUDIO_BUFFER_CAPACITY]),
            front_len: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance the APU by one CPU cycle: clock the frame sequencer, the
    /// channel timers (triangle every cycle, the rest every other cycle) and
    /// push one mixed sample.
    pub fn clock(&mut self) {
        self.triangle.clock_timer();

        self.half_cycle = !self.half_cycle;
        if self.half_cycle {
            self.pulse1.clock_timer();
            self.pulse2.clock_timer();
            self.noise.clock_timer();
            self.dmc.clock_timer();
        }

        for event in self.frame_counter.clock() {
            self.dispatch_frame_event(event);
        }

        let sample = self.mix();
        self.back_buffer[self.back_len] = sample;
        self.back_len += 1;
        if self.back_len == AUDIO_BUFFER_CAPACITY {
            self.push_frame();
        }
    }

    /// Atomically swap the filled back buffer into the front buffer, the way
    /// the PPU swaps its completed framebuffer at the frame boundary. Any
    /// samples still sitting in the previous front buffer that `Console`
    /// never drained are discarded.
    fn push_frame(&mut self) {
        std::mem::swap(&mut self.front_buffer, &mut self.back_buffer);
        self.front_len = self.back_len;
        self.back_len = 0;
    }

    fn dispatch_frame_event(&mut self, event: FrameEvent) {
        match event {
            FrameEvent::QuarterFrame => {
                self.pulse1.clock_envelope();
                self.pulse2.clock_envelope();
                self.noise.clock_envelope();
                self.triangle.clock_linear_counter();
            }
            FrameEvent::HalfFrame => {
                self.pulse1.clock_envelope();
                self.pulse2.clock_envelope();
                self.noise.clock_envelope();
                self.triangle.clock_linear_counter();
                self.pulse1.clock_length_counter();
                self.pulse2.clock_length_counter();
                self.noise.clock_length_counter();
                self.triangle.clock_length_counter();
                self.pulse1.clock_sweep();
                self.pulse2.clock_sweep();
            }
            FrameEvent::SetIrq => {}
        }
    }

    /// Mix the current channel outputs using the NES's non-linear DAC
    /// approximation (reference: `core/apu.h`'s mixer lookup tables).
    fn mix(&self) -> f32 {
        let p1 = self.pulse1.output() as f32;
        let p2 = self.pulse2.output() as f32;
        let t = self.triangle.output() as f32;
        let n = self.noise.output() as f32;
        let d = self.dmc.output() as f32;

        let pulse_sum = p1 + p2;
        let pulse_out = if pulse_sum > 0.0 {
            95.88 / (8128.0 / pulse_sum + 100.0)
        } else {
            0.0
        };

        let tnd_sum = t / 8227.0 + n / 12241.0 + d / 22638.0;
        let tnd_out = if tnd_sum > 0.0 {
            159.79 / (1.0 / tnd_sum + 100.0)
        } else {
            0.0
        };

        pulse_out + tnd_out
    }

    /// Take every sample in the front buffer, leaving it empty. Called by
    /// `Console` once per emulated frame; the front buffer only has new
    /// content once `clock()` has filled and swapped a full back buffer.
    pub fn drain_samples(&mut self) -> Vec<f32> {
        let samples = self.front_buffer[..self.front_len].to_vec();
        self.front_len = 0;
        samples
    }

    pub fn irq_pending(&self) -> bool {
        self.frame_counter.irq_pending() || self.dmc.irq_pending()
    }

    /// Read from an APU register. Only $4015 (status) is readable; every
    /// other address returns 0, matching how `Bus` only routes $4015 here.
    pub fn read_register(&mut self, addr: u16) -> u8 {
        if addr != 0x4015 {
            return 0;
        }

        let mut status = 0u8;
        if self.pulse1.is_active() {
            status |= 0x01;
        }
        if self.pulse2.is_active() {
            status |= 0x02;
        }
        if self.triangle.is_active() {
            status |= 0x04;
        }
        if self.noise.is_active() {
            status |= 0x08;
        }
        if self.dmc.is_active() {
            status |= 0x10;
        }
        if self.frame_counter.irq_pending() {
            status |= 0x40;
        }
        if self.dmc.irq_pending() {
            status |= 0x80;
        }

        self.frame_counter.clear_irq();
        status
    }

    /// Write to an APU register ($4000-$4013, $4015, $4017).
    pub fn write_register(&mut self, addr: u16, data: u8) {
        match addr {
            0x4000 => self.pulse1.write_register_0(data),
            0x4001 => self.pulse1.write_register_1(data),
            0x4002 => self.pulse1.write_register_2(data),
            0x4003 => self.pulse1.write_register_3(data),
            0x4004 => self.pulse2.write_register_0(data),
            0x4005 => self.pulse2.write_register_1(data),
            0x4006 => self.pulse2.write_register_2(data),
            0x4007 => self.pulse2.write_register_3(data),
            0x4008 => self.triangle.write_register_0(data),
            0x4009 => self.triangle.write_register_1(data),
            0x400A => self.triangle.write_register_2(data),
            0x400B => self.triangle.write_register_3(data),
            0x400C => self.noise.write_register_0(data),
            0x400D => self.noise.write_register_1(data),
            0x400E => self.noise.write_register_2(data),
            0x400F => self.noise.write_register_3(data),
            0x4010 => self.dmc.write_register_0(data),
            0x4011 => self.dmc.write_register_1(data),
            0x4012 => self.dmc.write_register_2(data),
            0x4013 => self.dmc.write_register_3(data),
            0x4015 => {
                self.pulse1.set_enabled(data & 0x01 != 0);
                self.pulse2.set_enabled(data & 0x02 != 0);
                self.triangle.set_enabled(data & 0x04 != 0);
                self.noise.set_enabled(data & 0x08 != 0);
                self.dmc.set_enabled(data & 0x10 != 0);
            }
            0x4017 => {
                for event in self.frame_counter.write_control(data) {
                    self.dispatch_frame_event(event);
                }
            }
            _ => {}
        }
    }
}
