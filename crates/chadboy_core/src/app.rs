use chadboy_common::app::App;
use chadboy_common::key::Key;

use crate::cpu::LogTracer;
use crate::{GameBoy, SCREEN_HEIGHT, SCREEN_SCALE, SCREEN_WIDTH};

/// Frontend-facing wrapper: one `update` runs one frame and renders it.
///
/// The first CPU error is logged and freezes the machine; the window keeps
/// showing the last frame until the user closes it.
#[derive(Debug, Default)]
pub struct GameBoyApp {
    should_exit: bool,
    pub gb: GameBoy,
    frame_counter: u64,
    last_pc: u16,
    pc_stagnant_frames: u32,
    failed: bool,
}

impl GameBoyApp {
    /// Log every executed instruction at `trace` level.
    pub fn enable_tracing(&mut self) {
        self.gb.cpu.set_tracer(Some(Box::new(LogTracer)));
    }

    /// True once a step has failed and emulation has stopped.
    pub fn has_failed(&self) -> bool {
        self.failed
    }
}

impl App for GameBoyApp {
    fn init(&mut self) {
        log::info!("Game Boy init");
        self.last_pc = self.gb.cpu.regs.pc;
    }

    fn update(&mut self, screen_state: &mut [u8]) {
        if !self.failed {
            if let Err(err) = self.gb.step_frame() {
                log::error!("emulation stopped: {err}");
                self.failed = true;
            }
        }

        self.gb.video_frame(screen_state);
        self.frame_counter = self.frame_counter.wrapping_add(1);

        let regs = &self.gb.cpu.regs;
        if regs.pc == self.last_pc {
            self.pc_stagnant_frames = self.pc_stagnant_frames.saturating_add(1);
        } else {
            self.pc_stagnant_frames = 0;
            self.last_pc = regs.pc;
        }

        if self.frame_counter == 1 || self.frame_counter % 60 == 0 {
            let memory = self.gb.cpu.memory();
            log::info!(
                "GB: frame={} pc=0x{:04X} sp=0x{:04X} af=0x{:04X} bc=0x{:04X} de=0x{:04X} hl=0x{:04X} ime={} halted={} stopped={} locked={} LCDC=0x{:02X} SCX={} SCY={} BGP=0x{:02X}",
                self.frame_counter,
                regs.pc,
                regs.sp,
                regs.af(),
                regs.bc(),
                regs.de(),
                regs.hl(),
                self.gb.cpu.ime,
                self.gb.cpu.is_halted(),
                self.gb.cpu.is_stopped(),
                self.gb.cpu.is_locked(),
                memory.read(0xFF40),
                memory.read(0xFF43),
                memory.read(0xFF42),
                memory.read(0xFF47),
            );
        }

        if self.pc_stagnant_frames == 600 {
            log::warn!(
                "GB: PC unchanged for ~600 frames at 0x{:04X} (halted={} stopped={} locked={})",
                self.last_pc,
                self.gb.cpu.is_halted(),
                self.gb.cpu.is_stopped(),
                self.gb.cpu.is_locked(),
            );
        }
    }

    fn handle_key_event(&mut self, key: Key, is_pressed: bool) {
        log::debug!("GB key event: {:?} pressed={}", key, is_pressed);
        if key == Key::Escape && is_pressed {
            self.should_exit = true;
            return;
        }
        self.gb.handle_key(key, is_pressed);
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("Game Boy exit after {} frames", self.frame_counter);
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn title(&self) -> String {
        "ChadBoy".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_stops_stepping_after_error() {
        let mut rom = vec![0u8; 0x200];
        rom[0x0100] = 0xDD;
        let mut app = GameBoyApp::default();
        app.gb.load_rom(&rom).unwrap();
        app.init();
        let mut screen = vec![0u8; SCREEN_WIDTH * SCREEN_HEIGHT * 3];

        app.update(&mut screen);
        assert!(app.has_failed());
        assert!(screen.iter().all(|&b| b == 0xFF));

        // Later frames still render and do not panic.
        app.update(&mut screen);
        assert!(app.has_failed());
        assert_eq!(app.gb.cpu.regs.pc, 0x0100);
    }

    #[test]
    fn escape_requests_exit() {
        let mut app = GameBoyApp::default();
        assert!(!app.should_exit());

        app.handle_key_event(Key::Escape, true);

        assert!(app.should_exit());
    }
}
