use chadboy_common::key::Key;
use chadboy_common::Color;

use super::*;
use crate::error::CoreError;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

fn pixel(buffer: &[u8], x: usize, y: usize) -> Color {
    let i = (y * SCREEN_WIDTH + x) * 3;
    Color::new_rgb(buffer[i], buffer[i + 1], buffer[i + 2])
}

fn frame_buffer() -> Vec<u8> {
    vec![0u8; SCREEN_WIDTH * SCREEN_HEIGHT * 3]
}

#[test]
fn load_rom_rejects_oversized_image() {
    let mut gb = GameBoy::new();
    let rom = vec![0u8; CART_SIZE + 1];

    let err = gb.load_rom(&rom).unwrap_err();

    assert!(matches!(
        err,
        CoreError::RomTooLarge {
            size,
            limit: CART_SIZE
        } if size == CART_SIZE + 1
    ));
}

#[test]
fn load_rom_restarts_at_entry_point() {
    let mut gb = GameBoy::new();
    gb.cpu.regs.pc = 0x4000;

    gb.load_rom(&[0x00; 0x200]).unwrap();

    assert_eq!(gb.cpu.regs.pc, 0x0100);
    assert_eq!(gb.cpu.memory().read(0xFF40), 0x91);
}

#[test]
fn step_frame_runs_one_frame_of_nops() {
    let mut gb = GameBoy::new();
    gb.load_rom(&[]).unwrap();

    let cycles = gb.step_frame().unwrap();

    assert_eq!(cycles, CYCLES_PER_FRAME);
    assert_eq!(gb.cpu.regs.pc, 0x0100 + (CYCLES_PER_FRAME / 4) as u16);
}

#[test]
fn step_frame_surfaces_illegal_opcode() {
    let mut rom = vec![0u8; 0x200];
    rom[0x0100] = 0x00;
    rom[0x0101] = 0xFD;
    let mut gb = GameBoy::new();
    gb.load_rom(&rom).unwrap();

    let err = gb.step_frame().unwrap_err();

    assert!(matches!(
        err,
        CoreError::IllegalOpcode {
            opcode: 0xFD,
            pc: 0x0101
        }
    ));
    assert!(gb.cpu.is_locked());
}

#[test]
fn key_press_leaves_stop() {
    let mut rom = vec![0u8; 0x200];
    rom[0x0100] = 0x10; // STOP 0
    let mut gb = GameBoy::new();
    gb.load_rom(&rom).unwrap();

    gb.cpu.step().unwrap();
    assert!(gb.cpu.is_stopped());

    gb.handle_key(Key::Z, false);
    assert!(gb.cpu.is_stopped());

    gb.handle_key(Key::Z, true);
    assert!(!gb.cpu.is_stopped());
}

#[test]
fn disabled_lcd_renders_white() {
    let mut gb = GameBoy::new();
    gb.cpu.memory_mut().write(0xFF40, 0x00);
    let mut buffer = frame_buffer();

    gb.video_frame(&mut buffer);

    assert!(buffer.iter().all(|&b| b == 0xFF));
}

#[test]
fn background_tile_with_unsigned_addressing() {
    let mut gb = GameBoy::new();
    // Power-on LCDC 0x91: LCD on, tile data at 0x8000, map at 0x9800, BG on.
    // Tile 0, row 0: colour index 1 on every pixel. BGP 0xFC maps 1 to 3.
    gb.cpu.memory_mut().write(0x8000, 0xFF);
    gb.cpu.memory_mut().write(0x8001, 0x00);
    let mut buffer = frame_buffer();

    gb.video_frame(&mut buffer);

    assert_eq!(pixel(&buffer, 0, 0), SHADES[3]);
    assert_eq!(pixel(&buffer, 159, 0), SHADES[3]);
    assert_eq!(pixel(&buffer, 0, 1), SHADES[0]);
    assert_eq!(pixel(&buffer, 5, 8), SHADES[3]);
}

#[test]
fn background_tile_with_signed_addressing_and_scroll() {
    let mut gb = GameBoy::new();
    let memory = gb.cpu.memory_mut();
    memory.write(0xFF40, 0x81); // LCD on, tile data at 0x8800 (signed), BG on
    memory.write(0xFF47, 0xE4); // identity palette
    // Tile 0 lives at 0x9000 in signed mode. Row 0: leftmost pixel index 3,
    // second pixel index 2.
    memory.write(0x9000, 0x80);
    memory.write(0x9001, 0xC0);
    memory.write(0xFF43, 0x01); // SCX = 1
    let mut buffer = frame_buffer();

    gb.video_frame(&mut buffer);

    // Scrolled by one, screen x=0 shows background x=1.
    assert_eq!(pixel(&buffer, 0, 0), SHADES[2]);
    assert_eq!(pixel(&buffer, 1, 0), SHADES[0]);
    // Screen x=7 is the first pixel of the next map entry, also tile 0.
    assert_eq!(pixel(&buffer, 7, 0), SHADES[3]);
}

#[test]
fn short_buffer_is_filled_without_overrun() {
    let gb = GameBoy::new();
    let mut buffer = vec![0u8; 10];

    gb.video_frame(&mut buffer);

    // Three whole pixels written, the trailing byte untouched.
    assert_eq!(&buffer[..9], &[0xFF; 9]);
    assert_eq!(buffer[9], 0);
}
