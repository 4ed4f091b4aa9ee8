use chadboy_common::Color;

use crate::memory::Memory;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// DMG shades indexed by the 2-bit value a palette register maps to:
/// 0 is the lightest, 3 the darkest.
pub const SHADES: [Color; 4] = [
    Color::WHITE,
    Color::new_rgb(0xC0, 0xC0, 0xC0),
    Color::new_rgb(0x60, 0x60, 0x60),
    Color::BLACK,
];

const VRAM_START: u16 = 0x8000;
const VRAM_END: u16 = 0x9FFF;

const LCDC: u16 = 0xFF40;
const SCY: u16 = 0xFF42;
const SCX: u16 = 0xFF43;
const BGP: u16 = 0xFF47;

const LCDC_ENABLE: u8 = 0x80;
const LCDC_TILE_DATA_UNSIGNED: u8 = 0x10;
const LCDC_BG_MAP_HIGH: u8 = 0x08;
const LCDC_BG_ENABLE: u8 = 0x01;

/// Draw the background layer into an RGB24 `buffer`.
///
/// The frame is rebuilt from VRAM and the LCD registers every call; there is
/// no scanline timing. A buffer shorter than one frame receives as many
/// whole pixels as fit.
pub fn render_video_frame(memory: &Memory, buffer: &mut [u8]) {
    let pixels = (buffer.len() / 3).min(SCREEN_WIDTH * SCREEN_HEIGHT);

    let lcdc = memory.read(LCDC);
    if (lcdc & LCDC_ENABLE) == 0 || (lcdc & LCDC_BG_ENABLE) == 0 {
        for i in 0..pixels {
            Color::WHITE.write_rgb24(buffer, i);
        }
        return;
    }

    let scy = memory.read(SCY);
    let scx = memory.read(SCX);
    let bgp = memory.read(BGP);
    let vram = memory.slice(VRAM_START..=VRAM_END);
    let vram_at = |addr: u16| vram[(addr - VRAM_START) as usize];

    let bg_map_base: u16 = if (lcdc & LCDC_BG_MAP_HIGH) != 0 {
        0x9C00
    } else {
        0x9800
    };
    let tile_data_unsigned = (lcdc & LCDC_TILE_DATA_UNSIGNED) != 0;

    for pixel in 0..pixels {
        let x = (pixel % SCREEN_WIDTH) as u8;
        let y = (pixel / SCREEN_WIDTH) as u8;

        // Scroll-adjusted coordinates in the 256x256 background.
        let bg_x = x.wrapping_add(scx);
        let bg_y = y.wrapping_add(scy);

        let map_addr = bg_map_base + (bg_y / 8) as u16 * 32 + (bg_x / 8) as u16;
        let tile_index = vram_at(map_addr);

        let tile_base: u16 = if tile_data_unsigned {
            VRAM_START + tile_index as u16 * 16
        } else {
            // 0x9000-based, signed index.
            0x9000u16.wrapping_add_signed(tile_index as i8 as i16 * 16)
        };

        // Each tile row is two bytes: low bit-plane then high bit-plane.
        let row_addr = tile_base + (bg_y & 7) as u16 * 2;
        let lo = vram_at(row_addr);
        let hi = vram_at(row_addr + 1);
        let bit = 7 - (bg_x & 7);
        let color_index = (((hi >> bit) & 0x01) << 1) | ((lo >> bit) & 0x01);

        let shade = (bgp >> (color_index * 2)) & 0x03;
        SHADES[shade as usize].write_rgb24(buffer, pixel);
    }
}
