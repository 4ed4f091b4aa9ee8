use std::path::PathBuf;

use anyhow::{Context, Result};
use chadboy_core::{Cartridge, GameBoy, SCREEN_HEIGHT, SCREEN_WIDTH};

const USAGE: &str = "Usage: frame_dump <rom_path> <out_rgb24_path> [frames]";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rom_path: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("{USAGE}");
        std::process::exit(2);
    });
    let out_path: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("{USAGE}");
        std::process::exit(2);
    });
    let frames: u32 = match args.next() {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid frame count '{arg}'"))?,
        None => 120,
    };

    let cartridge = Cartridge::from_file(&rom_path)
        .with_context(|| format!("failed to load ROM '{}'", rom_path.display()))?;

    let mut gb = GameBoy::new();
    gb.load_cartridge(&cartridge);

    for frame in 0..frames {
        gb.step_frame()
            .with_context(|| format!("emulation failed during frame {frame}"))?;
    }

    let mut buffer = vec![0u8; SCREEN_WIDTH * SCREEN_HEIGHT * 3];
    gb.video_frame(&mut buffer);

    std::fs::write(&out_path, &buffer)
        .with_context(|| format!("failed to write '{}'", out_path.display()))?;

    println!(
        "Wrote {} bytes ({}x{} rgb24) after {} frames to '{}'",
        buffer.len(),
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        frames,
        out_path.display()
    );
    Ok(())
}
