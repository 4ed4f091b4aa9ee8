use anyhow::{Context, Result};
use chadboy_common::app::App;
use chadboy_core::{Cartridge, GameBoyApp};
use chadboy_sdl2::{SdlContext, SdlInitInfo};

/// Process options gathered from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub rom_path: String,
    pub trace: bool,
}

impl Options {
    /// Parse `<rom> [--trace]`; flags may appear in any position.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut rom_path = None;
        let mut trace = false;
        for arg in args {
            if arg == "--trace" {
                trace = true;
            } else if arg.starts_with("--") {
                anyhow::bail!("unknown option '{arg}'");
            } else if rom_path.is_none() {
                rom_path = Some(arg);
            } else {
                anyhow::bail!("unexpected argument '{arg}'");
            }
        }
        let rom_path = rom_path.context("no ROM path provided")?;
        Ok(Self { rom_path, trace })
    }
}

pub fn run(options: &Options) -> Result<()> {
    let cartridge = Cartridge::from_file(&options.rom_path)
        .with_context(|| format!("failed to load ROM '{}'", options.rom_path))?;

    let mut app = GameBoyApp::default();
    app.gb.load_cartridge(&cartridge);
    if options.trace {
        log::info!("instruction tracing enabled (visible with RUST_LOG=trace)");
        app.enable_tracing();
    }

    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_rom_and_trace_flag() {
        let options = Options::from_args(args(&["--trace", "tetris.gb"])).unwrap();
        assert_eq!(options.rom_path, "tetris.gb");
        assert!(options.trace);

        let options = Options::from_args(args(&["tetris.gb"])).unwrap();
        assert!(!options.trace);
    }

    #[test]
    fn rejects_missing_rom_and_extra_arguments() {
        assert!(Options::from_args(args(&[])).is_err());
        assert!(Options::from_args(args(&["a.gb", "b.gb"])).is_err());
        assert!(Options::from_args(args(&["a.gb", "--fast"])).is_err());
    }
}
