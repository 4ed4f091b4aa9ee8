use chadboy::Options;

fn main() {
    env_logger::init();

    let options = match Options::from_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!(
                "{err}\n\
                 Usage: chadboy <rom_path> [--trace]\n\
                 Example: RUST_LOG=info chadboy path/to/your.gb"
            );
            std::process::exit(2);
        }
    };

    log::info!("Playing ROM path: '{}'", options.rom_path);
    if let Err(err) = chadboy::run(&options) {
        eprintln!("chadboy: {err:#}");
        std::process::exit(1);
    }
}
