//! Headless entry point (native).

#[cfg(feature = "native")]
mod cli {
    use clap::Parser;
    use paletteframe_plugin::headless::{self, InputKind};
    use std::path::PathBuf;

    #[derive(Parser, Debug)]
    #[command(name = "paletteframe", about = "Generate color swatch frames from name,hex CSV")]
    pub struct Cli {
        /// JSON file overriding swatch layout and font settings
        #[arg(long)]
        config: Option<PathBuf>,

        /// Treat INPUT as a JSON plugin message instead of raw CSV
        #[arg(long)]
        message: bool,

        /// CSV file (or message file with --message)
        input: PathBuf,
    }

    pub fn run() -> Result<(), headless::HeadlessError> {
        let cli = Cli::parse();
        let config = headless::load_config(cli.config.as_deref())?;
        let kind = if cli.message { InputKind::Message } else { InputKind::Csv };
        let json = headless::run_file(&cli.input, kind, config)?;
        println!("{json}");
        Ok(())
    }
}

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting PaletteFrame");

    if let Err(e) = cli::run() {
        log::error!("{}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
