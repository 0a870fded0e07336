// src/main.rs

use color_eyre::eyre::eyre;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    ade_sync::cli::run().map_err(|e| eyre!("{e}"))
}
