use crate::args::GameArgs;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;

pub fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Sends log output to `--log-file` if one was given. The terminal is left to the game.
pub fn init(args: &GameArgs) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path).wrap_err_with(|| format!("creating {}", path.display()))?;
    WriteLogger::init(level(args.verbose), Config::default(), file)?;
    log::info!("logging to {}", path.display());
    Ok(())
}
