use clap::{ArgAction, Parser};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Command line minesweeper
#[derive(Parser, Clone, Default, Debug)]
#[command(version, about, long_about = None)]
pub struct GameArgs {
    /// width
    #[arg(short = 'x', long, default_value_t = 9)]
    pub width: u16,
    /// height
    #[arg(short = 'y', long, default_value_t = 9)]
    pub height: u16,
    /// amount of mines
    #[arg(short, long, default_value_t = 10)]
    pub mines: u32,
    /// seed for a reproducible mine layout
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// write a log to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
    /// log more, repeat for trace output
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// print the mine layout before playing
    #[arg(long)]
    pub debug_layout: bool,
}

impl GameArgs {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
