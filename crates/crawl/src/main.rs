//! crawl: generate a roguelike dungeon level
//!
//! Prints the generated map as text, or as JSON with `--json`.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use thiserror::Error;

use crawl_core::dungeon::generate_dungeon;
use crawl_core::entity::Entity;
use crawl_core::{ConfigError, DungeonConfig, GameRng};

/// Roguelike dungeon generator
#[derive(Parser, Debug)]
#[command(name = "crawl")]
#[command(author, version, about = "Generate a dungeon level", long_about = None)]
struct Args {
    /// Seed for the level (random if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// JSON file with generation parameters
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Number of room placement attempts
    #[arg(long = "max-rooms")]
    max_rooms: Option<u32>,

    /// Smallest room size, walls included
    #[arg(long = "room-min-size")]
    room_min_size: Option<i32>,

    /// Largest room size, walls included
    #[arg(long = "room-max-size")]
    room_max_size: Option<i32>,

    /// Map width in tiles
    #[arg(long = "width")]
    width: Option<i32>,

    /// Map height in tiles
    #[arg(long = "height")]
    height: Option<i32>,

    /// Most monsters sampled per room
    #[arg(long = "max-monsters")]
    max_monsters: Option<u32>,

    /// Dump the map as JSON instead of text
    #[arg(long = "json")]
    json: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Could not read config '{path}': {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied
    fn dungeon_config(&self) -> Result<DungeonConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => DungeonConfig::default(),
        };
        if let Some(v) = self.max_rooms {
            config.max_rooms = v;
        }
        if let Some(v) = self.room_min_size {
            config.room_min_size = v;
        }
        if let Some(v) = self.room_max_size {
            config.room_max_size = v;
        }
        if let Some(v) = self.width {
            config.map_width = v;
        }
        if let Some(v) = self.height {
            config.map_height = v;
        }
        if let Some(v) = self.max_monsters {
            config.max_monsters_per_room = v;
        }
        Ok(config)
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn load_config(path: &Path) -> Result<DungeonConfig, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ConfigFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = args.dungeon_config()?;
    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!("generating with seed {}", rng.seed());
    eprintln!("seed: {}", rng.seed());

    let map = generate_dungeon(&config, Entity::player(), &mut rng)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &map)?;
        writeln!(out)?;
    } else {
        out.write_all(map.to_ascii().as_bytes())?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("crawl: {e}");
            ExitCode::FAILURE
        }
    }
}
