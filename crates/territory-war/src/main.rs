mod backend;
mod input;
mod menu;

use crate::backend::{InMemoryRepository, StoreConfig};
use crate::menu::Menu;
use clap::Parser;
use log::LevelFilter;
use std::io;

#[derive(Debug, Parser)]
#[command(
    name = "territory-war",
    about = "Territory War: interactive in-memory territory registry"
)]
struct Args {
    /// Maximum number of territories kept in memory
    #[arg(long, default_value_t = backend::model::DEFAULT_CAPACITY)]
    capacity: usize,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs vão para stderr para não misturar com o menu
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .target(env_logger::Target::Stderr)
        .init();

    let config = StoreConfig {
        capacity: args.capacity,
    };
    log::info!("starting with capacity {}", config.capacity);

    let mut store = InMemoryRepository::with_config(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut store, stdin.lock(), stdout.lock()).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["territory-war"]).unwrap();
        assert_eq!(args.capacity, 100);
        assert_eq!(args.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_args_capacity_and_verbosity() {
        let args = Args::try_parse_from(["territory-war", "--capacity", "3", "-vv"]).unwrap();
        assert_eq!(args.capacity, 3);
        assert_eq!(args.log_level(), LevelFilter::Debug);
    }
}
