mod app;
mod command;
mod config;
mod render;

use clap::{Parser, ValueEnum};
use std::io;
use std::path::PathBuf;
use tictactoe_engine::games::tictactoe::FirstPlayerMode;
use tictactoe_engine::{SessionRng, log, logger};

use app::ConsoleApp;
use config::{CONFIG_FILE, get_config_manager};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstPlayerArg {
    Human,
    Computer,
    Random,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Human => FirstPlayerMode::Human,
            FirstPlayerArg::Computer => FirstPlayerMode::Computer,
            FirstPlayerArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Seed for the session RNG, used when the first player is random.
    #[arg(long)]
    seed: Option<u64>,

    /// Overrides `first_player` from the config file.
    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerArg>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let mut config = get_config_manager(&args.config).get_config()?;
    if let Some(first_player) = args.first_player {
        config.first_player = first_player.into();
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting game, first player mode {:?}, seed {}",
        config.first_player,
        rng.seed()
    );

    let mut app = ConsoleApp::new(config, rng);
    app.run(io::stdin().lock(), &mut io::stdout())?;

    log!("Bye");
    Ok(())
}
