use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use ursinity_core::Config;

mod commands;

#[derive(Parser)]
#[command(name = "ursinity-cli", version, about = "Ursinity CLI")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Angle and circle math
    Math {
        #[command(subcommand)]
        action: commands::math::MathAction,
    },
    /// File helpers rooted at the persistent data directory
    Files {
        #[command(subcommand)]
        action: commands::files::FilesAction,
    },
    /// Duration timer
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose {
            "debug".to_string()
        } else {
            Config::load_from(&Config::path())
                .map(|cfg| cfg.log.level)
                .unwrap_or_else(|_| "warn".to_string())
        };
        EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Math { action } => commands::math::run(action),
        Commands::Files { action } => commands::files::run(action),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
