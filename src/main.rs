// sortty: step-through sorting visualizer

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use sortty::algorithms::{Algorithm, AlgorithmRegistry};
use sortty::config::{Config, DEFAULT_LENGTH, DEFAULT_MAX_VALUE};
use sortty::input::parse_values;
use sortty::session::Session;
use sortty::ui::App;

#[derive(Parser, Debug)]
#[command(name = "sortty", version, about = "Watch sorting algorithms run one step at a time")]
struct Cli {
    /// Algorithm to start with: bubble, selection, cycle or heap
    #[arg(short, long, default_value = "bubble")]
    algorithm: Algorithm,

    /// Number of elements in generated arrays
    #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Largest value in generated arrays
    #[arg(short, long, default_value_t = DEFAULT_MAX_VALUE)]
    max: i64,

    /// Sort this array instead of a random one, e.g. "3,1,2"
    #[arg(long)]
    values: Option<String>,

    /// Seed for reproducible random arrays
    #[arg(long)]
    seed: Option<u64>,

    /// Delay between automatic steps in milliseconds
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,

    /// Log file (defaults to sortty.log in the system temp directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<Config, sortty::errors::ConfigError> {
        let values = self.values.as_deref().map(parse_values).transpose()?;
        Ok(Config {
            algorithm: self.algorithm,
            length: self.length,
            max_value: self.max,
            values,
            seed: self.seed,
            interval: Duration::from_millis(self.interval_ms),
        })
    }
}

fn init_logging(path: Option<PathBuf>) -> io::Result<()> {
    let path = path.unwrap_or_else(|| std::env::temp_dir().join("sortty.log"));
    let log_file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_file.clone())?;

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "invalid configuration");
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };
    if let Err(e) = config.validate() {
        warn!(error = %e, "invalid configuration");
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    let registry = AlgorithmRegistry::new();
    let Some(session) = Session::new(
        registry,
        config.algorithm,
        config.source(),
        config.interval,
    ) else {
        eprintln!("Error: no sorting algorithms registered");
        std::process::exit(1);
    };
    info!(?config, "starting visualizer");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    info!("visualizer exited");
    Ok(())
}
