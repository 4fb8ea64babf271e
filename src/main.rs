// coachdesk: student and course entry for a coaching center

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use coachdesk::prelude::*;
use coachdesk::ui::App;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

struct Args {
    data_dir: PathBuf,
    in_memory: bool,
}

fn parse_args() -> Option<Args> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("coachdesk");

    let mut data_dir = None;
    let mut in_memory = false;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage(program_name);
                return None;
            }
            "--memory" => in_memory = true,
            flag if flag.starts_with('-') => {
                eprintln!("Error: Unknown option '{flag}'");
                eprintln!();
                print_usage(program_name);
                std::process::exit(1);
            }
            dir if data_dir.is_none() => data_dir = Some(PathBuf::from(dir)),
            extra => {
                eprintln!("Error: Unexpected argument '{extra}'");
                std::process::exit(1);
            }
        }
    }

    Some(Args {
        data_dir: data_dir.unwrap_or_else(|| PathBuf::from(".")),
        in_memory,
    })
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {program_name} [--memory] [DATA_DIR]");
    eprintln!();
    eprintln!("  DATA_DIR   directory holding studentData.json and courseData.json (default: .)");
    eprintln!("  --memory   keep records in memory only; nothing is written to DATA_DIR");
    eprintln!();
    eprintln!("Logs go to DATA_DIR/coachdesk.log; set RUST_LOG to change the level.");
}

/// Logs to a file so the TUI owns the terminal
fn init_tracing(config: &StoreConfig) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(&config.dir)?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path())?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .init();

    Ok(())
}

fn run_app<DB: Database>(store: RecordStore<DB>) -> Result<(), Box<dyn std::error::Error>> {
    let (events_tx, events_rx) = store_events();
    let listing = ListingView::new(events_rx);
    let form = EntryForm::new(events_tx);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store, form, listing);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(args) = parse_args() else {
        return Ok(());
    };

    let config = StoreConfig::new(&args.data_dir);
    init_tracing(&config)?;

    if args.in_memory {
        #[cfg(feature = "memory")]
        {
            info!("Starting with in-memory storage.");
            return run_app(RecordStore::<MemoryDB>::open(config));
        }
        #[cfg(not(feature = "memory"))]
        {
            eprintln!("Error: --memory requires the `memory` feature");
            std::process::exit(1);
        }
    }

    let store = RecordStore::<JsonDB>::open(config);
    info!(
        "Starting in [{}] with [{}] and [{}].",
        store.database().dir_absolute().display(),
        store.student_path().display(),
        store.course_path().display()
    );

    return run_app(store);
}
