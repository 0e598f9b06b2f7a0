mod app;
mod domain;
mod input;
mod logging;
mod persistence;
mod report;
mod ticker;
mod tracker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::SystemClock;
use persistence::{ensure_data_dir, init_local_data_dir, FileStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::time::Instant;
use ticker::Ticker;
use tracker::DayTracker;
use ui::modal::RESET_PROMPT;

#[derive(Parser)]
#[command(name = "donein3")]
#[command(about = "Three things a day: a terminal daily intention tracker with a completion streak", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .donein3 directory in the current directory
    Init,
    /// Show today's tasks and the current streak
    Status,
    /// Add a task to today's list
    Add {
        /// Task text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Toggle the task in a slot
    Toggle {
        /// Slot number (1-3)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=3))]
        slot: u8,
    },
    /// Clear today's tasks
    Reset {
        /// Skip the confirmation question
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        let data_dir = init_local_data_dir()?;
        println!("Initialized data directory: {}", data_dir.display());
        println!();
        println!("donein3 will now keep today's tasks in this directory.");
        return Ok(());
    }

    let mut tracker = open_tracker()?;

    match cli.command {
        Some(Commands::Status) => {
            print!("{}", report::status_report(&tracker));
        }
        Some(Commands::Add { text }) => {
            let text = text.join(" ");
            if tracker.add_task(&text) {
                print!("{}", report::status_report(&tracker));
            } else if tracker.tasks().is_full() {
                println!("All three slots are taken for today.");
            } else {
                println!("Nothing to add.");
            }
        }
        Some(Commands::Toggle { slot }) => {
            let index = usize::from(slot) - 1;
            match tracker.task_id_at(index) {
                Some(id) => {
                    tracker.toggle_task(&id);
                    print!("{}", report::status_report(&tracker));
                    if tracker.is_celebrating() {
                        println!("All three done!");
                    }
                }
                None => println!("Slot {} is empty.", slot),
            }
        }
        Some(Commands::Reset { yes }) => {
            if tracker.reset_day(|| yes || confirm_on_stdin(RESET_PROMPT)) {
                println!("Today's list is cleared.");
            }
        }
        Some(Commands::Init) | None => run_tui(tracker)?,
    }

    Ok(())
}

/// Resolve the data directory, start logging and load the day
fn open_tracker() -> Result<DayTracker> {
    let data_dir = ensure_data_dir()?;
    if let Err(e) = logging::enable_logging(&data_dir) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    tracing::debug!(dir = %data_dir.display(), "using data directory");

    Ok(DayTracker::initialize(
        Box::new(FileStore::new(data_dir)),
        Box::new(SystemClock),
    ))
}

fn confirm_on_stdin(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes" | "Yes")
}

fn run_tui(mut tracker: DayTracker) -> Result<()> {
    // Re-date the stored day now that it has been reconciled
    if let Err(e) = tracker.persist() {
        eprintln!("Warning: failed to save state: {:#}", e);
    }

    let mut app = AppState::new(tracker);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!("event loop failed: {:#}", err);
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let mut ticker = Ticker::default();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Wait for input until the next tick is due
        if event::poll(ticker.timeout(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        if ticker.is_due(Instant::now()) {
            app.tick();
        }
    }
}
