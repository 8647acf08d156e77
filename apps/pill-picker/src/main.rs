//! pill-picker - the red pill / blue pill screen
//!
//! Event -> PillScreen.handle_event() -> Action -> store.dispatch()
//! -> reducer -> subscription marks dirty -> redraw.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p pill-picker
//!
//! # Start from a decided state, log every action to a file
//! REDPILL_LOG=/tmp/pill.log cargo run -p pill-picker -- --initial matrix --log-actions
//!
//! # No terminal UI: JSON actions on stdin, JSON states on stdout
//! echo '{"type":"CHOOSE_PILL","pill":"red"}' | cargo run -p pill-picker -- --headless
//! ```

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use redpill::{
    process_raw_event, spawn_event_poller, Component, ComposedMiddleware, Keybindings,
    LoggingMiddleware, PollerConfig, RawEvent,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use pill_picker::action::Action;
use pill_picker::binding::PillBinding;
use pill_picker::components::PillScreen;
use pill_picker::state::{InitialState, Verdict};
use pill_picker::store::create_store_with;
use pill_picker::{config, headless, logging, APP_NAME};

/// Red pill or blue pill?
#[derive(Parser, Debug)]
#[command(name = "pill-picker")]
#[command(about = "One screen, two pills, one message")]
struct Args {
    /// Starting verdict: undecided, real-world or matrix
    #[arg(long)]
    initial: Option<Verdict>,

    /// JSON file with keybinding overrides
    #[arg(long, value_name = "PATH")]
    keys: Option<PathBuf>,

    /// Log every dispatched action (needs REDPILL_LOG)
    #[arg(long)]
    log_actions: bool,

    /// Read JSON actions from stdin and print states instead of drawing
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = logging::init_tracing() {
        info!(app = APP_NAME, log = %path.display(), "Starting");
    }

    // Config errors are reported before the terminal is taken over
    let keybindings = match config::load_keybindings(args.keys.as_deref()) {
        Ok(keybindings) => keybindings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut middleware = ComposedMiddleware::<Action>::new();
    if args.log_actions {
        middleware.add(LoggingMiddleware::verbose());
    }
    let mut store = create_store_with(
        InitialState {
            result: args.initial,
        },
        middleware,
    );

    if args.headless {
        let report = headless::run(io::stdin().lock(), io::stdout().lock(), io::stderr(), &mut store);
        return match report {
            Ok(report) => {
                info!(
                    dispatched = report.dispatched,
                    skipped = report.skipped,
                    "Headless run finished"
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
    }

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, PillBinding::new(store), &keybindings).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut binding: PillBinding,
    keybindings: &Keybindings,
) -> io::Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(event_tx, PollerConfig::default(), cancel_token.clone());

    let mut screen = PillScreen::default();

    loop {
        if binding.take_dirty() {
            let props = binding.props(keybindings);
            terminal.draw(|frame| screen.render(frame, frame.area(), props))?;
        }

        tokio::select! {
            Some(raw_event) = event_rx.recv() => {
                let event = process_raw_event(raw_event);
                if event.is_resize() {
                    binding.mark_dirty();
                }
                for action in screen.handle_event(&event, binding.props(keybindings)) {
                    let _ = action_tx.send(action);
                }
            }

            Some(action) = action_rx.recv() => {
                if matches!(action, Action::Quit) {
                    info!("Quit requested");
                    break;
                }
                binding.dispatch(action);
            }

            else => break,
        }
    }

    cancel_token.cancel();
    Ok(())
}
