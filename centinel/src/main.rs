//! CENTINEL terminal artifact-browsing game.
//!
//! Navigate a fixed tree of text and image artifacts with the number keys;
//! some subtrees demand a password before they open. Bookmark files with
//! `+` and review them with `p`.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line-oriented interface suitable for
//! scripted traversal:
//!
//! ```bash
//! cargo run -p centinel -- --headless path/to/1documents
//! ```

mod app;
mod events;
mod headless;
mod ui;

use std::io::{self, stdout};
use std::path::Path;
use std::time::Duration;

use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use centinel_core::{ArtifactTree, NavigationEngine};

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

const DEFAULT_ROOT: &str = "1documents";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let root = args
        .iter()
        .skip(1)
        .find(|a| !a.starts_with("--"))
        .cloned()
        .unwrap_or_else(|| DEFAULT_ROOT.to_string());

    if args.iter().any(|a| a == "--headless") {
        return headless::run_headless(Path::new(&root));
    }

    // The one fatal path: a broken artifact root aborts startup.
    let tree = match ArtifactTree::load(&root) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Failed to load artifacts from {root:?}: {e}");
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, App::new(NavigationEngine::new(tree)));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            if handle_event(&mut app, ev) == EventResult::Quit {
                return Ok(());
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn print_help() {
    println!("CENTINEL - terminal artifact-browsing game");
    println!();
    println!("USAGE:");
    println!("  centinel [OPTIONS] [ROOT]");
    println!();
    println!("ARGS:");
    println!("  ROOT             Artifact root directory (default: {DEFAULT_ROOT})");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help       Show this help message");
    println!("  --headless       Run in headless mode (line-oriented, no TUI)");
    println!();
    println!("KEYS:");
    println!("  1-9              Open the numbered entry");
    println!("  q                Go back (quits from the root)");
    println!("  +                Bookmark the current file");
    println!("  p                View bookmarks");
    println!("  Up/Down          Scroll text files");
    println!("  Esc / Ctrl+C     Quit");
}
