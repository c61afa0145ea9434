//! Headless mode: a line-oriented driver over the navigation engine.
//!
//! Reads commands from stdin and prints the resulting view to stdout,
//! suitable for scripted traversal and automated testing. Commands mirror
//! the TUI keys: digits open entries, `q` goes back (and quits from the
//! root), `+` bookmarks, `p` opens the bookmark list, `quit` exits. While
//! a password prompt is pending, the next line is taken as the password.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::Path;

use centinel_core::{ArtifactTree, Command, NavigationEngine, Outcome, View};

pub fn run_headless(root: &Path) -> Result<(), Box<dyn Error>> {
    let tree = ArtifactTree::load(root)?;
    let mut engine = NavigationEngine::new(tree);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_view(&engine);
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        let command = if engine.pending_target().is_some() {
            Some(Command::SubmitPassword(input.to_string()))
        } else {
            match input {
                "q" | "Q" => Some(Command::Back),
                "+" => Some(Command::ToggleBookmark),
                "p" | "P" => Some(Command::ViewBookmarks),
                "quit" | "exit" => break,
                _ => input.parse::<usize>().ok().map(Command::Select),
            }
        };

        match command {
            Some(command) => match engine.apply(command) {
                Outcome::AtRoot => break,
                Outcome::PasswordRejected => println!("Access denied."),
                Outcome::NoFurtherLevels => println!("No further clearance levels exist."),
                Outcome::InvalidSelection => println!("Invalid selection."),
                Outcome::Bookmarked => println!("Bookmarked."),
                _ => {}
            },
            None => println!("Invalid selection."),
        }

        print_view(&engine);
        prompt(&mut stdout)?;
    }

    Ok(())
}

fn prompt(stdout: &mut impl Write) -> io::Result<()> {
    write!(stdout, "> ")?;
    stdout.flush()
}

fn print_view(engine: &NavigationEngine) {
    match engine.current_view() {
        View::Listing { header, rows } => {
            println!("\n{header}");
            if rows.is_empty() {
                println!("  (empty)");
            }
            for (i, row) in rows.iter().enumerate() {
                if row.locked {
                    println!("  {}. [LOCKED]", i + 1);
                } else if row.is_directory {
                    println!("  {}. {}/", i + 1, row.name);
                } else {
                    println!("  {}. {}", i + 1, row.name);
                }
            }
        }
        View::Text { name, contents } => {
            println!("\n--- {name} ---");
            println!("{contents}");
            println!("--- end ---");
        }
        View::Image {
            name,
            width,
            height,
            bytes,
        } => {
            println!("\n[image] {name} ({width}x{height}, {} bytes)", bytes.len());
        }
        View::PasswordPrompt { target, level } => {
            println!("\n{target}/ requires level {level} clearance.");
            println!("File locked. Enter password to authorize entry:");
        }
    }
}
