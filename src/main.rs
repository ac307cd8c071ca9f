// parentrace: step-by-step bracket matching in the terminal

use std::io::{self, Write};

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use parentrace::config::{Cli, Config};
use parentrace::trace::generate;
use parentrace::ui::App;
use parentrace::{error, logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match Config::from_cli(Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    logging::init(&config)?;

    if config.print_only {
        print_trace(&config.expression)?;
        return Ok(());
    }

    let trace = generate(&config.expression);
    eprintln!(
        "Traced {:?}: {} steps, {}.",
        config.expression,
        trace.len(),
        if trace.is_valid() { "valid" } else { "invalid" }
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(&config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

/// Write the trace as text, one step per line, and the verdict.
fn print_trace(expression: &str) -> error::Result<()> {
    let trace = generate(expression);
    let mut out = io::stdout().lock();
    for (i, step) in trace.steps().iter().enumerate() {
        writeln!(out, "{:3} {}", i, step)?;
    }
    writeln!(
        out,
        "{}",
        if trace.is_valid() { "valid" } else { "invalid" }
    )?;
    Ok(())
}
