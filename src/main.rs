//! querygrid - browse a result preview or CSV file in the terminal
//!
//! Usage:
//!   querygrid result.txt            # interactive grid
//!   querygrid data.csv --csv        # parse CSV instead of the preview format
//!   cat result.txt | querygrid      # read from stdin
//!   querygrid result.txt --print    # print one rendered frame and exit

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::Event;
use querygrid::keymap::key_name;
use querygrid::model::source::{from_csv, from_preview};
use querygrid::tui::Tui;
use querygrid::{logging, Config, Screen, TableData};
use std::io::{self, Read};
use std::path::PathBuf;

/// Terminal display engine for tabular query results.
#[derive(Parser)]
#[command(name = "querygrid", about = "Browse tabular query results")]
struct Args {
    /// Preview or CSV file; reads stdin when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Parse the input as CSV with a header record
    #[arg(long)]
    csv: bool,

    /// Print one rendered frame to stdout and exit
    #[arg(long)]
    print: bool,

    /// Frame width for --print
    #[arg(long, default_value_t = 80)]
    width: u16,

    /// Frame height for --print
    #[arg(long, default_value_t = 24)]
    height: u16,

    /// Config file (default: ~/.querygrid/config.json or config.yaml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(path) = logging::default_log_path(Config::config_dir()) {
        // Keep going without a log file rather than refuse to start
        if let Err(e) = logging::init(&path, &config.log_level) {
            eprintln!("Warning: {:#}", e);
        }
    }

    let table = read_table(&args)?;
    tracing::info!(
        columns = table.columns.len(),
        rows = table.rows.len(),
        "table loaded"
    );

    let screen = Screen::from_config(table, &config);

    if args.print {
        println!("{}", screen.resize(args.width, args.height).render());
        return Ok(());
    }

    let mut tui = Tui::new()?;
    tui.enter()?;
    let result = run(&mut tui, screen);
    tui.exit()?;

    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

fn read_table(args: &Args) -> Result<TableData> {
    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    Ok(if args.csv {
        from_csv(&text)
    } else {
        from_preview(&text)
    })
}

/// Main event loop
fn run(tui: &mut Tui, screen: Screen) -> Result<()> {
    let size = tui.size()?;
    let mut screen = screen.resize(size.width, size.height);

    while !screen.should_quit() {
        tui.draw(screen.view())?;

        screen = match tui.next_event()? {
            Some(Event::Key(key)) => match key_name(&key) {
                Some(name) => screen.handle_key(&name),
                None => screen,
            },
            Some(Event::Resize(w, h)) => screen.resize(w, h),
            _ => screen,
        };
    }

    Ok(())
}
