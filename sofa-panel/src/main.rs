//! sofa-panel - filter a sofa catalogue in the terminal
//!
//! # Usage
//!
//! ```sh
//! # Built-in catalogue
//! cargo run -p sofa-panel
//!
//! # Own data, preset filters, print and exit
//! cargo run -p sofa-panel -- --data sofas.json --filter style=Modern --print
//! ```

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sofa_panel::config::{init_logging, Args};
use sofa_panel::ui::PanelUi;
use sofa_panel::{FilterPanel, PanelError};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<(), PanelError> {
    // Setup errors are reported before the terminal is touched
    init_logging(args.log_file.as_deref())?;
    let mut panel = FilterPanel::from_args(args)?;

    if args.print {
        for item in panel.displayed() {
            println!("{item}");
        }
        return Ok(());
    }

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut panel).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(result?)
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    panel: &mut FilterPanel,
) -> io::Result<()> {
    let keymap = panel.runtime().keymap().clone();
    let mut ui = PanelUi::new();

    tracing::info!("Starting panel");
    let result = panel
        .runtime_mut()
        .run(terminal, |frame, area, document, state| {
            ui.render(frame, area, document, state, &keymap);
        })
        .await;
    tracing::info!(state = ?panel.state(), "Panel closed");
    result
}
