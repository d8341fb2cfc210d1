use std::error::Error;
use std::io;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use human_panic::setup_panic;
use log::{error, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use protwt::{
    app::Focus,
    cli::Cli,
    logging::{init_logging, log_critical_error, log_shutdown, log_system_info, set_log_level},
    protein::calculate_batch,
    report::{build_table, export_csv, summarize_all},
    sequence::gather_sequences,
    ui::render_ui,
    App,
};

fn main() -> Result<(), Box<dyn Error>> {
    setup_panic!();
    let cli = Cli::parse();

    set_log_level();
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {e}");
    }
    log_system_info();

    let outcome = if cli.batch { run_batch(&cli) } else { run_tui(&cli) };
    if let Err(e) = &outcome {
        log_critical_error(&e.to_string(), Some(if cli.batch { "batch" } else { "tui" }));
    }

    log_shutdown();
    outcome
}

fn run_batch(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let sequences = gather_sequences(
        cli.file.as_deref(),
        cli.sequence.as_deref(),
        cli.format.input_format(),
    )?;
    let reports = calculate_batch(&sequences, &cli.selected_ptms());
    info!("Batch run over {} sequences", reports.len());

    print!("{}", summarize_all(&reports));

    if let Some(path) = &cli.export {
        export_csv(&build_table(&reports), path)?;
        println!("\nSaved {} row(s) to {}", reports.len(), path.display());
    }
    Ok(())
}

fn run_tui(cli: &Cli) -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::from_cli(cli);
    if app.file.is_some() || !app.input.trim().is_empty() {
        app.calculate();
    }

    let result = event_loop(&mut terminal, &mut app);
    if let Err(e) = &result {
        error!("Event loop stopped: {e}");
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(app, key) {
                return Ok(());
            }
        }
    }
}

/// Apply a key press to the app, returning true when the user asked to quit
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') if ctrl => return true,
        KeyCode::Char('s') if ctrl => app.export_results(),
        KeyCode::Char('l') if ctrl => app.clear(),
        KeyCode::Char('u') if ctrl => app.unload_file(),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Enter => app.calculate(),
        KeyCode::Up if app.focus == Focus::Ptms => app.prev_ptm(),
        KeyCode::Down if app.focus == Focus::Ptms => app.next_ptm(),
        KeyCode::PageDown => app.scroll_results_down(),
        KeyCode::PageUp => app.scroll_results_up(),
        KeyCode::Backspace => app.on_backspace(),
        KeyCode::Char(c) if !ctrl => app.on_key(c),
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use protwt::protein::Ptm;

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_key_dispatch() {
        let mut app = App::new();
        for c in "arn".chars() {
            assert!(!press(&mut app, KeyCode::Char(c)));
        }
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input, "arn");
        assert_eq!(app.selected_ptms, vec![Ptm::Acetylation]);
        assert_eq!(app.reports.len(), 1);
        assert!(press(&mut app, KeyCode::Esc));
    }

    #[test]
    fn test_control_keys() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('G'));
        assert!(!handle_key(&mut app, KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL)));
        assert!(app.input.is_empty());
        assert!(handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }
}
