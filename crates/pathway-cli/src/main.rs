use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use pathway_config::Config;
use pathway_engine::{Session, View};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io::stdout, process};

mod app;
mod ui;

use app::App;
use ui::ui;

fn main() -> Result<()> {
    // Quiet unless RUST_LOG is set, so log lines don't tear the screen
    env_logger::Builder::from_default_env().init();

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", Config::config_path().display());
            process::exit(1);
        }
    };

    let mut session = Session::with_sample();
    if let Some(name) = &config.default_category {
        session.set_default_category(name.clone());
    }
    if config.start_in_viewer {
        session.generate();
    }
    log::info!("pathway starting up");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match app.session.view() {
                View::Editing => {
                    if key.modifiers.contains(KeyModifiers::CONTROL) {
                        match key.code {
                            KeyCode::Char('q') => return Ok(()),
                            KeyCode::Char('g') => app.generate(),
                            _ => {}
                        }
                    } else {
                        match key.code {
                            KeyCode::Tab => app.session.toggle_view(),
                            KeyCode::Enter => app.insert_newline(),
                            KeyCode::Backspace => app.backspace(),
                            KeyCode::Left => app.move_left(),
                            KeyCode::Right => app.move_right(),
                            KeyCode::Up => app.move_up(),
                            KeyCode::Down => app.move_down(),
                            KeyCode::Home => app.move_home(),
                            KeyCode::End => app.move_end(),
                            KeyCode::Char(c) => app.insert_char(c),
                            _ => {}
                        }
                    }
                }
                View::Viewing => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Tab | KeyCode::Char('e') => app.session.toggle_view(),
                    KeyCode::Down | KeyCode::Char('j') => app.next_topic(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous_topic(),
                    KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
                    _ => {}
                },
            }
        }
    }
}
