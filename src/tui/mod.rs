pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

use app::{InputMode, Page};

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    let mut events = EventHandler::new(250); // 250ms tick for flash expiry

    // Main loop: every interaction re-evaluates the model synchronously, so a
    // redraw per event is all there is.
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.update_flash(),
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    ratatui::restore();

    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        InputMode::Normal => {
            match key.code {
                // Quit
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true
                }

                // Input selection
                KeyCode::Char('j') | KeyCode::Down => app.next_field(),
                KeyCode::Char('k') | KeyCode::Up => app.previous_field(),

                // Input adjustment
                KeyCode::Char('h') | KeyCode::Left => app.adjust_selected(-1),
                KeyCode::Char('l') | KeyCode::Right => app.adjust_selected(1),
                KeyCode::Char('H') => app.adjust_selected(-5),
                KeyCode::Char('L') => app.adjust_selected(5),

                // Reset
                KeyCode::Char('d') => app.reset_profile(),

                // Page switching
                KeyCode::Tab => app.next_page(),
                KeyCode::BackTab => app.previous_page(),
                KeyCode::Char('1') => app.go_to_page(Page::Predict),
                KeyCode::Char('2') => app.go_to_page(Page::Simulator),
                KeyCode::Char('3') => app.go_to_page(Page::Analytics),
                KeyCode::Char('4') => app.go_to_page(Page::About),

                // Help
                KeyCode::Char('?') => app.show_help(),

                _ => {}
            }
        }
        InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}
