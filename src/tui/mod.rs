pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::controller::FeedController;

use self::app::TuiApp;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    // One controller per visit; dropped when the viewer closes.
    let controller = Arc::new(ctx.feed_controller());
    let mut tui_app = TuiApp::new();
    let event_handler = EventHandler::new(Duration::from_millis(100));

    spawn_first_page(&controller);

    loop {
        let state = controller.snapshot();
        tui_app.clamp(state.items.len());
        terminal.draw(|frame| layout::render(frame, &tui_app, &state))?;

        match event_handler.next()? {
            AppEvent::Key(key) => match Action::from(key) {
                Action::Quit => {
                    tui_app.should_quit = true;
                }
                Action::MoveUp => {
                    tui_app.move_up();
                }
                Action::MoveDown => {
                    tui_app.move_down(state.items.len());
                    if tui_app.end_reached(state.items.len()) {
                        spawn_next_page(&controller);
                    }
                }
                Action::ScrollToTop => {
                    tui_app.scroll_to_top();
                }
                Action::Refresh => {
                    if !state.is_error() {
                        tui_app.scroll_to_top();
                        spawn_first_page(&controller);
                    }
                }
                Action::DismissError => {
                    controller.dismiss_error();
                }
                Action::None => {}
            },
            AppEvent::Tick => {}
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

fn spawn_first_page(controller: &Arc<FeedController>) {
    let controller = controller.clone();
    tokio::spawn(async move { controller.load_first_page().await });
}

fn spawn_next_page(controller: &Arc<FeedController>) {
    let controller = controller.clone();
    tokio::spawn(async move { controller.load_next_page().await });
}
