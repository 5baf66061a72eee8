use bookpedia::app::{
    intercept_back, App, AppMessage, BookDetailAction, BookDetailViewModel,
    InMemoryBookDetailViewModel, StateSubscription, StaticDescriptionSource,
};
use bookpedia::error::BookpediaError;
use bookpedia::i18n::Strings;
use bookpedia::input::{mouse_command, KeybindingConfig};
use bookpedia::models::Book;
use bookpedia::startup::{init_logging, parse_args, CliCommand, StartupConfig, USAGE};
use bookpedia::terminal::{setup_panic_hook, TerminalManager};
use bookpedia::ui;

use color_eyre::{Report, Result};
use crossterm::event::{Event, EventStream, KeyEventKind, MouseButton, MouseEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Frame tick for animations
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let config = match parse_args(std::env::args()) {
        Ok(CliCommand::Version) => {
            println!("bookpedia {}", VERSION);
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(CliCommand::Run(config)) => config.with_env(|name| std::env::var(name).ok()),
        Err(e) => {
            eprintln!("Error: {}\n", e);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    color_eyre::install()?;

    let log_path = config.resolved_log_path();
    if let Err(e) = init_logging(&log_path) {
        eprintln!("Warning: logging disabled ({}): {}", log_path.display(), e);
    }

    let strings = match &config.strings_path {
        Some(path) => Strings::load(path).map_err(explain)?,
        None => Strings::english(),
    };
    let book = match &config.book_path {
        Some(path) => Book::load(path).map_err(explain)?,
        None => Book::sample(),
    };

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config, strings, book))
}

/// Lead the report with the user-facing message; the cause chain follows.
fn explain(error: BookpediaError) -> Report {
    let message = error.user_message();
    Report::new(error).wrap_err(message)
}

async fn run(config: StartupConfig, strings: Strings, book: Book) -> Result<()> {
    // A listing carries no description; it arrives through the fetch.
    let mut descriptions = StaticDescriptionSource::new().with_delay(config.description_delay);
    let listing = match book.description.clone() {
        Some(text) => {
            descriptions = descriptions.with_description(book.id.clone(), text);
            book.with_description(None)
        }
        None => book,
    };

    let view_model: Arc<dyn BookDetailViewModel> = Arc::new(
        InMemoryBookDetailViewModel::with_book(listing, Arc::new(descriptions)),
    );
    if config.start_favorite {
        view_model.on_action(BookDetailAction::OnFavoriteClick);
    }

    let (message_tx, mut message_rx) = mpsc::unbounded_channel();

    let nav_tx = message_tx.clone();
    let target = Arc::clone(&view_model);
    let dispatch = intercept_back(
        move || {
            let _ = nav_tx.send(AppMessage::NavigatedBack);
        },
        move |action| target.on_action(action),
    );
    let mut app = App::new(strings, Box::new(dispatch));

    let _subscription = StateSubscription::forward_to(view_model.state(), message_tx);

    let mut manager = TerminalManager::new()?;
    let result = run_app(manager.terminal(), &mut app, &mut message_rx).await;
    manager.restore();

    tracing::info!("Exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    message_rx: &mut mpsc::UnboundedReceiver<AppMessage>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let keybindings = KeybindingConfig::default();
    let mut event_stream = EventStream::new();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &app.view, &mut app.ui))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => app.tick(),

            Some(message) = message_rx.recv() => app.handle_message(message),

            event = event_stream.next() => match event {
                Some(Ok(event)) => handle_event(app, &keybindings, event),
                Some(Err(e)) => tracing::warn!("Terminal event error: {}", e),
                None => return Ok(()),
            },
        }
    }
}

fn handle_event(app: &mut App, keybindings: &KeybindingConfig, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if let Some(command) = keybindings.resolve(&key) {
                app.handle_command(command);
            }
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => app.handle_click(mouse.column, mouse.row),
            MouseEventKind::Moved => app.handle_mouse_move(mouse.column, mouse.row),
            _ => {
                if let Some(command) = mouse_command(&mouse) {
                    app.handle_command(command);
                }
            }
        },
        Event::Resize(_, _) => app.mark_dirty(),
        _ => {}
    }
}
