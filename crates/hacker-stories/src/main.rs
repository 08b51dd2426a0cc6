use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use anyhow::{Context, Result};
use hacker_stories_config::{AppConfig, FileStore};
use hn_search_client::AlgoliaClient;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};

mod actions;
mod background;
mod capabilities;
mod command_id;
mod dispatcher;
mod domain_models;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod utils;
mod view_models;
mod views;

use actions::{Action, BootstrapAction, GlobalAction};
use background::{spawn_background_worker, SharedState};
use middleware::{
    BrowserMiddleware, KeyboardMiddleware, Middleware, SearchMiddleware, TranslationMiddleware,
};
use state::AppState;
use store::Store;

/// How long in-flight requests may take to wind down on exit
const SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(500);

fn main() -> Result<()> {
    match logger::init() {
        Ok(path) => log::info!("Starting hacker-stories, logging to {:?}", path),
        Err(e) => eprintln!("Logging disabled: {:#}", e),
    }

    let app_config = AppConfig::load();
    let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    let client = AlgoliaClient::new(app_config.request_timeout())
        .context("Failed to create search client")?;
    let persistent = FileStore::open(app_config.resolve_store_path()?);

    // Main thread -> worker, and worker -> itself via Dispatcher
    let (action_tx, action_rx) = mpsc::channel();
    // Worker -> main thread, actions to reduce
    let (result_tx, result_rx) = mpsc::channel();

    let initial_state = AppState::new(app_config.clone());
    let shared: SharedState = Arc::new(RwLock::new(initial_state.clone()));
    let mut store = Store::new(initial_state, Arc::clone(&shared));

    // Execution order matters: keys become generic actions, generic actions
    // become view actions, view actions reach the side effects
    let middleware: Vec<Box<dyn Middleware>> = vec![
        Box::new(KeyboardMiddleware::new()),
        Box::new(TranslationMiddleware::new()),
        Box::new(SearchMiddleware::new(
            Arc::new(client),
            Box::new(persistent),
            runtime.handle().clone(),
            &app_config,
        )),
        Box::new(BrowserMiddleware::new(runtime.handle().clone())),
    ];
    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        shared,
        middleware,
    );

    action_tx
        .send(Action::Bootstrap(BootstrapAction::Start))
        .map_err(|_| anyhow::anyhow!("Background worker did not start"))?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_app(&mut terminal, &mut store, &action_tx, &result_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Lets the middleware persist, the worker may already be gone after Ctrl+C
    if action_tx.send(Action::Global(GlobalAction::Quit)).is_err() {
        log::debug!("Background worker already stopped");
    }
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }
    runtime.shutdown_timeout(SHUTDOWN_TIMEOUT);

    log::info!("Exiting hacker-stories");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    action_tx: &Sender<Action>,
    result_rx: &Receiver<Action>,
) -> Result<()> {
    loop {
        while let Ok(action) = result_rx.try_recv() {
            store.apply(&action);
        }

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only key presses, no releases/repeats
                if key.kind == KeyEventKind::Press
                    && action_tx
                        .send(Action::Global(GlobalAction::KeyPressed(key)))
                        .is_err()
                {
                    log::error!("Background worker stopped, exiting");
                    break;
                }
            }
        }
    }

    Ok(())
}
