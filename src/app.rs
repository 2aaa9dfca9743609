use crate::client::RequestClient;
use crate::config::Config;
use crate::controller::{Controller, Dispatcher, Settings};
use crate::error::AppError;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::LogBuffer;
use crate::state::State;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tokio::sync::Mutex;

/// Oversees the controller thread and terminal output.
///
pub struct App;

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config, logs: LogBuffer) -> Result<()> {
        info!("Starting application against {}...", config.base_url);
        let client = RequestClient::new(&config.base_url, config.request_timeout())?;

        let mut state = State::new(config.submit_endpoint, logs);
        match Theme::from_name(&config.theme_name) {
            Some(theme) => state.set_theme(theme),
            None => warn!(
                "Unknown theme '{}', available: {}",
                config.theme_name,
                Theme::available_themes().join(", ")
            ),
        }
        let state = Arc::new(Mutex::new(state));

        let controller = Controller::new(client, Arc::clone(&state), Settings::from(&config));
        let dispatcher = controller.dispatcher();
        let controller_thread = App::start_controller(controller)?;

        let result = App::start_ui(&state, &dispatcher);

        if dispatcher.shutdown().is_err() {
            debug!("Controller already stopped.");
        }
        if controller_thread.join().is_err() {
            error!("Controller thread panicked.");
        }
        info!("Exiting application...");
        result
    }

    /// Start a separate thread running the controller's event loop.
    ///
    fn start_controller(controller: Controller<State>) -> Result<JoinHandle<()>, AppError> {
        debug!("Creating new thread for the interaction controller...");
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::RuntimeCreation(e.to_string()))?;
        Ok(thread::spawn(move || runtime.block_on(controller.run())))
    }

    /// Run the render loop on the main thread, reading key presses between
    /// frames. Return the result following an exit request or unrecoverable
    /// error, after restoring the terminal.
    ///
    fn start_ui(state: &Arc<Mutex<State>>, dispatcher: &Dispatcher) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = App::ui_loop(&mut terminal, state, dispatcher);

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        result
    }

    fn ui_loop(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        state: &Arc<Mutex<State>>,
        dispatcher: &Dispatcher,
    ) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            {
                let state = state.blocking_lock();
                terminal.draw(|frame| crate::ui::render(frame, &state))?;
            }
            if !terminal_event_handler.handle_next(state, dispatcher)? {
                debug!("Received application exit request.");
                return Ok(());
            }
        }
    }
}
