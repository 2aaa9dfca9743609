use crate::controller::{Dispatcher, Event as ControllerEvent};
use crate::error::{AppError, AppResult};
use crate::state::State;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};
use tokio::sync::Mutex;

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => (),
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => (),
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    /// Must not be called from within an async context.
    ///
    pub fn handle_next(&self, state: &Mutex<State>, dispatcher: &Dispatcher) -> AppResult<bool> {
        match self
            .rx
            .recv()
            .map_err(|e| AppError::Terminal(e.to_string()))?
        {
            Event::Tick => Ok(true),
            Event::Input(key) => {
                let mut state = state.blocking_lock();
                handle_key(key, &mut state, dispatcher)
            }
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Apply a key press to the screen state and forward the resulting action to
/// the controller.
///
pub fn handle_key(key: KeyEvent, state: &mut State, dispatcher: &Dispatcher) -> AppResult<bool> {
    if key.kind != KeyEventKind::Press {
        return Ok(true);
    }
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return Ok(false);
        }
        (KeyCode::Char('x'), KeyModifiers::CONTROL) => {
            dispatcher.send(ControllerEvent::Clear)?;
        }
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
            dispatcher.send(ControllerEvent::RefreshTasks)?;
        }
        (KeyCode::Tab, _) => {
            let endpoint = state.toggle_endpoint();
            dispatcher.send(ControllerEvent::SetEndpoint(endpoint))?;
        }
        (KeyCode::Enter, _) => {
            if state.is_submit_enabled() {
                dispatcher.send(ControllerEvent::Submit(state.input().to_owned()))?;
            } else {
                debug!("Submit is disabled, ignoring enter.");
            }
        }
        (KeyCode::Backspace, _) => {
            if state.pop_char() {
                dispatcher.send(ControllerEvent::Input(state.input().to_owned()))?;
            }
        }
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            state.push_char(c);
            dispatcher.send(ControllerEvent::Input(state.input().to_owned()))?;
        }
        _ => (),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SubmitEndpoint;
    use crate::logger::LogBuffer;
    use crate::view::SubmitControl;
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

    fn setup() -> (State, Dispatcher, UnboundedReceiver<ControllerEvent>) {
        let (tx, rx) = unbounded_channel();
        let state = State::new(SubmitEndpoint::Process, LogBuffer::default());
        (state, Dispatcher::new(tx), rx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_reports_input() {
        let (mut state, dispatcher, mut rx) = setup();
        handle_key(press(KeyCode::Char('h')), &mut state, &dispatcher).unwrap();
        handle_key(
            KeyEvent::new(KeyCode::Char('I'), KeyModifiers::SHIFT),
            &mut state,
            &dispatcher,
        )
        .unwrap();
        handle_key(press(KeyCode::Backspace), &mut state, &dispatcher).unwrap();

        assert!(matches!(rx.try_recv(), Ok(ControllerEvent::Input(t)) if t == "h"));
        assert!(matches!(rx.try_recv(), Ok(ControllerEvent::Input(t)) if t == "hI"));
        assert!(matches!(rx.try_recv(), Ok(ControllerEvent::Input(t)) if t == "h"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_enter_respects_submit_control() {
        let (mut state, dispatcher, mut rx) = setup();
        state.push_char('a');

        handle_key(press(KeyCode::Enter), &mut state, &dispatcher).unwrap();
        assert!(rx.try_recv().is_err());

        state.set_submit_enabled(true);
        handle_key(press(KeyCode::Enter), &mut state, &dispatcher).unwrap();
        assert!(matches!(rx.try_recv(), Ok(ControllerEvent::Submit(t)) if t == "a"));
    }

    #[test]
    fn test_shortcuts() {
        let (mut state, dispatcher, mut rx) = setup();
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);

        handle_key(ctrl('x'), &mut state, &dispatcher).unwrap();
        handle_key(ctrl('r'), &mut state, &dispatcher).unwrap();
        handle_key(press(KeyCode::Tab), &mut state, &dispatcher).unwrap();
        assert!(matches!(rx.try_recv(), Ok(ControllerEvent::Clear)));
        assert!(matches!(rx.try_recv(), Ok(ControllerEvent::RefreshTasks)));
        assert!(matches!(
            rx.try_recv(),
            Ok(ControllerEvent::SetEndpoint(SubmitEndpoint::Events))
        ));

        assert!(!handle_key(ctrl('c'), &mut state, &dispatcher).unwrap());
        assert!(!handle_key(press(KeyCode::Esc), &mut state, &dispatcher).unwrap());
    }

    #[test]
    fn test_stopped_controller_is_an_error() {
        let (mut state, dispatcher, rx) = setup();
        drop(rx);
        let result = handle_key(press(KeyCode::Char('a')), &mut state, &dispatcher);
        assert!(matches!(result, Err(AppError::ControllerStopped)));
    }
}
