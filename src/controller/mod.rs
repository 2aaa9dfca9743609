//! Interaction controller.
//!
//! Owns the submission state machine (`Idle` -> `AwaitingResponse` ->
//! `Animating` -> `Idle`) and coordinates the input gate, the request client,
//! the typing animator and the task list. Events are handled one at a time
//! from a single channel, so the view is only ever mutated from here.

mod event;

pub use event::{Dispatcher, Event};

use crate::animator::TypingAnimator;
use crate::client::{ClearResponse, ClientError, RequestClient, SubmitEndpoint, TaskMap};
use crate::config::Config;
use crate::gate::InputGate;
use crate::view::{TaskListView, View};
use log::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Text revealed in place of any failed submission.
///
pub const FALLBACK_MESSAGE: &str = "An error occurred. Please try again.";

/// Specifying the submission cycle phases.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Phase {
    Idle,
    AwaitingResponse,
    Animating,
}

/// Tunables the controller takes from configuration.
///
#[derive(Clone, Debug)]
pub struct Settings {
    pub endpoint: SubmitEndpoint,
    pub typing_tick: Duration,
    pub max_input_length: usize,
    pub enforce_input_limit: bool,
    pub task_poll_interval: Option<Duration>,
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Settings {
            endpoint: config.submit_endpoint,
            typing_tick: config.typing_tick(),
            max_input_length: config.max_input_length,
            enforce_input_limit: config.enforce_input_limit,
            task_poll_interval: config.task_poll_interval(),
        }
    }
}

pub struct Controller<V: View> {
    client: RequestClient,
    view: Arc<Mutex<V>>,
    gate: InputGate,
    animator: TypingAnimator,
    endpoint: SubmitEndpoint,
    phase: Phase,
    submit_seq: u64,
    task_seq: u64,
    animation_seq: u64,
    animation_id: Option<u64>,
    task_poll_interval: Option<Duration>,
    tx: UnboundedSender<Event>,
    rx: UnboundedReceiver<Event>,
}

impl<V: View> Controller<V> {
    /// Return new instance driving the given view.
    ///
    pub fn new(client: RequestClient, view: Arc<Mutex<V>>, settings: Settings) -> Self {
        let (tx, rx) = unbounded_channel();
        Controller {
            client,
            view,
            gate: InputGate::new(settings.max_input_length, settings.enforce_input_limit),
            animator: TypingAnimator::new(settings.typing_tick),
            endpoint: settings.endpoint,
            phase: Phase::Idle,
            submit_seq: 0,
            task_seq: 0,
            animation_seq: 0,
            animation_id: None,
            task_poll_interval: settings.task_poll_interval,
            tx,
            rx,
        }
    }

    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.tx.clone())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Process events until a shutdown request arrives.
    ///
    pub async fn run(mut self) {
        info!("Starting interaction controller...");
        self.start().await;
        let poller = self.start_polling();
        while let Some(event) = self.rx.recv().await {
            if matches!(event, Event::Shutdown) {
                debug!("Received controller shutdown request.");
                break;
            }
            self.handle(event).await;
        }
        if let Some(poller) = poller {
            poller.abort();
        }
        info!("Interaction controller stopped.");
    }

    /// Put the view into its initial state and fetch the task list.
    ///
    async fn start(&mut self) {
        {
            let mut view = self.view.lock().await;
            view.show_counter(&self.gate.on_input(""), false);
            view.set_submit_enabled(true);
        }
        self.refresh_tasks();
    }

    fn start_polling(&self) -> Option<JoinHandle<()>> {
        let period = self.task_poll_interval?;
        debug!("Polling task list every {:?}", period);
        let tx = self.tx.clone();
        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                ticker.tick().await;
                if tx.send(Event::RefreshTasks).is_err() {
                    break;
                }
            }
        }))
    }

    /// Handle a single event by type.
    ///
    pub async fn handle(&mut self, event: Event) {
        match event {
            Event::Input(text) => self.input(&text).await,
            Event::Submit(text) => self.submit(text).await,
            Event::SetEndpoint(endpoint) => {
                info!("Submitting to /{} from now on.", endpoint.path());
                self.endpoint = endpoint;
            }
            Event::Clear => self.clear(),
            Event::RefreshTasks => self.refresh_tasks(),
            Event::Shutdown => (),
            Event::SubmitSettled {
                seq,
                endpoint,
                result,
            } => self.submit_settled(seq, endpoint, result).await,
            Event::TasksSettled { seq, result } => self.tasks_settled(seq, result).await,
            Event::ClearSettled(result) => self.clear_settled(result),
            Event::AnimationFrame { id, partial } => {
                if self.animation_id == Some(id) {
                    self.view.lock().await.show_response(&partial);
                }
            }
            Event::AnimationComplete { id } => self.animation_complete(id).await,
        }
    }

    async fn input(&mut self, text: &str) {
        let counter = self.gate.on_input(text);
        let over_limit = self.gate.exceeds(text);
        self.view.lock().await.show_counter(&counter, over_limit);
    }

    /// Start a submission cycle. The submit control stays disabled until the
    /// revealed response finishes.
    ///
    async fn submit(&mut self, text: String) {
        if self.phase != Phase::Idle {
            debug!("Ignoring submission while {:?}.", self.phase);
            return;
        }
        if text.trim().is_empty() {
            debug!("Ignoring empty submission.");
            return;
        }
        let text = self.gate.prepare_submission(&text);
        {
            let mut view = self.view.lock().await;
            view.clear_input();
            view.show_counter(&self.gate.on_input(""), false);
            view.set_submit_enabled(false);
        }
        self.phase = Phase::AwaitingResponse;
        self.submit_seq += 1;

        let seq = self.submit_seq;
        let endpoint = self.endpoint;
        let client = self.client.clone();
        let tx = self.tx.clone();
        info!("Sending request {} to /{}...", seq, endpoint.path());
        tokio::spawn(async move {
            let result = client.submit_text(endpoint, &text).await;
            if tx
                .send(Event::SubmitSettled {
                    seq,
                    endpoint,
                    result,
                })
                .is_err()
            {
                debug!("Controller stopped before request {} settled.", seq);
            }
        });
    }

    async fn submit_settled(
        &mut self,
        seq: u64,
        endpoint: SubmitEndpoint,
        result: Result<String, ClientError>,
    ) {
        if seq != self.submit_seq || self.phase != Phase::AwaitingResponse {
            debug!("Discarding stale response for request {}.", seq);
            return;
        }
        let text = match result {
            Ok(text) => {
                info!("Received response for request {}.", seq);
                if endpoint.mutates_tasks() {
                    self.refresh_tasks();
                }
                text
            }
            Err(e) => {
                error!("Request {} to /{} failed: {}", seq, endpoint.path(), e);
                FALLBACK_MESSAGE.to_string()
            }
        };
        self.phase = Phase::Animating;
        self.animate(&text);
    }

    fn animate(&mut self, text: &str) {
        self.animation_seq += 1;
        let id = self.animation_seq;
        self.animation_id = Some(id);

        let frame_tx = self.tx.clone();
        let complete_tx = self.tx.clone();
        self.animator.play(
            text,
            move |partial| {
                let _ = frame_tx.send(Event::AnimationFrame {
                    id,
                    partial: partial.to_owned(),
                });
            },
            move || {
                let _ = complete_tx.send(Event::AnimationComplete { id });
            },
        );
    }

    async fn animation_complete(&mut self, id: u64) {
        if self.animation_id != Some(id) || self.phase != Phase::Animating {
            debug!("Discarding completion of animation {}.", id);
            return;
        }
        self.animation_id = None;
        self.phase = Phase::Idle;
        self.view.lock().await.set_submit_enabled(true);
    }

    /// Fetch the task list. Any fetch still in flight becomes stale.
    ///
    fn refresh_tasks(&mut self) {
        self.task_seq += 1;
        let seq = self.task_seq;
        let client = self.client.clone();
        let tx = self.tx.clone();
        debug!("Fetching task list ({})...", seq);
        tokio::spawn(async move {
            let result = client.list_tasks().await;
            if tx.send(Event::TasksSettled { seq, result }).is_err() {
                debug!("Controller stopped before task fetch {} settled.", seq);
            }
        });
    }

    async fn tasks_settled(&mut self, seq: u64, result: Result<TaskMap, ClientError>) {
        if seq != self.task_seq {
            debug!("Discarding stale task list ({}).", seq);
            return;
        }
        let content = match result {
            Ok(tasks) => {
                debug!("Rendering {} tasks.", tasks.len());
                TaskListView::render(&tasks)
            }
            Err(e) => {
                error!("Failed to fetch tasks: {}", e);
                TaskListView::render_error()
            }
        };
        self.view.lock().await.show_tasks(content);
    }

    /// Ask the backend to clear tasks. Only a successful clear supersedes
    /// fetches already in flight, through the refresh it triggers.
    ///
    fn clear(&mut self) {
        info!("Clearing tasks...");
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.clear_tasks().await;
            if tx.send(Event::ClearSettled(result)).is_err() {
                debug!("Controller stopped before clear settled.");
            }
        });
    }

    fn clear_settled(&mut self, result: Result<ClearResponse, ClientError>) {
        match result {
            Ok(response) => {
                info!(
                    "Tasks cleared: {}",
                    response.message.as_deref().unwrap_or("no message")
                );
                self.refresh_tasks();
            }
            Err(e) => error!("Failed to clear tasks: {}", e),
        }
    }
}
