use crate::client::{ClearResponse, ClientError, SubmitEndpoint, TaskMap};
use crate::error::AppError;
use tokio::sync::mpsc::UnboundedSender;

/// Specify different controller event types.
///
/// User actions come from the front end through a [`Dispatcher`]; the
/// settled variants are posted back by the controller's own spawned tasks.
///
#[derive(Debug)]
pub enum Event {
    Input(String),
    Submit(String),
    SetEndpoint(SubmitEndpoint),
    Clear,
    RefreshTasks,
    Shutdown,
    SubmitSettled {
        seq: u64,
        endpoint: SubmitEndpoint,
        result: Result<String, ClientError>,
    },
    TasksSettled {
        seq: u64,
        result: Result<TaskMap, ClientError>,
    },
    ClearSettled(Result<ClearResponse, ClientError>),
    AnimationFrame {
        id: u64,
        partial: String,
    },
    AnimationComplete {
        id: u64,
    },
}

/// Cloneable handle for posting events to a running controller.
///
#[derive(Clone, Debug)]
pub struct Dispatcher {
    tx: UnboundedSender<Event>,
}

impl Dispatcher {
    pub(crate) fn new(tx: UnboundedSender<Event>) -> Self {
        Dispatcher { tx }
    }

    pub fn send(&self, event: Event) -> Result<(), AppError> {
        self.tx.send(event).map_err(|_| AppError::ControllerStopped)
    }

    pub fn shutdown(&self) -> Result<(), AppError> {
        self.send(Event::Shutdown)
    }
}
