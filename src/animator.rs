//! Typewriter-style text reveal.
//!
//! An animation is a spawned tokio task that reveals one character per tick.
//! Starting a new animation stops the previous one, so only the most recent
//! text ever reaches the surface.

use log::*;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Specify the delay between revealed characters in milliseconds.
///
pub const DEFAULT_TICK_IN_MS: u64 = 50;

/// Snapshot of an animation's progress.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationState {
    pub full_text: String,
    pub cursor: usize,
    pub is_running: bool,
}

#[derive(Debug)]
struct Progress {
    full_text: String,
    cursor: AtomicUsize,
    running: AtomicBool,
    cancelled: AtomicBool,
}

/// Cheap reference to a started animation.
///
#[derive(Clone, Debug)]
pub struct AnimationHandle {
    id: u64,
    progress: Arc<Progress>,
}

impl AnimationHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_running(&self) -> bool {
        self.progress.running.load(Ordering::SeqCst)
    }

    pub fn state(&self) -> AnimationState {
        AnimationState {
            full_text: self.progress.full_text.clone(),
            cursor: self.progress.cursor.load(Ordering::SeqCst),
            is_running: self.is_running(),
        }
    }
}

pub struct TypingAnimator {
    tick: Duration,
    next_id: u64,
    current: Option<(AnimationHandle, JoinHandle<()>)>,
}

impl TypingAnimator {
    pub fn new(tick: Duration) -> Self {
        TypingAnimator {
            tick,
            next_id: 0,
            current: None,
        }
    }

    /// Start revealing `text`. `on_character` first receives an empty string
    /// to replace whatever the surface showed, then each longer prefix, one
    /// per tick. `on_complete` runs once the whole text is shown; it never
    /// runs for an animation that was stopped. Must be called from within a
    /// tokio runtime.
    ///
    pub fn play<F, C>(&mut self, text: &str, mut on_character: F, on_complete: C) -> AnimationHandle
    where
        F: FnMut(&str) + Send + 'static,
        C: FnOnce() + Send + 'static,
    {
        if let Some((previous, task)) = self.current.take() {
            if previous.is_running() {
                debug!("Preempting animation {}", previous.id);
            }
            previous.progress.cancelled.store(true, Ordering::SeqCst);
            previous.progress.running.store(false, Ordering::SeqCst);
            task.abort();
        }

        self.next_id += 1;
        let progress = Arc::new(Progress {
            full_text: text.to_owned(),
            cursor: AtomicUsize::new(0),
            running: AtomicBool::new(true),
            cancelled: AtomicBool::new(false),
        });
        let handle = AnimationHandle {
            id: self.next_id,
            progress: Arc::clone(&progress),
        };

        on_character("");

        let tick = self.tick;
        let chars: Vec<char> = text.chars().collect();
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + tick, tick);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut partial = String::with_capacity(progress.full_text.len());
            for (index, ch) in chars.into_iter().enumerate() {
                ticker.tick().await;
                if progress.cancelled.load(Ordering::SeqCst) {
                    return;
                }
                partial.push(ch);
                progress.cursor.store(index + 1, Ordering::SeqCst);
                on_character(&partial);
            }
            if progress.cancelled.load(Ordering::SeqCst) {
                return;
            }
            progress.running.store(false, Ordering::SeqCst);
            on_complete();
        });

        self.current = Some((handle.clone(), task));
        handle
    }

    /// Cancel an animation without running its completion callback.
    ///
    pub fn stop(&mut self, handle: &AnimationHandle) {
        handle.progress.cancelled.store(true, Ordering::SeqCst);
        handle.progress.running.store(false, Ordering::SeqCst);
        if let Some((current, task)) = self.current.take() {
            if current.id == handle.id {
                debug!("Stopping animation {}", handle.id);
                task.abort();
            } else {
                self.current = Some((current, task));
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.current
            .as_ref()
            .map_or(false, |(handle, _)| handle.is_running())
    }

    pub fn current(&self) -> Option<&AnimationHandle> {
        self.current.as_ref().map(|(handle, _)| handle)
    }
}

impl Default for TypingAnimator {
    fn default() -> Self {
        TypingAnimator::new(Duration::from_millis(DEFAULT_TICK_IN_MS))
    }
}
