use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use carousel::{CancellationToken, Carousel};

use crate::Clock;

pub(crate) fn lock(shared: &Mutex<Carousel>) -> MutexGuard<'_, Carousel> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A background thread driving one auto-scroll task.
///
/// The worker sleeps until the task's deadline, checks its token right after waking, then ticks
/// the carousel under its mutex. It exits as soon as the token is cancelled or the carousel no
/// longer runs its task. Dropping the worker cancels the token and joins the thread.
#[derive(Debug)]
pub struct AutoScrollWorker {
    token: CancellationToken,
    thread: Option<JoinHandle<()>>,
}

impl AutoScrollWorker {
    /// Spawns a worker for the task identified by `token`.
    pub fn spawn(shared: Arc<Mutex<Carousel>>, token: CancellationToken, clock: Clock) -> Self {
        let thread = thread::Builder::new()
            .name("carousel-auto-scroll".into())
            .spawn({
                let token = token.clone();
                move || run(&shared, &token, clock)
            });
        let thread = match thread {
            Ok(thread) => Some(thread),
            Err(_err) => {
                awarn!(error = %_err, "failed to spawn auto-scroll worker");
                None
            }
        };
        Self { token, thread }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Whether the worker thread is still alive.
    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Cancels the task, wakes the thread and waits for it to exit.
    pub fn stop(&mut self) {
        self.token.cancel();
        let Some(thread) = self.thread.take() else {
            return;
        };
        if thread.thread().id() == thread::current().id() {
            // Stopped from inside a tick callback: the loop exits on its own.
            return;
        }
        thread.thread().unpark();
        if thread.join().is_err() {
            awarn!("auto-scroll worker panicked");
        }
    }
}

impl Drop for AutoScrollWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run(shared: &Mutex<Carousel>, token: &CancellationToken, clock: Clock) {
    adebug!("auto-scroll worker started");
    loop {
        let deadline = {
            let c = lock(shared);
            match c.auto_scroll().task() {
                Some(task) if task.token().same_task(token) => task.next_tick_ms(),
                _ => break,
            }
        };

        if !sleep_until(deadline, token, clock) {
            break;
        }

        let mut c = lock(shared);
        if token.is_cancelled() {
            break;
        }
        let now_ms = clock.now_ms();
        if let Some(_position) = c.tick(now_ms) {
            atrace!(position = _position, now_ms, "worker tick");
        }
    }
    adebug!("auto-scroll worker stopped");
}

/// Parks until `deadline_ms`. Returns `false` if the token was cancelled meanwhile.
fn sleep_until(deadline_ms: u64, token: &CancellationToken, clock: Clock) -> bool {
    loop {
        if token.is_cancelled() {
            return false;
        }
        let now_ms = clock.now_ms();
        if now_ms >= deadline_ms {
            return true;
        }
        thread::park_timeout(Duration::from_millis(deadline_ms - now_ms));
    }
}
