use alloc::sync::Arc;
use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};
use core::time::Duration;

use crate::{AppPhase, ScrollDirection};

/// Default wait between two automatic steps.
pub const DEFAULT_PAUSE_DURATION_MS: u64 = 3_000;

/// Auto-scroll configuration supplied by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoScrollConfig {
    pub enabled: bool,
    /// Wait between two steps, in milliseconds. Clamped to at least 1.
    pub pause_duration_ms: u64,
    pub direction: ScrollDirection,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pause_duration_ms: DEFAULT_PAUSE_DURATION_MS,
            direction: ScrollDirection::Forward,
        }
    }
}

impl AutoScrollConfig {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_pause_duration_ms(mut self, pause_duration_ms: u64) -> Self {
        self.pause_duration_ms = pause_duration_ms.max(1);
        self
    }

    /// Sets the pause from a `Duration` (sub-millisecond precision is dropped).
    pub fn with_pause_duration(self, pause: Duration) -> Self {
        let ms = u64::try_from(pause.as_millis()).unwrap_or(u64::MAX);
        self.with_pause_duration_ms(ms)
    }

    pub fn with_direction(mut self, direction: ScrollDirection) -> Self {
        self.direction = direction;
        self
    }
}

/// A partial reconfiguration: `None` fields are left unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoScrollUpdate {
    pub enabled: Option<bool>,
    pub pause_duration_ms: Option<u64>,
    pub direction: Option<ScrollDirection>,
    pub allowed: Option<bool>,
}

impl AutoScrollUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn pause_duration_ms(mut self, pause_duration_ms: u64) -> Self {
        self.pause_duration_ms = Some(pause_duration_ms);
        self
    }

    pub fn direction(mut self, direction: ScrollDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn allowed(mut self, allowed: bool) -> Self {
        self.allowed = Some(allowed);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A cooperative cancellation flag shared between a task's owner and its driver.
///
/// Cloning shares the flag. Cancellation is one-way.
#[derive(Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Whether both tokens share the same flag.
    pub fn same_task(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CancellationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CancellationToken")
            .field(&self.is_cancelled())
            .finish()
    }
}

/// A live auto-scroll task: a token plus the deadline of its next wake-up.
#[derive(Clone, Debug)]
pub struct AutoScrollTask {
    id: u64,
    token: CancellationToken,
    next_tick_ms: u64,
}

impl AutoScrollTask {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn next_tick_ms(&self) -> u64 {
        self.next_tick_ms
    }
}

/// Outcome of a run-state evaluation.
#[derive(Clone, Debug)]
pub enum RunStateChange {
    /// Nothing started or stopped.
    Unchanged,
    /// A new task started. Drivers that run tasks out of band (e.g. a worker thread) should
    /// pick it up through this token.
    Started(CancellationToken),
    /// The live task was cancelled.
    Cancelled,
}

impl RunStateChange {
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Owns the periodic auto-scroll task and its start/stop gating.
///
/// A task runs iff `enabled && allowed && foreground` held at the last evaluation. The task body
/// is driven by [`AutoScrollController::poll`]: every time its deadline passes it yields one step
/// in the configured direction and waits `pause_duration_ms` again.
///
/// Time is supplied by the caller (`now_ms`), so the controller works the same under a frame
/// loop, a timer, or a worker thread.
pub struct AutoScrollController {
    config: AutoScrollConfig,
    allowed: bool,
    foreground: bool,
    task: Option<AutoScrollTask>,
    next_task_id: u64,
}

impl Default for AutoScrollController {
    fn default() -> Self {
        Self::new(AutoScrollConfig::default())
    }
}

impl fmt::Debug for AutoScrollController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoScrollController")
            .field("config", &self.config)
            .field("allowed", &self.allowed)
            .field("foreground", &self.foreground)
            .field("task", &self.task)
            .finish_non_exhaustive()
    }
}

impl AutoScrollController {
    /// Creates an idle controller. `allowed` starts out `false` until the host reports a settled
    /// scroll surface.
    pub fn new(config: AutoScrollConfig) -> Self {
        Self {
            config: config.with_pause_duration_ms(config.pause_duration_ms),
            allowed: false,
            foreground: true,
            task: None,
            next_task_id: 0,
        }
    }

    pub fn config(&self) -> AutoScrollConfig {
        self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    pub fn is_foreground(&self) -> bool {
        self.foreground
    }

    pub fn pause_duration_ms(&self) -> u64 {
        self.config.pause_duration_ms
    }

    pub fn direction(&self) -> ScrollDirection {
        self.config.direction
    }

    /// Whether the gating conditions currently call for a running task.
    pub fn should_run(&self) -> bool {
        self.config.enabled && self.allowed && self.foreground
    }

    /// Whether a task is live (present and not cancelled).
    pub fn is_running(&self) -> bool {
        self.live_task().is_some()
    }

    pub fn task(&self) -> Option<&AutoScrollTask> {
        self.live_task()
    }

    pub fn next_tick_ms(&self) -> Option<u64> {
        self.live_task().map(AutoScrollTask::next_tick_ms)
    }

    fn live_task(&self) -> Option<&AutoScrollTask> {
        self.task.as_ref().filter(|t| !t.token.is_cancelled())
    }

    /// Applies the supplied fields, then re-evaluates the run state.
    pub fn reconfigure(&mut self, update: AutoScrollUpdate, now_ms: u64) -> RunStateChange {
        if let Some(enabled) = update.enabled {
            self.config.enabled = enabled;
        }
        if let Some(pause_duration_ms) = update.pause_duration_ms {
            self.config.pause_duration_ms = pause_duration_ms.max(1);
        }
        if let Some(direction) = update.direction {
            self.config.direction = direction;
        }
        if let Some(allowed) = update.allowed {
            self.allowed = allowed;
        }
        ctrace!(?update, config = ?self.config, allowed = self.allowed, "reconfigure");
        self.evaluate_run_state(now_ms)
    }

    /// Replaces the whole configuration, then re-evaluates the run state.
    pub fn set_config(&mut self, config: AutoScrollConfig, now_ms: u64) -> RunStateChange {
        self.config = config.with_pause_duration_ms(config.pause_duration_ms);
        self.evaluate_run_state(now_ms)
    }

    pub fn set_allowed(&mut self, allowed: bool, now_ms: u64) -> RunStateChange {
        self.reconfigure(AutoScrollUpdate::new().allowed(allowed), now_ms)
    }

    /// Starts or stops the task to match the gating conditions.
    ///
    /// Starting is idempotent: a live task is never replaced, so two tickers can never run out
    /// of phase.
    pub fn evaluate_run_state(&mut self, now_ms: u64) -> RunStateChange {
        if !self.should_run() {
            return if self.cancel() {
                RunStateChange::Cancelled
            } else {
                RunStateChange::Unchanged
            };
        }
        if self.is_running() {
            return RunStateChange::Unchanged;
        }

        let token = CancellationToken::new();
        let id = self.next_task_id;
        self.next_task_id = self.next_task_id.wrapping_add(1);
        let next_tick_ms = now_ms.saturating_add(self.config.pause_duration_ms);
        cdebug!(id, now_ms, next_tick_ms, "auto-scroll task started");
        self.task = Some(AutoScrollTask {
            id,
            token: token.clone(),
            next_tick_ms,
        });
        RunStateChange::Started(token)
    }

    /// `Active` re-evaluates (resuming when possible); `Inactive` and `Background` always
    /// cancel.
    pub fn on_app_phase_change(&mut self, phase: AppPhase, now_ms: u64) -> RunStateChange {
        self.foreground = phase.is_foreground();
        ctrace!(?phase, "on_app_phase_change");
        if self.foreground {
            self.evaluate_run_state(now_ms)
        } else if self.cancel() {
            RunStateChange::Cancelled
        } else {
            RunStateChange::Unchanged
        }
    }

    /// Cancels the live task, if any. Returns `true` when a live task was cancelled.
    ///
    /// The gating flags are left untouched: the next evaluation may start a fresh task.
    pub fn cancel(&mut self) -> bool {
        let Some(task) = self.task.take() else {
            return false;
        };
        if task.token.is_cancelled() {
            return false;
        }
        task.token.cancel();
        cdebug!(id = task.id, "auto-scroll task cancelled");
        true
    }

    /// Runs the task body for time `now_ms`.
    ///
    /// Returns the direction of one step when the deadline has passed. The token is checked
    /// before anything else, so a cancelled task ends without producing a step. After a step the
    /// next deadline is `now_ms + pause_duration_ms`, so changes to the pause apply from the next
    /// wait.
    pub fn poll(&mut self, now_ms: u64) -> Option<ScrollDirection> {
        if self.task.as_ref()?.token.is_cancelled() {
            self.task = None;
            return None;
        }
        let pause = self.config.pause_duration_ms;
        let task = self.task.as_mut()?;
        if now_ms < task.next_tick_ms {
            return None;
        }
        task.next_tick_ms = now_ms.saturating_add(pause);
        ctrace!(id = task.id, now_ms, next_tick_ms = task.next_tick_ms, "auto-scroll tick");
        Some(self.config.direction)
    }
}

impl Drop for AutoScrollController {
    fn drop(&mut self) {
        self.cancel();
    }
}
