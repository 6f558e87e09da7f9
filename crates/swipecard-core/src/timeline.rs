//! Virtual-time timeline with one-shot timers and a local task runner.
//!
//! Everything runs on the host's UI thread. The host owns the notion of
//! "now" and pushes it forward with [`Timeline::advance_to`]; timers due at or
//! before that instant fire in due order (ties in scheduling order), and any
//! local task woken by a timer is polled before the next timer fires.

use crate::sleep::Sleep;
use futures_task::ArcWake;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::{Rc, Weak};
use std::sync::{Arc, Mutex};
use std::task::Context;

pub type TimerId = u64;
pub type TaskId = u64;

type TimerKey = (u64, TimerId);
type TimerCallback = Box<dyn FnOnce(u64)>;
type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

#[derive(Default)]
pub(crate) struct TimelineInner {
    now_ms: u64,
    next_timer_id: TimerId,
    timers: BTreeMap<TimerKey, TimerCallback>,
    next_task_id: TaskId,
    tasks: FxHashMap<TaskId, LocalTask>,
    /// Tasks currently taken out of `tasks` to be polled.
    polling: FxHashSet<TaskId>,
    /// Tasks cancelled while they were being polled.
    cancelled: FxHashSet<TaskId>,
    draining: bool,
}

/// Ids of tasks whose wakers fired. Wakers must be `Send + Sync`, so this
/// queue lives outside the `Rc<RefCell<_>>`.
type WakeQueue = Arc<Mutex<Vec<TaskId>>>;
type WokenBatch = SmallVec<[TaskId; 4]>;

struct TaskWaker {
    id: TaskId,
    queue: WakeQueue,
}

impl ArcWake for TaskWaker {
    fn wake_by_ref(arc_self: &Arc<Self>) {
        if let Ok(mut queue) = arc_self.queue.lock() {
            queue.push(arc_self.id);
        }
    }
}

#[derive(Clone, Default)]
pub struct Timeline {
    inner: Rc<RefCell<TimelineInner>>,
    woken: WakeQueue,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now_millis(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Schedules `callback` to run once, `delay_ms` after the current time.
    ///
    /// Dropping the returned registration cancels the timer.
    pub fn schedule_after(
        &self,
        delay_ms: u64,
        callback: impl FnOnce(u64) + 'static,
    ) -> TimerRegistration {
        let due = self.now_millis().saturating_add(delay_ms);
        self.schedule_at(due, callback)
    }

    /// Schedules `callback` at an absolute time. Times in the past fire on the
    /// next advance.
    pub fn schedule_at(
        &self,
        due_ms: u64,
        callback: impl FnOnce(u64) + 'static,
    ) -> TimerRegistration {
        let key = {
            let mut inner = self.inner.borrow_mut();
            let due = due_ms.max(inner.now_ms);
            let id = inner.next_timer_id;
            inner.next_timer_id += 1;
            inner.timers.insert((due, id), Box::new(callback));
            (due, id)
        };
        TimerRegistration {
            timeline: Rc::downgrade(&self.inner),
            key: Some(key),
        }
    }

    /// Time of the earliest pending timer, for hosts that sleep until then.
    pub fn next_due(&self) -> Option<u64> {
        self.inner.borrow().timers.keys().next().map(|(due, _)| *due)
    }

    pub fn pending_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    pub fn advance_by(&self, delta_ms: u64) {
        let target = self.now_millis().saturating_add(delta_ms);
        self.advance_to(target);
    }

    /// Moves time forward to `target_ms`, firing every timer due on the way.
    ///
    /// Time never runs backwards: a target earlier than now only runs
    /// already-due timers and woken tasks.
    pub fn advance_to(&self, target_ms: u64) {
        self.run_until_stalled();
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let key = inner.timers.keys().next().copied();
                match key {
                    Some(key) if key.0 <= target_ms => {
                        inner.now_ms = inner.now_ms.max(key.0);
                        inner.timers.remove(&key).map(|callback| (key.0, callback))
                    }
                    _ => None,
                }
            };
            let Some((due, callback)) = next else {
                break;
            };
            callback(due);
            self.run_until_stalled();
        }
        let mut inner = self.inner.borrow_mut();
        inner.now_ms = inner.now_ms.max(target_ms);
    }

    /// Returns a future that completes once `delay_ms` of timeline time has
    /// passed since it was first polled.
    pub fn sleep(&self, delay_ms: u64) -> Sleep {
        Sleep::new(self.clone(), delay_ms)
    }

    /// Spawns a future on the timeline's local runner and polls it right away.
    pub fn spawn_local(&self, future: impl Future<Output = ()> + 'static) -> TaskHandle {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_task_id;
            inner.next_task_id += 1;
            inner.tasks.insert(id, Box::pin(future));
            id
        };
        self.wake(id);
        self.run_until_stalled();
        TaskHandle {
            id,
            timeline: Rc::downgrade(&self.inner),
        }
    }

    /// Number of tasks that have not completed or been cancelled.
    pub fn active_tasks(&self) -> usize {
        let inner = self.inner.borrow();
        inner.tasks.len() + inner.polling.len()
    }

    /// Polls woken tasks until none are left. Re-entrant calls return
    /// immediately; the outer drain picks up their work.
    pub fn run_until_stalled(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.draining {
                return;
            }
            inner.draining = true;
        }

        loop {
            let woken = self.take_woken();
            if woken.is_empty() {
                break;
            }
            for id in woken {
                self.poll_task(id);
            }
        }

        self.inner.borrow_mut().draining = false;
    }

    fn poll_task(&self, id: TaskId) {
        let task = {
            let mut inner = self.inner.borrow_mut();
            let task = inner.tasks.remove(&id);
            if task.is_some() {
                inner.polling.insert(id);
            }
            task
        };
        let Some(mut task) = task else {
            return;
        };

        let waker = futures_task::waker(Arc::new(TaskWaker {
            id,
            queue: Arc::clone(&self.woken),
        }));
        let mut cx = Context::from_waker(&waker);
        let poll = task.as_mut().poll(&mut cx);

        let finished = {
            let mut inner = self.inner.borrow_mut();
            inner.polling.remove(&id);
            let cancelled = inner.cancelled.remove(&id);
            if poll.is_pending() && !cancelled {
                inner.tasks.insert(id, task);
                None
            } else {
                Some(task)
            }
        };
        if finished.is_some() {
            log::trace!("timeline task {id} retired");
        }
        // Dropping a task may cancel timers, which needs the borrow released.
        drop(finished);
    }

    fn wake(&self, id: TaskId) {
        if let Ok(mut queue) = self.woken.lock() {
            queue.push(id);
        }
    }

    fn take_woken(&self) -> WokenBatch {
        match self.woken.lock() {
            Ok(mut queue) => queue.drain(..).collect(),
            Err(_) => WokenBatch::new(),
        }
    }
}

/// Keeps a scheduled timer alive. Dropping it cancels the timer.
pub struct TimerRegistration {
    timeline: Weak<RefCell<TimelineInner>>,
    key: Option<TimerKey>,
}

impl TimerRegistration {
    pub fn cancel(mut self) {
        self.cancel_inner();
    }

    /// True until the timer fires or is cancelled.
    pub fn is_pending(&self) -> bool {
        match (self.key, self.timeline.upgrade()) {
            (Some(key), Some(inner)) => inner.borrow().timers.contains_key(&key),
            _ => false,
        }
    }

    /// Absolute time the timer is due at.
    pub fn due_ms(&self) -> Option<u64> {
        self.key.map(|(due, _)| due)
    }

    fn cancel_inner(&mut self) {
        let Some(key) = self.key.take() else {
            return;
        };
        let Some(inner) = self.timeline.upgrade() else {
            return;
        };
        let removed = match inner.try_borrow_mut() {
            Ok(mut inner) => inner.timers.remove(&key),
            Err(_) => {
                log::debug!("timer {:?} cancelled while timeline busy; left to expire", key);
                None
            }
        };
        drop(removed);
    }
}

impl Drop for TimerRegistration {
    fn drop(&mut self) {
        self.cancel_inner();
    }
}

/// Handle to a task spawned with [`Timeline::spawn_local`].
///
/// Dropping the handle detaches the task; use [`TaskHandle::cancel`] to stop it.
#[derive(Clone)]
pub struct TaskHandle {
    id: TaskId,
    timeline: Weak<RefCell<TimelineInner>>,
}

impl TaskHandle {
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Stops the task. Its future is dropped without being polled again.
    pub fn cancel(&self) {
        let Some(inner) = self.timeline.upgrade() else {
            return;
        };
        let removed = {
            let mut inner = inner.borrow_mut();
            let removed = inner.tasks.remove(&self.id);
            if removed.is_none() && inner.polling.contains(&self.id) {
                inner.cancelled.insert(self.id);
            }
            removed
        };
        drop(removed);
    }

    pub fn is_active(&self) -> bool {
        self.timeline.upgrade().is_some_and(|inner| {
            let inner = inner.borrow();
            inner.tasks.contains_key(&self.id)
                || (inner.polling.contains(&self.id) && !inner.cancelled.contains(&self.id))
        })
    }
}

#[cfg(test)]
#[path = "tests/timeline_tests.rs"]
mod tests;
