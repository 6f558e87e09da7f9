use crate::timeline::{Timeline, TimerRegistration};
use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

struct SleepState {
    registration: Option<TimerRegistration>,
    fired: bool,
    waker: Option<Waker>,
}

impl SleepState {
    fn new() -> Self {
        Self {
            registration: None,
            fired: false,
            waker: None,
        }
    }
}

/// Future returned by [`Timeline::sleep`].
///
/// The timer is armed on first poll and resolves exactly once. Dropping the
/// future before it fires cancels the timer.
pub struct Sleep {
    timeline: Timeline,
    delay_ms: u64,
    state: Rc<RefCell<SleepState>>,
}

impl Sleep {
    pub(crate) fn new(timeline: Timeline, delay_ms: u64) -> Self {
        Self {
            timeline,
            delay_ms,
            state: Rc::new(RefCell::new(SleepState::new())),
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Absolute due time once the timer has been armed.
    pub fn deadline_ms(&self) -> Option<u64> {
        self.state
            .borrow()
            .registration
            .as_ref()
            .and_then(TimerRegistration::due_ms)
    }
}

impl Future for Sleep {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.delay_ms == 0 || self.state.borrow().fired {
            return Poll::Ready(());
        }

        {
            let mut state = self.state.borrow_mut();
            state.waker = Some(cx.waker().clone());
            if state.registration.is_none() {
                drop(state);
                let state = Rc::downgrade(&self.state);
                let registration = self.timeline.schedule_after(self.delay_ms, move |_| {
                    if let Some(state) = state.upgrade() {
                        let waker = {
                            let mut state = state.borrow_mut();
                            state.fired = true;
                            state.registration.take();
                            state.waker.take()
                        };
                        if let Some(waker) = waker {
                            waker.wake();
                        }
                    }
                });
                self.state.borrow_mut().registration = Some(registration);
            }
        }

        if self.state.borrow().fired {
            Poll::Ready(())
        } else {
            Poll::Pending
        }
    }
}

impl Drop for Sleep {
    fn drop(&mut self) {
        let registration = self.state.borrow_mut().registration.take();
        drop(registration);
    }
}
