use super::*;

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::pin;
use std::rc::Rc;
use std::task::{Context, Poll};

#[test]
fn timers_fire_in_due_order() {
    let timeline = Timeline::new();
    let fired = Rc::new(RefCell::new(Vec::new()));

    let mut registrations = Vec::new();
    for (delay, label) in [(30, "c"), (10, "a"), (20, "b"), (10, "a2")] {
        let fired = Rc::clone(&fired);
        registrations.push(timeline.schedule_after(delay, move |time| {
            fired.borrow_mut().push((label, time));
        }));
    }

    timeline.advance_to(25);
    assert_eq!(*fired.borrow(), vec![("a", 10), ("a2", 10), ("b", 20)]);
    assert_eq!(timeline.now_millis(), 25);
    assert_eq!(timeline.next_due(), Some(30));

    timeline.advance_by(5);
    assert_eq!(fired.borrow().last(), Some(&("c", 30)));
    assert_eq!(timeline.pending_timers(), 0);
}

#[test]
fn timer_fires_exactly_once() {
    let timeline = Timeline::new();
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);
    let registration = timeline.schedule_after(5, move |_| counter.set(counter.get() + 1));

    timeline.advance_to(5);
    timeline.advance_to(50);
    timeline.advance_to(500);

    assert_eq!(count.get(), 1);
    assert!(!registration.is_pending());
}

#[test]
fn dropping_registration_cancels_timer() {
    let timeline = Timeline::new();
    let count = Rc::new(Cell::new(0));
    {
        let counter = Rc::clone(&count);
        let _registration = timeline.schedule_after(5, move |_| counter.set(1));
    }
    let counter = Rc::clone(&count);
    timeline
        .schedule_after(5, move |_| counter.set(counter.get() + 10))
        .cancel();

    timeline.advance_by(10);
    assert_eq!(count.get(), 0);
    assert_eq!(timeline.pending_timers(), 0);
}

#[test]
fn time_never_runs_backwards() {
    let timeline = Timeline::new();
    timeline.advance_to(100);
    timeline.advance_to(40);
    assert_eq!(timeline.now_millis(), 100);

    let registration = timeline.schedule_at(10, |_| {});
    assert_eq!(registration.due_ms(), Some(100));
}

#[test]
fn timer_scheduled_from_callback_fires_in_same_advance() {
    let timeline = Timeline::new();
    let fired = Rc::new(Cell::new(None));
    let keep = Rc::new(RefCell::new(None));

    let inner_timeline = timeline.clone();
    let inner_fired = Rc::clone(&fired);
    let inner_keep = Rc::clone(&keep);
    let _outer = timeline.schedule_after(10, move |_| {
        let fired = Rc::clone(&inner_fired);
        let registration = inner_timeline.schedule_after(5, move |time| fired.set(Some(time)));
        *inner_keep.borrow_mut() = Some(registration);
    });

    timeline.advance_to(20);
    assert_eq!(fired.get(), Some(15));
}

#[test]
fn sleep_resolves_after_delay() {
    let timeline = Timeline::new();
    let waker = futures_task::noop_waker();
    let mut cx = Context::from_waker(&waker);

    let mut sleep = pin!(timeline.sleep(40));
    assert_eq!(sleep.as_mut().poll(&mut cx), Poll::Pending);
    assert_eq!(sleep.deadline_ms(), Some(40));

    timeline.advance_to(39);
    assert_eq!(sleep.as_mut().poll(&mut cx), Poll::Pending);

    timeline.advance_to(40);
    assert_eq!(sleep.as_mut().poll(&mut cx), Poll::Ready(()));
}

#[test]
fn zero_sleep_is_immediately_ready() {
    let timeline = Timeline::new();
    let waker = futures_task::noop_waker();
    let mut cx = Context::from_waker(&waker);
    let mut sleep = pin!(timeline.sleep(0));
    assert_eq!(sleep.as_mut().poll(&mut cx), Poll::Ready(()));
    assert_eq!(timeline.pending_timers(), 0);
}

#[test]
fn dropped_sleep_cancels_its_timer() {
    let timeline = Timeline::new();
    let waker = futures_task::noop_waker();
    let mut cx = Context::from_waker(&waker);
    {
        let mut sleep = Box::pin(timeline.sleep(10));
        assert_eq!(sleep.as_mut().poll(&mut cx), Poll::Pending);
        assert_eq!(timeline.pending_timers(), 1);
    }
    assert_eq!(timeline.pending_timers(), 0);
}

#[test]
fn spawned_task_resumes_after_each_sleep() {
    let timeline = Timeline::new();
    let steps = Rc::new(RefCell::new(Vec::new()));

    let task_timeline = timeline.clone();
    let task_steps = Rc::clone(&steps);
    let handle = timeline.spawn_local(async move {
        task_steps.borrow_mut().push(task_timeline.now_millis());
        task_timeline.sleep(75).await;
        task_steps.borrow_mut().push(task_timeline.now_millis());
        task_timeline.sleep(25).await;
        task_steps.borrow_mut().push(task_timeline.now_millis());
    });

    assert_eq!(*steps.borrow(), vec![0]);
    assert!(handle.is_active());

    timeline.advance_to(1_000);
    assert_eq!(*steps.borrow(), vec![0, 75, 100]);
    assert!(!handle.is_active());
    assert_eq!(timeline.active_tasks(), 0);
}

#[test]
fn cancelled_task_never_resumes() {
    let timeline = Timeline::new();
    let resumed = Rc::new(Cell::new(false));

    let task_timeline = timeline.clone();
    let task_resumed = Rc::clone(&resumed);
    let handle = timeline.spawn_local(async move {
        task_timeline.sleep(10).await;
        task_resumed.set(true);
    });
    assert_eq!(timeline.pending_timers(), 1);

    handle.cancel();
    assert_eq!(timeline.pending_timers(), 0);
    timeline.advance_by(100);

    assert!(!resumed.get());
    assert!(!handle.is_active());
}

#[test]
fn independent_tasks_interleave_by_time() {
    let timeline = Timeline::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    let mut handles = Vec::new();
    for (label, delay) in [("slow", 30), ("fast", 10)] {
        let task_timeline = timeline.clone();
        let order = Rc::clone(&order);
        handles.push(timeline.spawn_local(async move {
            task_timeline.sleep(delay).await;
            order.borrow_mut().push(label);
        }));
    }

    timeline.advance_by(50);
    assert_eq!(*order.borrow(), vec!["fast", "slow"]);
}
