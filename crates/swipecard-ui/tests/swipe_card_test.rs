//! End-to-end card behavior driven through the robot harness.

use swipecard_testing::prelude::*;
use swipecard_ui::*;

const VIEWPORT: Size = Size {
    width: 800.0,
    height: 600.0,
};
const CARD: Size = Size {
    width: 300.0,
    height: 400.0,
};

struct Fixture {
    timeline: Timeline,
    surface: RecordingSurface,
    log: CallbackLog,
    card: SwipeCard<RecordingSurface>,
}

fn fixture_on(timeline: &Timeline, config: SwipeConfig) -> Fixture {
    let surface = RecordingSurface::new(CARD).with_timeline(timeline);
    let log = CallbackLog::new();
    let card = SwipeCard::new(
        surface.clone(),
        timeline.clone(),
        VIEWPORT,
        config,
        log.callbacks(),
    )
    .expect("valid config");
    Fixture {
        timeline: timeline.clone(),
        surface,
        log,
        card,
    }
}

fn fixture(config: SwipeConfig) -> Fixture {
    fixture_on(&Timeline::new(), config)
}

#[test]
fn drag_follows_pointer_with_tilt() {
    let f = fixture(SwipeConfig::default());
    let robot = CardRobot::mouse(&f.card);

    assert_eq!(robot.press(150.0, 200.0), GestureSignal::Started);
    assert!(f.surface.current_transition().is_instant());

    let signal = robot.move_to(210.0, 200.0, 20);
    assert!(matches!(signal, GestureSignal::Dragged(_)));
    assert_eq!(f.card.state(), GestureState::Dragging);

    // 60px in 20ms is 3000 px/s, tilted 3 × 5 degrees.
    assert_transform_approx_eq(
        f.surface.current_transform(),
        CardTransform::new(Point::new(60.0, 0.0), 15.0),
        1e-2,
        "drag pose",
    );
}

#[test]
fn fast_swipe_right_flies_out_then_reports_left_screen() {
    let f = fixture(SwipeConfig::default());
    let robot = CardRobot::mouse(&f.card);

    let decision = robot
        .swipe((150.0, 200.0), (450.0, 200.0), 5, 100)
        .expect("release decision");
    assert_eq!(decision.outcome, SwipeOutcome::Swiped(Direction::Right));
    assert_eq!(decision.motion, Motion::FlyOut);

    // Swipe is reported before the flight; left-screen only after it.
    assert_eq!(f.log.events(), vec![CallbackEvent::Swiped(Direction::Right)]);
    assert!(f.card.is_animating());

    // Diagonal 1000px at 3000 px/s is 333.3ms, starting from x = 300.
    let exit = f.surface.current_transition();
    assert_eq!(exit.easing, Easing::EaseOut);
    assert_approx_eq(exit.duration_millis, 1000.0 / 3.0, 1e-2, "exit duration");
    assert_point_approx_eq(
        f.surface.current_transform().translation,
        Point::new(1300.0, 0.0),
        0.1,
        "exit target",
    );

    robot.advance(333);
    assert!(f.surface.is_visible());
    assert_eq!(f.log.count(CallbackEvent::LeftScreen), 0);

    robot.advance(1);
    assert!(!f.surface.is_visible());
    assert_eq!(
        f.log.events(),
        vec![
            CallbackEvent::Swiped(Direction::Right),
            CallbackEvent::LeftScreen
        ]
    );
    assert!(f.card.has_left_screen());
    assert_eq!(f.card.state(), GestureState::Idle);
}

#[test]
fn swipe_direction_follows_dominant_axis() {
    let cases = [
        ((400.0, 300.0), (700.0, 300.0), Direction::Right),
        ((400.0, 300.0), (100.0, 280.0), Direction::Left),
        ((400.0, 300.0), (390.0, 0.0), Direction::Up),
        ((400.0, 100.0), (420.0, 500.0), Direction::Down),
    ];
    for (from, to, expected) in cases {
        let f = fixture(SwipeConfig::default());
        let decision = CardRobot::touch(&f.card)
            .swipe(from, to, 5, 100)
            .expect("release decision");
        assert_eq!(
            decision.outcome,
            SwipeOutcome::Swiped(expected),
            "{from:?} -> {to:?}"
        );
    }
}

#[test]
fn stationary_press_is_a_click_on_the_pressed_half() {
    let f = fixture(SwipeConfig::default());
    let robot = CardRobot::mouse(&f.card);

    let left = robot.click(100.0, 300.0).expect("left click");
    assert_eq!(left.outcome, SwipeOutcome::ClickLeft);
    assert_eq!(left.motion, Motion::SnapBack);
    robot.settle();

    let right = robot.click(700.0, 300.0).expect("right click");
    assert_eq!(right.outcome, SwipeOutcome::ClickRight);
    robot.settle();

    assert_eq!(
        f.log.events(),
        vec![CallbackEvent::LeftSideClick, CallbackEvent::RightSideClick]
    );
    assert!(f.surface.is_visible());
    assert_at_rest(f.surface.current_transform(), "after clicks");
}

#[test]
fn slow_drag_is_cancelled_and_snaps_back() {
    let f = fixture(SwipeConfig::default());
    let robot = CardRobot::mouse(&f.card);

    // 5px per 50ms is 100 px/s.
    let decision = robot
        .swipe((400.0, 300.0), (420.0, 300.0), 4, 200)
        .expect("release decision");
    assert_eq!(decision.outcome, SwipeOutcome::Cancelled);
    assert_eq!(decision.motion, Motion::SnapBack);
    assert!(f.log.events().is_empty());

    // Overshoot to -0.2 × (20px, 0.5deg).
    assert_transform_approx_eq(
        f.surface.current_transform(),
        CardTransform::new(Point::new(-4.0, 0.0), -0.1),
        1e-3,
        "overshoot",
    );
    assert_eq!(f.surface.current_transition(), TransitionSpec::ease(300.0));

    robot.settle();
    assert_at_rest(f.surface.current_transform(), "after snap back");
    assert_eq!(f.surface.current_transition().duration_millis, 10.0);
    assert_eq!(f.card.state(), GestureState::Idle);
    assert!(f.surface.is_visible());
}

#[test]
fn prevented_direction_reports_swipe_but_never_leaves() {
    let f = fixture(SwipeConfig::default().prevent(Direction::Left));
    let robot = CardRobot::mouse(&f.card);

    let decision = robot
        .swipe((600.0, 300.0), (100.0, 300.0), 5, 100)
        .expect("release decision");
    assert_eq!(decision.outcome, SwipeOutcome::Swiped(Direction::Left));
    assert_eq!(decision.motion, Motion::SnapBack);

    robot.settle();
    assert_eq!(f.log.events(), vec![CallbackEvent::Swiped(Direction::Left)]);
    assert!(!f.card.has_left_screen());
    assert!(f.surface.is_visible());
    assert_at_rest(f.surface.current_transform(), "prevented swipe");
}

#[test]
fn flick_disabled_reports_swipe_and_snaps_back() {
    let f = fixture(SwipeConfig::default().with_flick_on_swipe(false));
    let robot = CardRobot::touch(&f.card);

    robot.swipe((400.0, 300.0), (400.0, 0.0), 3, 60);
    robot.settle();

    assert_eq!(f.log.events(), vec![CallbackEvent::Swiped(Direction::Up)]);
    assert!(!f.card.has_left_screen());
}

#[test]
fn release_is_processed_once_per_press() {
    let f = fixture(SwipeConfig::default());

    assert!(f.card.press(Point::new(100.0, 100.0), 0));
    f.card.move_to(Point::new(150.0, 100.0), 10);
    assert!(f.card.release().is_some());
    assert!(f.card.release().is_none());

    CardRobot::mouse(&f.card).settle();
    assert_eq!(f.log.count(CallbackEvent::Swiped(Direction::Right)), 1);
    assert_eq!(f.log.count(CallbackEvent::LeftScreen), 1);
}

#[test]
fn mouse_leave_ends_the_drag() {
    let f = fixture(SwipeConfig::default());
    let robot = CardRobot::mouse(&f.card);

    robot.press(400.0, 300.0);
    robot.move_to(400.0, 600.0, 50);
    assert!(matches!(robot.leave(400.0, 650.0), GestureSignal::Released(_)));
    assert_eq!(f.card.last_outcome(), Some(SwipeOutcome::Swiped(Direction::Down)));

    // The button is no longer considered held.
    assert_eq!(robot.release_at(400.0, 650.0), GestureSignal::Ignored);
}

#[test]
fn hover_without_press_does_nothing() {
    let f = fixture(SwipeConfig::default());
    let robot = CardRobot::mouse(&f.card);

    assert_eq!(robot.move_to(300.0, 300.0, 10), GestureSignal::Ignored);
    assert_eq!(robot.release_at(300.0, 300.0), GestureSignal::Ignored);
    assert!(f.surface.commands().is_empty());
    assert_eq!(f.card.last_decision(), None);
}

#[test]
fn exit_duration_is_inverse_to_speed() {
    let timeline = Timeline::new();
    let slow = fixture_on(&timeline, SwipeConfig::default());
    let fast = fixture_on(&timeline, SwipeConfig::default());

    slow.card.press(Point::ZERO, 0);
    slow.card.move_to(Point::new(10.0, 0.0), 10);
    fast.card.press(Point::ZERO, 0);
    fast.card.move_to(Point::new(20.0, 0.0), 10);

    slow.card.release();
    fast.card.release();

    assert_eq!(slow.surface.current_transition().duration_millis, 1000.0);
    assert_eq!(fast.surface.current_transition().duration_millis, 500.0);

    timeline.advance_by(500);
    assert!(fast.card.has_left_screen());
    assert!(!slow.card.has_left_screen());
    timeline.advance_by(500);
    assert!(slow.card.has_left_screen());
}

#[test]
fn interleaved_cards_keep_separate_state() {
    let timeline = Timeline::new();
    let a = fixture_on(&timeline, SwipeConfig::default());
    let b = fixture_on(&timeline, SwipeConfig::default());

    a.card.press(Point::new(100.0, 100.0), 0);
    b.card.press(Point::new(100.0, 100.0), 0);
    a.card.move_to(Point::new(200.0, 100.0), 10);
    b.card.move_to(Point::new(101.0, 100.0), 10);

    let a_decision = a.card.release().expect("a released");
    let b_decision = b.card.release().expect("b released");
    assert_eq!(a_decision.outcome, SwipeOutcome::Swiped(Direction::Right));
    assert_eq!(b_decision.outcome, SwipeOutcome::Cancelled);

    CardRobot::mouse(&a.card).settle();
    assert_eq!(
        a.log.events(),
        vec![
            CallbackEvent::Swiped(Direction::Right),
            CallbackEvent::LeftScreen
        ]
    );
    assert!(b.log.events().is_empty());
    assert!(b.surface.is_visible());
    assert_eq!(b.card.state(), GestureState::Idle);
    assert_eq!(timeline.pending_timers(), 0);
    assert_eq!(timeline.active_tasks(), 0);
}

#[test]
fn press_is_refused_while_snapping_back() {
    let f = fixture(SwipeConfig::default());
    let robot = CardRobot::mouse(&f.card);

    robot.swipe((400.0, 300.0), (410.0, 300.0), 2, 100);
    assert!(f.card.is_animating());
    assert_eq!(robot.press(400.0, 300.0), GestureSignal::Ignored);

    robot.settle();
    assert_eq!(robot.press(400.0, 300.0), GestureSignal::Started);
}

#[test]
fn detaching_mid_flight_skips_left_screen() {
    let f = fixture(SwipeConfig::default());
    let robot = CardRobot::mouse(&f.card);

    robot.swipe((150.0, 200.0), (450.0, 200.0), 5, 100);
    f.surface.detach();
    robot.settle();

    assert_eq!(f.log.events(), vec![CallbackEvent::Swiped(Direction::Right)]);
    assert!(!f.card.has_left_screen());
    assert_eq!(f.card.state(), GestureState::Idle);
    assert_eq!(f.card.element_size(), None);
}

#[test]
fn detached_before_release_writes_nothing() {
    let f = fixture(SwipeConfig::default());
    let robot = CardRobot::mouse(&f.card);

    robot.press(150.0, 200.0);
    robot.move_to(450.0, 200.0, 50);
    f.surface.detach();
    f.surface.clear_commands();

    robot.release_at(450.0, 200.0);
    robot.settle();

    assert!(f.surface.commands().is_empty());
    assert_eq!(f.log.events(), vec![CallbackEvent::Swiped(Direction::Right)]);
    assert_eq!(f.card.state(), GestureState::Idle);
}

#[test]
fn finalize_restores_a_card_that_left() {
    let f = fixture(SwipeConfig::default());
    let robot = CardRobot::mouse(&f.card);

    robot.swipe((150.0, 200.0), (450.0, 200.0), 5, 100);
    robot.settle();
    assert!(f.card.has_left_screen());
    assert_eq!(robot.press(150.0, 200.0), GestureSignal::Ignored);
    robot.release_at(150.0, 200.0);

    f.card.finalize();
    assert!(f.surface.is_visible());
    assert_at_rest(f.surface.current_transform(), "finalized");
    assert!(!f.card.has_left_screen());
    assert_eq!(f.card.last_decision(), None);
    assert_eq!(robot.press(150.0, 200.0), GestureSignal::Started);
}

#[test]
fn finalize_cancels_running_exit() {
    let f = fixture(SwipeConfig::default());
    let robot = CardRobot::mouse(&f.card);

    robot.swipe((150.0, 200.0), (450.0, 200.0), 5, 100);
    assert_eq!(f.timeline.pending_timers(), 1);

    f.card.finalize();
    assert_eq!(f.timeline.pending_timers(), 0);
    assert_eq!(f.timeline.active_tasks(), 0);

    robot.advance(1000);
    assert_eq!(f.log.count(CallbackEvent::LeftScreen), 0);
    assert!(f.surface.is_visible());
    assert_eq!(f.card.state(), GestureState::Idle);
}

#[test]
fn dropping_card_cancels_its_animation() {
    let f = fixture(SwipeConfig::default());
    CardRobot::mouse(&f.card).swipe((150.0, 200.0), (450.0, 200.0), 5, 100);
    let Fixture {
        timeline, log, card, ..
    } = f;

    drop(card);
    timeline.advance_by(1000);
    assert_eq!(log.count(CallbackEvent::LeftScreen), 0);
    assert_eq!(timeline.active_tasks(), 0);
}

#[test]
fn invalid_config_is_rejected() {
    let result = SwipeCard::new(
        RecordingSurface::new(CARD),
        Timeline::new(),
        VIEWPORT,
        SwipeConfig::default().with_snap_back_duration(-5.0),
        SwipeCallbacks::new(),
    );
    assert!(matches!(
        result,
        Err(ConfigError::Negative {
            field: "snap_back_duration_ms",
            ..
        })
    ));
}

#[test]
fn viewport_change_moves_click_boundary() {
    let f = fixture(SwipeConfig::default());
    let robot = CardRobot::mouse(&f.card);

    f.card.set_viewport(Size::new(400.0, 600.0));
    let decision = robot.click(300.0, 100.0).expect("click");
    assert_eq!(decision.outcome, SwipeOutcome::ClickRight);
}

#[test]
fn write_then_read_round_trips() {
    let mut surface = RecordingSurface::new(CARD);
    let poses = [
        (Point::new(0.0, 0.0), 0.0),
        (Point::new(120.5, -33.25), 7.5),
        (Point::new(-640.0, 80.0), -29.0),
    ];
    for (translation, rotation) in poses {
        assert!(write_transform(&mut surface, translation, rotation));
        let first = surface.current_matrix();
        write_transform(&mut surface, translation, rotation);
        assert_eq!(surface.current_matrix(), first, "writes are idempotent");

        let pose = read_transform(&surface).expect("attached surface");
        assert_transform_approx_eq(
            pose,
            CardTransform::new(translation, rotation),
            1e-3,
            "round trip",
        );
    }
}
