use rtimeclock::core::clock::FixedClock;
use rtimeclock::core::store::MemoryKv;
use rtimeclock::core::ticker::{TICK_PERIOD, Ticker};
use rtimeclock::core::tracker::Tracker;
use rtimeclock::core::watch::{Frame, WatchEvent, run_loop};
use rtimeclock::models::entry_kind::EntryKind;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

mod common;
use common::local;

const SEC: Duration = Duration::from_secs(1);

#[test]
fn idle_ticker_never_fires() {
    let mut ticker = Ticker::default();
    let t0 = Instant::now();

    assert!(!ticker.is_running());
    assert!(!ticker.poll(t0 + 10 * SEC));
    assert_eq!(ticker.wait_timeout(t0), None);
    assert_eq!(ticker.period(), TICK_PERIOD);
}

#[test]
fn fires_once_per_period() {
    let mut ticker = Ticker::new(SEC);
    let t0 = Instant::now();
    ticker.start(t0);

    assert!(!ticker.poll(t0 + Duration::from_millis(999)));
    assert!(ticker.poll(t0 + SEC));
    assert!(!ticker.poll(t0 + Duration::from_millis(1500)));
    assert!(ticker.poll(t0 + 2 * SEC));
    assert_eq!(ticker.wait_timeout(t0 + 2 * SEC), Some(SEC));
}

#[test]
fn missed_periods_are_skipped() {
    let mut ticker = Ticker::new(SEC);
    let t0 = Instant::now();
    ticker.start(t0);

    assert!(ticker.poll(t0 + Duration::from_millis(5500)));
    assert!(!ticker.poll(t0 + Duration::from_millis(5600)));
    assert_eq!(
        ticker.wait_timeout(t0 + Duration::from_millis(5500)),
        Some(Duration::from_millis(500))
    );
}

#[test]
fn cancelled_ticker_stays_silent() {
    let mut ticker = Ticker::new(SEC);
    let t0 = Instant::now();
    ticker.start(t0);
    ticker.cancel();

    assert!(!ticker.is_running());
    assert!(!ticker.poll(t0 + 5 * SEC));
}

#[test]
fn follow_binds_ticker_to_clock_state() {
    let mut ticker = Ticker::new(SEC);
    let t0 = Instant::now();

    ticker.follow(false, t0);
    assert!(!ticker.is_running());

    ticker.follow(true, t0);
    assert!(ticker.is_running());

    // still clocked in: schedule is kept
    ticker.follow(true, t0 + Duration::from_millis(700));
    assert_eq!(ticker.wait_timeout(t0), Some(SEC));

    ticker.follow(false, t0 + 2 * SEC);
    assert!(!ticker.is_running());
    assert!(!ticker.poll(t0 + 3 * SEC));
}

#[test]
fn loop_handles_toggles_in_order_then_quits() {
    let clock = FixedClock::new(local(9, 0, 0));
    let mut tracker = Tracker::open(MemoryKv::new(), &clock, None).unwrap();

    let (tx, rx) = mpsc::channel();
    tx.send(WatchEvent::Toggle).unwrap();
    tx.send(WatchEvent::Toggle).unwrap();
    tx.send(WatchEvent::Quit).unwrap();

    let mut frames = Vec::new();
    let stats = run_loop(&mut tracker, &rx, Ticker::default(), |frame, snap, _| {
        let label = match frame {
            Frame::Initial => "initial".to_string(),
            Frame::Tick => "tick".to_string(),
            Frame::Toggled(e) => e.kind.label().to_string(),
        };
        frames.push((label, snap.is_clocked_in));
    })
    .unwrap();

    assert_eq!(stats.toggles, 2);
    assert_eq!(stats.ticks, 0);
    assert_eq!(
        frames,
        vec![
            ("initial".to_string(), false),
            ("IN".to_string(), true),
            ("OUT".to_string(), false),
        ]
    );
    assert_eq!(tracker.entries().len(), 2);
    assert_eq!(tracker.entries().entries()[1].kind, EntryKind::Out);
}

#[test]
fn overdue_tick_fires_before_next_queued_event() {
    let clock = FixedClock::new(local(9, 0, 0));
    let mut tracker = Tracker::open(MemoryKv::new(), &clock, None).unwrap();

    let (tx, rx) = mpsc::channel();
    tx.send(WatchEvent::Toggle).unwrap();
    tx.send(WatchEvent::Quit).unwrap();

    let mut frames = Vec::new();
    let stats = run_loop(
        &mut tracker,
        &rx,
        Ticker::new(Duration::from_millis(20)),
        |frame, _, _| {
            if let Frame::Toggled(_) = frame {
                // slow render: the first tick is overdue before the loop looks again
                thread::sleep(Duration::from_millis(50));
            }
            frames.push(frame == Frame::Tick);
        },
    )
    .unwrap();

    assert_eq!(stats.toggles, 1);
    assert_eq!(stats.ticks, 1);
    assert_eq!(frames, vec![false, false, true]);
}

#[test]
fn loop_ticks_while_clocked_in() {
    let clock = FixedClock::new(local(9, 0, 0));
    let mut tracker = Tracker::open(MemoryKv::new(), &clock, None).unwrap();
    tracker.toggle().unwrap();

    let (tx, rx) = mpsc::channel();
    let quitter = thread::spawn(move || {
        thread::sleep(Duration::from_millis(200));
        tx.send(WatchEvent::Quit).unwrap();
    });

    let mut ticks = 0;
    let stats = run_loop(
        &mut tracker,
        &rx,
        Ticker::new(Duration::from_millis(10)),
        |frame, _, _| {
            if frame == Frame::Tick {
                ticks += 1;
            }
        },
    )
    .unwrap();
    quitter.join().unwrap();

    assert!(stats.ticks >= 1);
    assert_eq!(stats.ticks, ticks);
}

#[test]
fn loop_does_not_tick_while_clocked_out() {
    let clock = FixedClock::new(local(9, 0, 0));
    let mut tracker = Tracker::open(MemoryKv::new(), &clock, None).unwrap();

    let (tx, rx) = mpsc::channel();
    let quitter = thread::spawn(move || {
        thread::sleep(Duration::from_millis(100));
        tx.send(WatchEvent::Quit).unwrap();
    });

    let stats = run_loop(
        &mut tracker,
        &rx,
        Ticker::new(Duration::from_millis(5)),
        |_, _, _| {},
    )
    .unwrap();
    quitter.join().unwrap();

    assert_eq!(stats.ticks, 0);
}

#[test]
fn loop_ends_when_senders_are_gone() {
    let clock = FixedClock::new(local(9, 0, 0));
    let mut tracker = Tracker::open(MemoryKv::new(), &clock, None).unwrap();
    tracker.toggle().unwrap();

    let (tx, rx) = mpsc::channel::<WatchEvent>();
    drop(tx);

    let stats = run_loop(&mut tracker, &rx, Ticker::default(), |_, _, _| {}).unwrap();
    assert_eq!(stats, Default::default());
}
