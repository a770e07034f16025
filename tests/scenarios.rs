// End-to-end interaction scenarios driven through the recording host and a virtual clock.

use scrollbar_core::*;

/// Plays the role of the browser: keeps time and fires scheduled timers.
struct VirtualClock {
    now_ms: u64,
    timers: Vec<(u32, u64)>,
    /// (time, kind) of every dispatched event.
    log: Vec<(u64, ScrollEventKind)>,
}

impl VirtualClock {
    fn new() -> Self {
        VirtualClock {
            now_ms: 0,
            timers: Vec::new(),
            log: Vec::new(),
        }
    }

    /// Apply recorded effects the way the element's JS would.
    fn apply(&mut self, bar: &mut Scrollbar<EffectRecorder>) {
        for effect in bar.host_mut().take_effects() {
            match effect {
                Effect::ScheduleTimer { id, delay_ms } => {
                    self.timers.push((id, self.now_ms + delay_ms as u64))
                }
                Effect::CancelTimer { id } => self.timers.retain(|(t, _)| *t != id),
                Effect::Dispatch { kind } => self.log.push((self.now_ms, kind)),
                _ => {}
            }
        }
    }

    fn advance(&mut self, bar: &mut Scrollbar<EffectRecorder>, ms: u64) {
        let until = self.now_ms + ms;
        loop {
            self.timers.sort_by_key(|(_, due)| *due);
            match self.timers.first().copied() {
                Some((id, due)) if due <= until => {
                    self.timers.remove(0);
                    self.now_ms = due;
                    let id = TimerId::new(id);
                    assert!(bar.host_mut().expire(id));
                    bar.on_repeat_timer(id);
                    self.apply(bar);
                }
                _ => break,
            }
        }
        self.now_ms = until;
    }
}

fn mounted(track_length: f64, orientation: Orientation) -> Scrollbar<EffectRecorder> {
    let config = ScrollbarConfig {
        orientation,
        ..Default::default()
    };
    let mut bar = Scrollbar::with_config(EffectRecorder::with_track_length(track_length), &config);
    bar.on_mount();
    bar.host_mut().take_effects();
    bar
}

#[test]
fn scenario_a_button_auto_repeat_timing() {
    let mut bar = mounted(200.0, Orientation::Horizontal);
    let mut clock = VirtualClock::new();

    bar.on_button_press(PointerButton::Primary, ScrollButton::Button2);
    clock.apply(&mut bar);
    clock.advance(&mut bar, 450);

    let times: Vec<u64> = clock.log.iter().map(|(t, _)| *t).collect();
    assert_eq!(times, vec![0, 300, 400]);
    assert!(clock
        .log
        .iter()
        .all(|(_, kind)| *kind == ScrollEventKind::IncrementSmall));

    bar.on_global_pointer_up();
    clock.apply(&mut bar);
    clock.advance(&mut bar, 1000);
    assert_eq!(clock.log.len(), 3);
    assert!(clock.timers.is_empty());
}

#[test]
fn scenario_a_release_before_first_repeat() {
    let mut bar = mounted(200.0, Orientation::Horizontal);
    let mut clock = VirtualClock::new();

    bar.on_button_press(PointerButton::Primary, ScrollButton::Button2);
    clock.apply(&mut bar);
    clock.advance(&mut bar, 299);
    bar.on_global_pointer_up();
    clock.apply(&mut bar);
    clock.advance(&mut bar, 2000);

    assert_eq!(clock.log, vec![(0, ScrollEventKind::IncrementSmall)]);
}

#[test]
fn scenario_b_thumb_drag() {
    let mut bar = mounted(200.0, Orientation::Horizontal);
    bar.set_value(0.5);
    bar.host_mut().take_effects();

    bar.on_thumb_press(PointerButton::Primary, 300.0);
    bar.on_global_pointer_move(370.0);

    assert_eq!(bar.value(), 1.0);
    assert!(bar.host().effects().contains(&Effect::Dispatch {
        kind: ScrollEventKind::Value
    }));
}

#[test]
fn scenario_c_trough_pages_forward_until_release() {
    let mut bar = mounted(200.0, Orientation::Horizontal);
    bar.set_value(0.5);
    bar.host_mut().take_effects();
    let mut clock = VirtualClock::new();

    bar.on_trough_press(PointerButton::Primary, 150.0);
    clock.apply(&mut bar);
    clock.advance(&mut bar, 600);
    bar.on_global_pointer_up();
    clock.apply(&mut bar);
    clock.advance(&mut bar, 600);

    // 0, 300, 400, 500, 600
    assert_eq!(clock.log.len(), 5);
    assert!(clock
        .log
        .iter()
        .all(|(_, kind)| *kind == ScrollEventKind::IncrementLarge));
}

#[test]
fn scenario_d_invalid_orientation() {
    let mut bar = mounted(200.0, Orientation::Vertical);
    bar.set_value(0.2);
    bar.set_thumb_size(0.4);

    let result = bar.set_orientation_str("diagonal");
    assert_eq!(
        result,
        Err(ScrollbarError::InvalidOrientation("diagonal".to_string()))
    );
    assert_eq!(bar.orientation(), Orientation::Vertical);
    assert_eq!(bar.value(), 0.2);
    assert_eq!(bar.thumb_size(), 0.4);
}

#[test]
fn listener_closes_the_loop_with_step_policy() {
    let mut bar = mounted(200.0, Orientation::Horizontal);
    let policy = StepPolicy::default();
    let mut clock = VirtualClock::new();

    bar.on_button_press(PointerButton::Primary, ScrollButton::Button2);
    clock.apply(&mut bar);
    clock.advance(&mut bar, 1000);
    bar.on_global_pointer_up();
    clock.apply(&mut bar);

    // 0, 300, then every 100ms up to 1000: 9 emissions.
    assert_eq!(clock.log.len(), 9);
    for (_, kind) in clock.log.clone() {
        if let Some(next) = policy.next_value(kind, bar.value(), bar.thumb_size()) {
            bar.set_value(next);
        }
    }
    let expected = 9.0 * policy.small_step(0.3);
    assert!((bar.value() - expected).abs() < 1e-9);

    // Four pages back overshoot the start and clamp.
    for _ in 0..4 {
        let next = policy
            .next_value(ScrollEventKind::DecrementLarge, bar.value(), bar.thumb_size())
            .unwrap();
        bar.set_value(next);
    }
    assert_eq!(bar.value(), 0.0);
}
