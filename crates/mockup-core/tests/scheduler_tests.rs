// Host-side tests for the render scheduler and resolution commits.
// Time is driven through a manual clock; nothing sleeps.

mod common;

use common::{approx, ManualClock, RecordingSurface};
use mockup_core::constants::COMMIT_DELAY;
use mockup_core::{
    face_brightness, InteractionState, Layer, LightSource, RenderScheduler, ScaleCommitManager,
};
use std::rc::Rc;
use std::time::Duration;

fn setup() -> (Rc<ManualClock>, ScaleCommitManager<Rc<ManualClock>>, RenderScheduler) {
    let clock = Rc::new(ManualClock::new());
    let resolution = ScaleCommitManager::new(clock.clone());
    (clock, resolution, RenderScheduler::new())
}

const LIGHT: LightSource = LightSource { x: -400.0, y: -300.0 };

#[test]
fn first_tick_renders_everything() {
    let (_clock, mut res, mut sched) = setup();
    let state = InteractionState::default();

    let cmds = sched.tick(&state, LIGHT, &mut res);
    let rotation = cmds.rotation.expect("rotation on first frame");
    assert_eq!(rotation.brightness, face_brightness(0.0, 0.0));
    assert!(cmds.transform.is_some());
    assert!(cmds.shadow.is_some());
    assert_eq!(cmds.render_scale, None);

    let mut surface = RecordingSurface::default();
    cmds.apply(&mut surface);
    assert_eq!(surface.last(Layer::Root, "--rot-x"), Some("0deg"));
    assert_eq!(surface.last(Layer::Root, "--rot-y"), Some("0deg"));
    let front: f64 = surface
        .last(Layer::Container, "--light-front")
        .unwrap()
        .parse()
        .unwrap();
    assert!(approx(front, 1.055));
    assert_eq!(
        surface.last(Layer::Container, "transform"),
        Some("translate(0px, 0px) scale(1)")
    );
    assert!(surface.last(Layer::Shadow, "transform").is_some());
}

#[test]
fn unchanged_state_produces_no_writes() {
    let (_clock, mut res, mut sched) = setup();
    let state = InteractionState::default();
    let mut surface = RecordingSurface::default();

    sched.tick(&state, LIGHT, &mut res).apply(&mut surface);
    let after_first = surface.writes();

    let second = sched.tick(&state, LIGHT, &mut res);
    assert!(second.is_empty());
    second.apply(&mut surface);
    assert_eq!(surface.writes(), after_first);
}

#[test]
fn pan_only_change_skips_lighting() {
    let (_clock, mut res, mut sched) = setup();
    let mut state = InteractionState::default();
    sched.tick(&state, LIGHT, &mut res);

    state.pan_x = 12.0;
    let cmds = sched.tick(&state, LIGHT, &mut res);
    assert!(cmds.rotation.is_none());
    assert_eq!(cmds.transform.unwrap().pan_x, 12.0);
    assert!(cmds.shadow.is_some());
}

#[test]
fn light_change_alone_triggers_rerender() {
    let (_clock, mut res, mut sched) = setup();
    let state = InteractionState::default();
    sched.tick(&state, LIGHT, &mut res);

    let resized = LightSource::from_viewport(1024.0, 768.0);
    let cmds = sched.tick(&state, resized, &mut res);
    assert!(!cmds.is_empty());
    assert!(cmds.rotation.is_none());
    assert_eq!(sched.snapshot().unwrap().light_x, -512.0);
}

#[test]
fn rotation_change_reapplies_brightness() {
    let (_clock, mut res, mut sched) = setup();
    let mut state = InteractionState::default();
    sched.tick(&state, LIGHT, &mut res);

    state.rotation_y = 180.0;
    let cmds = sched.tick(&state, LIGHT, &mut res);
    let rotation = cmds.rotation.unwrap();
    assert!((rotation.brightness.back - 1.055).abs() < 1e-9);

    let mut surface = RecordingSurface::default();
    cmds.apply(&mut surface);
    assert_eq!(surface.last(Layer::Root, "--rot-y"), Some("180deg"));
}

#[test]
fn debounced_commit_uses_last_target() {
    let clock = Rc::new(ManualClock::new());
    let mut res = ScaleCommitManager::new(clock.clone());

    for (i, target) in [1.2, 1.6, 2.1, 2.4].into_iter().enumerate() {
        let ratio = res.visual_scale(target);
        assert!(approx(ratio, target));
        if i < 3 {
            clock.advance(Duration::from_millis(120));
            assert_eq!(res.poll(), None);
        }
    }

    clock.advance(COMMIT_DELAY - Duration::from_millis(1));
    assert_eq!(res.poll(), None);
    clock.advance(Duration::from_millis(1));
    assert_eq!(res.poll(), Some(2.4));
    assert_eq!(res.committed_scale(), 2.4);
    assert!(approx(res.ratio(2.4), 1.0));

    // Exactly one commit.
    clock.advance(COMMIT_DELAY * 4);
    assert_eq!(res.poll(), None);
    assert!(!res.has_pending());
}

#[test]
fn commit_is_capped_at_max_render_scale() {
    let clock = Rc::new(ManualClock::new());
    let mut res = ScaleCommitManager::new(clock.clone());

    res.visual_scale(4.5);
    clock.advance(COMMIT_DELAY);
    assert_eq!(res.poll(), Some(3.0));
    assert!(approx(res.ratio(4.5), 1.5));

    res.visual_scale(5.0);
    clock.advance(COMMIT_DELAY);
    assert_eq!(res.poll(), None);
    assert_eq!(res.committed_scale(), 3.0);
}

#[test]
fn commit_dead_zone_suppresses_tiny_changes() {
    let clock = Rc::new(ManualClock::new());
    let mut res = ScaleCommitManager::new(clock.clone());
    res.visual_scale(1.005);
    clock.advance(COMMIT_DELAY);
    assert_eq!(res.poll(), None);
    assert_eq!(res.committed_scale(), 1.0);
}

#[test]
fn scheduler_applies_commit_and_sharpens_transform() {
    let (clock, mut res, mut sched) = setup();
    let mut state = InteractionState::default();
    sched.tick(&state, LIGHT, &mut res);

    state.scale = 2.0;
    let cmds = sched.tick(&state, LIGHT, &mut res);
    assert!(approx(cmds.transform.unwrap().scale, 2.0));
    assert_eq!(cmds.render_scale, None);

    // Idle frames inside the window stay silent.
    clock.advance(Duration::from_millis(250));
    assert!(sched.tick(&state, LIGHT, &mut res).is_empty());

    clock.advance(Duration::from_millis(250));
    let cmds = sched.tick(&state, LIGHT, &mut res);
    assert_eq!(cmds.render_scale, Some(2.0));
    assert!(approx(cmds.transform.unwrap().scale, 1.0));
    assert!(cmds.rotation.is_none());

    let mut surface = RecordingSurface::default();
    cmds.apply(&mut surface);
    assert_eq!(surface.last(Layer::Container, "--render-scale"), Some("2"));
    let resize_at = surface
        .properties
        .iter()
        .position(|(_, n, _)| n == "--render-scale")
        .unwrap();
    let transform_at = surface
        .properties
        .iter()
        .position(|(l, n, _)| *l == Layer::Container && n == "transform")
        .unwrap();
    assert!(resize_at < transform_at);

    assert!(sched.tick(&state, LIGHT, &mut res).is_empty());
}

#[test]
fn continuous_zoom_defers_commit() {
    let (clock, mut res, mut sched) = setup();
    let mut state = InteractionState::default();
    sched.tick(&state, LIGHT, &mut res);

    for step in 1..=20 {
        state.scale = 1.0 + step as f64 * 0.1;
        clock.advance(Duration::from_millis(16));
        let cmds = sched.tick(&state, LIGHT, &mut res);
        assert_eq!(cmds.render_scale, None);
    }
    clock.advance(COMMIT_DELAY);
    let cmds = sched.tick(&state, LIGHT, &mut res);
    assert_eq!(cmds.render_scale, Some(3.0));
}
