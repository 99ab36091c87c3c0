// Host-side tests for face lighting and the ground shadow.

mod common;

use common::approx;
use mockup_core::constants::{BASE_BRIGHTNESS, LIGHT_RANGE};
use mockup_core::{face_brightness, project_shadow, LightSource, ShadowInput};
use glam::DVec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn front_facing_brightness_matches_calibration() {
    let b = face_brightness(0.0, 0.0);
    assert!(approx(b.front, 1.055));
    assert!(approx(b.back, 0.845));
    assert!(approx(b.left, BASE_BRIGHTNESS + 0.5 * LIGHT_RANGE));
    assert!(approx(b.right, BASE_BRIGHTNESS - 0.5 * LIGHT_RANGE));
    // Top normal is -Y, which faces the -Y light component.
    assert!(approx(b.top, BASE_BRIGHTNESS + 0.5 * LIGHT_RANGE));
    assert!(approx(b.bottom, BASE_BRIGHTNESS - 0.5 * LIGHT_RANGE));
}

#[test]
fn half_turn_swaps_front_and_back() {
    let b = face_brightness(0.0, 180.0);
    assert!((b.front - 0.845).abs() < 1e-9);
    assert!((b.back - 1.055).abs() < 1e-9);
}

#[test]
fn brightness_stays_within_range_for_any_rotation() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..5_000 {
        let rx = rng.gen_range(-1_080.0..1_080.0);
        let ry = rng.gen_range(-1_080.0..1_080.0);
        let b = face_brightness(rx, ry);
        for (name, v) in b.css_variables() {
            assert!(
                (0.80..=1.10).contains(&v),
                "{name} = {v} out of range at ({rx}, {ry})"
            );
        }
    }
}

#[test]
fn brightness_is_continuous_in_rotation() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..1_000 {
        let rx = rng.gen_range(-360.0..360.0);
        let ry = rng.gen_range(-360.0..360.0);
        let a = face_brightness(rx, ry).css_variables();
        let b = face_brightness(rx + 0.01, ry - 0.01).css_variables();
        for i in 0..6 {
            assert!((a[i].1 - b[i].1).abs() < 1e-3);
        }
    }
}

#[test]
fn full_turn_is_periodic() {
    let a = face_brightness(30.0, 45.0);
    let b = face_brightness(390.0, -315.0);
    for (x, y) in a.css_variables().iter().zip(b.css_variables()) {
        assert!((x.1 - y.1).abs() < 1e-9);
    }
}

fn shadow_input(pan: DVec2, rotation_y: f64, scale: f64, light: LightSource) -> ShadowInput {
    ShadowInput {
        pan,
        rotation_y,
        scale,
        light,
    }
}

#[test]
fn shadow_points_away_from_light() {
    let light = LightSource::from_viewport(800.0, 600.0);
    assert_eq!(light, LightSource { x: -400.0, y: -300.0 });

    let s = project_shadow(shadow_input(DVec2::ZERO, 0.0, 1.0, light));
    // (400, 300) has length 500.
    assert!(approx(s.offset_x, 0.8 * 45.0));
    assert!(approx(s.offset_y, 0.6 * 45.0));
    assert!(approx(s.stretch_y, 0.7 + 500.0 * 0.0012));
    assert!(approx(s.squash_x, 1.0));
}

#[test]
fn shadow_offset_scales_with_zoom() {
    let light = LightSource::from_viewport(800.0, 600.0);
    let s1 = project_shadow(shadow_input(DVec2::ZERO, 0.0, 1.0, light));
    let s2 = project_shadow(shadow_input(DVec2::ZERO, 0.0, 2.0, light));
    assert!(approx(s2.offset_x, 2.0 * s1.offset_x));
    assert!(approx(s2.offset_y, 2.0 * s1.offset_y));
}

#[test]
fn shadow_at_light_position_uses_unit_distance() {
    let light = LightSource { x: 10.0, y: 20.0 };
    let s = project_shadow(shadow_input(DVec2::new(10.0, 20.0), 0.0, 1.0, light));
    assert_eq!(s.offset_x, 0.0);
    assert_eq!(s.offset_y, 0.0);
    assert!(approx(s.stretch_y, 0.7 + 0.0012));
}

#[test]
fn shadow_stretch_is_capped_and_squash_is_floored() {
    let light = LightSource { x: -10_000.0, y: 0.0 };
    let s = project_shadow(shadow_input(DVec2::ZERO, 90.0, 1.0, light));
    assert_eq!(s.stretch_y, 2.2);
    assert_eq!(s.squash_x, 0.18);

    let s = project_shadow(shadow_input(DVec2::ZERO, 60.0, 1.0, light));
    assert!(approx(s.squash_x, 0.5));
}

#[test]
fn shadow_css_translates_before_scaling() {
    let light = LightSource::from_viewport(800.0, 600.0);
    let css = project_shadow(shadow_input(DVec2::ZERO, 0.0, 1.0, light)).to_css();
    assert!(css.starts_with("translate(-50%, 0) translateZ(-3000px) translate("));
    let translate = css.find("px, ").unwrap();
    let scale_x = css.find("scaleX(").unwrap();
    assert!(translate < scale_x);
    assert!(css.ends_with(')'));
}
