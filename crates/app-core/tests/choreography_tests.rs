// Host-side tests for per-mode target math: formation helix, scatter drift
// with soft boundary reset, focus spotlight/perimeter.

use app_core::choreography::{self, FrameCtx};
use app_core::constants::*;
use app_core::mode::Mode;
use app_core::scene::{ObjectKind, SceneRegistry, Transform, VisualObject};
use glam::Vec3;
use rand::prelude::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn bare_object(kind: ObjectKind) -> VisualObject {
    VisualObject {
        kind,
        origin: Vec3::new(0.0, 40.0, 0.0),
        current: Transform::default(),
        target_position: Vec3::ZERO,
        target_rotation: Vec3::ZERO,
        target_scale: Vec3::ONE,
        velocity: Vec3::ZERO,
        angular_velocity: Vec3::ZERO,
        batch_index: 0,
        batch_len: 1,
        aspect: 1.0,
    }
}

fn run_mode(
    mode: Mode,
    index: usize,
    obj: &mut VisualObject,
    time: f32,
    focused: Option<usize>,
    rng: &mut StdRng,
) {
    let mut ctx = FrameCtx { time, focused, rng };
    choreography::for_mode(mode).target_for(index, obj, &mut ctx);
}

#[test]
fn formation_height_is_monotone_in_batch_index() {
    let mut rng = rng();
    let mut reg = SceneRegistry::new();
    reg.create_batch(100, ObjectKind::Structural, &mut rng);

    let mut prev_y = f32::NEG_INFINITY;
    let mut prev_radius = f32::INFINITY;
    for (i, obj) in reg.objects_mut().iter_mut().enumerate() {
        let mut ctx = FrameCtx {
            time: 0.0,
            focused: None,
            rng: &mut rng,
        };
        choreography::for_mode(Mode::Formation).target_for(i, obj, &mut ctx);
        assert!(obj.target_position.y > prev_y, "height dipped at index {i}");
        let radius = (obj.target_position.x * obj.target_position.x
            + obj.target_position.z * obj.target_position.z)
            .sqrt();
        assert!(radius <= prev_radius + 1e-4, "radius grew at index {i}");
        prev_y = obj.target_position.y;
        prev_radius = radius;
    }
    // The helix spans the full height, centered on y = 0.
    assert!(prev_y <= TREE_HEIGHT * 0.5);
}

#[test]
fn formation_yaw_follows_the_helix_angle() {
    let mut rng = rng();
    let mut obj = bare_object(ObjectKind::Structural);
    obj.batch_index = 25;
    obj.batch_len = 100;
    run_mode(Mode::Formation, 0, &mut obj, 0.0, None, &mut rng);
    let expected = 0.25 * TREE_TURNS * std::f32::consts::PI;
    assert!((obj.target_rotation.y - expected).abs() < 1e-4);
    assert_eq!(obj.target_scale, Vec3::ONE);
}

#[test]
fn formation_dust_twinkles_within_amplitude() {
    let mut rng = rng();
    let mut obj = bare_object(ObjectKind::AmbientDust);
    for frame in 0..200 {
        let time = frame as f32 * 0.016;
        run_mode(Mode::Formation, 0, &mut obj, time, None, &mut rng);
        let s = obj.target_scale.x;
        assert!(
            (1.0 - DUST_PULSE_AMPL..=1.0 + DUST_PULSE_AMPL).contains(&s),
            "dust scale {s} outside pulse range"
        );
    }
}

#[test]
fn scatter_target_accumulates_constant_velocity() {
    let mut rng = rng();
    let mut obj = bare_object(ObjectKind::Structural);
    obj.velocity = Vec3::new(0.03, -0.02, 0.01);
    let start = obj.target_position;
    let k = 40;
    for _ in 0..k {
        run_mode(Mode::Scatter, 0, &mut obj, 0.0, None, &mut rng);
    }
    let expected = start + obj.velocity * k as f32;
    assert!((obj.target_position - expected).length() < 1e-4);
    assert_eq!(obj.target_scale, Vec3::ONE);
}

#[test]
fn scatter_resets_past_the_bound_into_the_inner_shell() {
    let mut rng = rng();
    let mut obj = bare_object(ObjectKind::Structural);
    obj.target_position = Vec3::new(SCATTER_BOUND - 0.01, 0.0, 0.0);
    obj.velocity = Vec3::new(0.1, 0.0, 0.0);
    run_mode(Mode::Scatter, 0, &mut obj, 0.0, None, &mut rng);
    let len = obj.target_position.length();
    assert!(
        (SCATTER_RESET_MIN..SCATTER_RESET_MIN + SCATTER_RESET_SPAN).contains(&len),
        "reset length {len} outside [5, 10)"
    );
}

#[test]
fn scatter_advances_displayed_rotation_directly() {
    let mut rng = rng();
    let mut obj = bare_object(ObjectKind::Structural);
    obj.angular_velocity = Vec3::new(0.02, 0.03, 0.0);
    let before = obj.current.rotation;
    run_mode(Mode::Scatter, 0, &mut obj, 0.0, None, &mut rng);
    assert!(obj.current.rotation.angle_between(before) > 1e-4);
    assert!((obj.current.rotation.length() - 1.0).abs() < 1e-4);
}

#[test]
fn focus_spotlights_the_chosen_object_and_clears_the_rest() {
    let mut rng = rng();

    let mut chosen = bare_object(ObjectKind::Photo);
    run_mode(Mode::Focus, 3, &mut chosen, 0.0, Some(3), &mut rng);
    assert_eq!(chosen.target_position, FOCUS_SPOTLIGHT_POS);
    assert_eq!(chosen.target_rotation, Vec3::ZERO);
    assert_eq!(chosen.target_scale, Vec3::splat(FOCUS_SPOTLIGHT_SCALE));

    let mut other = bare_object(ObjectKind::Structural);
    other.current.position = Vec3::new(3.0, 4.0, 0.0);
    run_mode(Mode::Focus, 1, &mut other, 0.0, Some(3), &mut rng);
    assert!((other.target_position.length() - FOCUS_PERIMETER_RADIUS).abs() < 1e-3);
    // Pushed along its own direction from center.
    assert!(other.target_position.normalize().dot(Vec3::new(0.6, 0.8, 0.0)) > 0.999);
    assert_eq!(other.target_scale, Vec3::splat(FOCUS_PERIMETER_SCALE));
}

#[test]
fn focus_perimeter_direction_falls_back_to_origin_for_centered_objects() {
    let mut rng = rng();
    let mut obj = bare_object(ObjectKind::Structural);
    obj.current.position = Vec3::ZERO;
    obj.origin = Vec3::new(0.0, -40.0, 0.0);
    run_mode(Mode::Focus, 0, &mut obj, 0.0, Some(99), &mut rng);
    assert!((obj.target_position - Vec3::new(0.0, -FOCUS_PERIMETER_RADIUS, 0.0)).length() < 1e-3);
}
