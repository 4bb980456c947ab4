// Host-side tests for pose derivation, classification precedence and the
// per-video-frame dedup of the gesture interpreter.

use app_core::gesture::{classify, derive_pose, GestureClass, GestureInterpreter, HandPose};
use app_core::LANDMARK_COUNT;
use glam::Vec2;

/// Builds a 21-point landmark set with the wrist/palm at (0.5, 0.5), the
/// four fingertips `extension` away from the wrist and the thumb tip
/// `pinch` away from the index tip.
fn landmarks(extension: f32, pinch: f32) -> Vec<Vec2> {
    let wrist = Vec2::new(0.5, 0.5);
    let mut pts = vec![wrist; LANDMARK_COUNT];
    for &tip in &[8usize, 12, 16, 20] {
        pts[tip] = wrist - Vec2::new(0.0, extension);
    }
    pts[4] = pts[8] + Vec2::new(pinch, 0.0);
    pts[9] = wrist;
    pts
}

#[test]
fn pointer_maps_unit_square_to_signed_range() {
    let mut pts = landmarks(0.3, 0.5);
    pts[9] = Vec2::new(0.5, 0.5);
    let pose = derive_pose(&pts).unwrap();
    assert!(pose.pointer.length() < 1e-6);

    pts[9] = Vec2::new(1.0, 0.0);
    let pose = derive_pose(&pts).unwrap();
    assert!((pose.pointer.x - 1.0).abs() < 1e-6);
    assert!((pose.pointer.y + 1.0).abs() < 1e-6);
}

#[test]
fn derived_distances_match_construction() {
    let pose = derive_pose(&landmarks(0.4, 0.1)).unwrap();
    assert!((pose.avg_extension - 0.4).abs() < 1e-5);
    assert!((pose.pinch_dist - 0.1).abs() < 1e-5);
}

#[test]
fn pinch_rule_wins_over_extension() {
    // Extension alone would say open; the pinch rule has precedence.
    let pose = HandPose {
        pointer: Vec2::ZERO,
        pinch_dist: 0.05,
        avg_extension: 0.5,
    };
    assert_eq!(classify(&pose), Some(GestureClass::Pinch));
}

#[test]
fn extension_thresholds_classify_fist_and_open() {
    let fist = HandPose {
        pointer: Vec2::ZERO,
        pinch_dist: 0.5,
        avg_extension: 0.1,
    };
    assert_eq!(classify(&fist), Some(GestureClass::Fist));

    let open = HandPose {
        pointer: Vec2::ZERO,
        pinch_dist: 0.5,
        avg_extension: 0.45,
    };
    assert_eq!(classify(&open), Some(GestureClass::Open));
}

#[test]
fn hysteresis_gap_emits_no_signal() {
    for ext in [0.22, 0.3, 0.38] {
        let pose = HandPose {
            pointer: Vec2::ZERO,
            pinch_dist: 0.5,
            avg_extension: ext,
        };
        assert_eq!(classify(&pose), None, "extension {ext} should be silent");
    }
}

#[test]
fn repeated_video_timestamp_is_ignored() {
    let mut interp = GestureInterpreter::new();
    let open = landmarks(0.45, 0.5);
    assert_eq!(interp.observe(Some(open.as_slice()), 1.0), Some(GestureClass::Open));
    // Same timestamp again: already analyzed, no signal.
    assert_eq!(interp.observe(Some(open.as_slice()), 1.0), None);
    // Fresh timestamp fires again.
    assert_eq!(interp.observe(Some(open.as_slice()), 1.5), Some(GestureClass::Open));
}

#[test]
fn zero_hand_frame_keeps_previous_pointer() {
    let mut interp = GestureInterpreter::new();
    let mut pts = landmarks(0.45, 0.5);
    pts[9] = Vec2::new(0.75, 0.25);
    interp.observe(Some(pts.as_slice()), 1.0);
    let before = interp.pointer();
    assert!(before.length() > 0.1);

    assert_eq!(interp.observe(None, 2.0), None);
    assert_eq!(interp.pointer(), before);
}

#[test]
fn malformed_landmark_set_is_absorbed() {
    let mut interp = GestureInterpreter::new();
    let short = vec![Vec2::ZERO; 5];
    assert_eq!(interp.observe(Some(short.as_slice()), 1.0), None);
    assert_eq!(interp.pointer(), Vec2::ZERO);
}
