//! Gesture interpreter: hand landmarks in, pointer vector and discrete
//! gesture classification out.
//!
//! Input is the standard 21-point hand landmark layout in normalized [0,1]
//! image coordinates. Inference upstream is expensive, so observation is
//! keyed on the video timestamp and repeats are discarded.

use crate::constants::{FIST_MAX_EXTENSION, OPEN_MIN_EXTENSION, PINCH_MAX_DIST};
use glam::Vec2;
use smallvec::SmallVec;

pub const LANDMARK_COUNT: usize = 21;

const WRIST: usize = 0;
const THUMB_TIP: usize = 4;
const INDEX_TIP: usize = 8;
const PALM: usize = 9;
const FINGERTIPS: [usize; 4] = [8, 12, 16, 20];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureClass {
    Pinch,
    Fist,
    Open,
}

/// Per-frame derived hand signal. Not persisted.
#[derive(Clone, Copy, Debug)]
pub struct HandPose {
    /// Palm position mapped to roughly [-1, 1] per axis.
    pub pointer: Vec2,
    pub pinch_dist: f32,
    pub avg_extension: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum PoseError {
    #[error("expected {LANDMARK_COUNT} hand landmarks, got {0}")]
    WrongLandmarkCount(usize),
}

/// Derives the pose signal from one landmark set.
pub fn derive_pose(landmarks: &[Vec2]) -> Result<HandPose, PoseError> {
    if landmarks.len() != LANDMARK_COUNT {
        return Err(PoseError::WrongLandmarkCount(landmarks.len()));
    }
    let palm = landmarks[PALM];
    let pointer = (palm - Vec2::splat(0.5)) * 2.0;
    let pinch_dist = landmarks[THUMB_TIP].distance(landmarks[INDEX_TIP]);
    let wrist = landmarks[WRIST];
    let tip_dists: SmallVec<[f32; 4]> = FINGERTIPS
        .iter()
        .map(|&i| landmarks[i].distance(wrist))
        .collect();
    let avg_extension = tip_dists.iter().sum::<f32>() / tip_dists.len() as f32;
    Ok(HandPose {
        pointer,
        pinch_dist,
        avg_extension,
    })
}

/// Classification precedence: pinch wins over extension, and extensions in
/// the hysteresis gap produce no signal.
pub fn classify(pose: &HandPose) -> Option<GestureClass> {
    if pose.pinch_dist < PINCH_MAX_DIST {
        Some(GestureClass::Pinch)
    } else if pose.avg_extension < FIST_MAX_EXTENSION {
        Some(GestureClass::Fist)
    } else if pose.avg_extension > OPEN_MIN_EXTENSION {
        Some(GestureClass::Open)
    } else {
        None
    }
}

/// Stateful interpreter: holds the last analyzed video timestamp and the
/// last known pointer. Zero-hand frames leave the pointer untouched.
pub struct GestureInterpreter {
    last_video_time: f64,
    pointer: Vec2,
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        Self {
            last_video_time: -1.0,
            pointer: Vec2::ZERO,
        }
    }
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Processes one video frame's detection result. A repeat of an already
    /// analyzed `video_time` is ignored, as is a frame with no hand.
    pub fn observe(&mut self, landmarks: Option<&[Vec2]>, video_time: f64) -> Option<GestureClass> {
        if video_time == self.last_video_time {
            return None;
        }
        self.last_video_time = video_time;
        let landmarks = landmarks?;
        let pose = match derive_pose(landmarks) {
            Ok(p) => p,
            Err(e) => {
                log::debug!("[gesture] ignoring malformed detection: {e}");
                return None;
            }
        };
        self.pointer = pose.pointer;
        classify(&pose)
    }
}
