pub mod camera;
pub mod choreography;
pub mod constants;
pub mod engine;
pub mod gesture;
pub mod integrator;
pub mod mode;
pub mod scene;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::Camera;
pub use engine::{SceneEngine, SceneParams};
pub use gesture::{GestureClass, GestureInterpreter, HandPose, LANDMARK_COUNT};
pub use integrator::ContainerOrientation;
pub use mode::{Mode, ModeResolver};
pub use scene::{ObjectKind, SceneRegistry, Transform, VisualObject};
