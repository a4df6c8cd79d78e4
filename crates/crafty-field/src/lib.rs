pub mod constants;
pub mod field;
pub mod frame;
pub mod geometry;
pub mod motion;
pub mod pointer;
pub mod profile;
pub mod render;
pub mod session;

pub use constants::*;
pub use field::{Field, Point};
pub use frame::{FrameThrottle, LoopState, RenderLoop, Tick};
pub use motion::{MotionDriver, TaskHandle};
pub use pointer::PointerTracker;
pub use profile::{is_mobile_user_agent, select_profile, DeviceClass, EnvironmentHints, Profile};
pub use render::{activity_for_distance, draw_frame, FrameStats, Rgba, Surface};
pub use session::{AnimationSession, SessionStats};
