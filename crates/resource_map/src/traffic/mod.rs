mod animator;
mod scheduler;
mod spawning;
mod systems;
mod throttle;
mod types;

pub use animator::{AnimatorState, TrafficAnimator};
pub use scheduler::{FrameQueue, FrameRequest, FrameScheduler};
pub use spawning::{spawn_vehicles, COMMON_ICONS, SPECIAL_ICONS};
pub use systems::{
    drive_traffic, handle_traffic_control, TrafficConfig, TrafficControl, TrafficPlugin,
    VehiclesMoved,
};
pub use throttle::FrameThrottle;
pub use types::{Direction, Vehicle};
