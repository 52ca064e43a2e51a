mod filter;
mod jitter;
mod pass;
mod systems;

pub use filter::{district_counts, ResourceFilter};
pub use jitter::{JitterMode, JitterSource, RerollJitter, StableJitter};
pub use pass::{reflow, MapEntry};
pub use systems::{reflow_visible, ReflowPlugin};
