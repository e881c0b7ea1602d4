pub mod link;
pub mod topology;

pub use link::Link;
pub use topology::{DEFAULT_RING, NetworkTopology};
