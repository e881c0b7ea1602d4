pub mod engine;
pub mod scenario;
pub mod topology;
pub mod utils;
