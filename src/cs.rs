pub mod graph;
pub mod randomized;

// Re-export all modules
pub use graph::*;
pub use randomized::*;
