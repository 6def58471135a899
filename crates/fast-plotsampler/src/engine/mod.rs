//! Layer 5: Engine
//!
//! This layer distributes independent sampling runs across CPU cores.

// Parallel and sequential batch runners
pub mod executor;
