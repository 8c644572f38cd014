//! Database layer - connection pool

pub mod pool;

pub use pool::create_pool;
