//! Background Tasks Module
//!
//! # Tasks
//! - Expiry sweep: purges expired cache entries at a fixed interval

mod sweeper;

pub use sweeper::spawn_sweeper;
