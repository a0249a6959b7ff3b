//! Background Tasks Module
//!
//! Tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Expiration reaper: sweeps expired entries at a configured interval

mod reaper;

pub(crate) use reaper::spawn_reaper;
