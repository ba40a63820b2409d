// The changes suggested by this lint usually make the code more cluttered and less clear:
#![allow(clippy::needless_range_loop)]

pub mod entrance_names;
pub mod item_pool;
pub mod multiworld;
pub mod regions;
pub mod settings;
pub mod spoiler_log;
pub mod traverse;
