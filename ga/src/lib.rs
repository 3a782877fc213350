use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod individual;
pub mod io;
pub mod mating_pool;
pub mod opt;
pub mod population;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
