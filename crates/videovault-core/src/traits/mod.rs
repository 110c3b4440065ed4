//! Core traits defined in `videovault-core` and implemented by other crates.

pub mod clock;
pub mod id_generator;
pub mod repository;

pub use clock::{Clock, ManualClock, SystemClock};
pub use id_generator::{IdGenerator, SequentialIdGenerator, TokenIdGenerator};
pub use repository::Repository;
