//! Domain layer - Business logic and domain models

pub mod entry;
pub mod journal;

pub use entry::{Entry, TIMESTAMP_FORMAT};
pub use journal::{Journal, Repairs};
