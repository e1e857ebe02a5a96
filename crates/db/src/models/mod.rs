//! Row models and DTOs for the `movie`, `theater`, and `shows` tables.

pub mod movie;
pub mod show;
pub mod theater;
