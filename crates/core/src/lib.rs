//! Domain layer for the show directory.
//!
//! Holds the show/movie/theater shapes, input validation, the error type,
//! and the [`directory::ShowDirectory`] that coordinates the store.

pub mod directory;
pub mod error;
pub mod show;
pub mod types;
