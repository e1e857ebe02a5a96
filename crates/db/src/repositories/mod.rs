//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod movie_repo;
pub mod show_repo;
pub mod theater_repo;

pub use movie_repo::MovieRepo;
pub use show_repo::ShowRepo;
pub use theater_repo::TheaterRepo;
