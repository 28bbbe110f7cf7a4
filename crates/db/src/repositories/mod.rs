//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod booking_repo;
pub mod center_repo;
pub mod court_repo;
pub mod sport_repo;

pub use booking_repo::BookingRepo;
pub use center_repo::CenterRepo;
pub use court_repo::CourtRepo;
pub use sport_repo::SportRepo;
