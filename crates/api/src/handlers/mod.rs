pub mod booking;
pub mod center;
pub mod court;
pub mod sport;
