//! Row structs and request DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO mirroring the JSON body, every field optional
//! - A validated insert struct produced by the DTO's `validate` method

pub mod booking;
pub mod center;
pub mod court;
pub mod sport;
