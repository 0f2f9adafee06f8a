//! Data model types.

mod age_group;
mod birth_record;
mod month;

pub use age_group::AgeGroup;
pub use birth_record::{BirthRecord, BirthTable};
pub use month::Month;
