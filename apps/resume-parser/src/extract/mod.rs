//! Field extractors. Each pass reads the shared resume text and produces one field;
//! none of them depends on another's output.

pub mod email;
pub mod names;
pub mod phone;
pub mod skills;
pub mod years;

pub use email::extract_emails;
pub use names::extract_person_names;
pub use phone::extract_phone_numbers;
pub use skills::{extract_skills, SkillProfile};
pub use years::extract_years;
