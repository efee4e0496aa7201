//! Document reading: raw upload bytes → plain text → contact details.
//!
//! Nothing in here returns an error. Failures degrade to empty text or absent
//! fields, and callers must treat blank text as "could not read".

pub mod details;
pub mod text;
