pub mod details;
pub mod record;
