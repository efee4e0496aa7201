//! Skill detection and scoring: vocabulary → matcher → score → feedback.
//! All pure, synchronous, and deterministic.

pub mod feedback;
pub mod jd;
pub mod matcher;
pub mod scoring;
pub mod vocabulary;
