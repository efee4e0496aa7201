//! Resume analysis: the end-to-end pipeline and its HTTP surface.

pub mod handlers;
pub mod pipeline;
