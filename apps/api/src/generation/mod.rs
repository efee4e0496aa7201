//! Tailored resume templates and the document renderer seam.

pub mod handlers;
pub mod renderer;
pub mod template;
