// Skill taxonomy and text matching shared by every pipeline.

pub mod demand;
pub mod extractor;
pub mod handlers;
pub mod taxonomy;
