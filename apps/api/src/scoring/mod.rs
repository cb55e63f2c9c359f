// ATS scoring engine: skill normalization, resume text matching, and the
// weighted skill-declaration score. The scorers are pure functions; only
// handlers.rs touches the filesystem, via the extraction collaborator.

pub mod handlers;
pub mod skill;
pub mod text_match;
pub mod weighted;
