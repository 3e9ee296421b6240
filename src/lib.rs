// Shortlist: semantic resume screening against a job description.
//
// This is the library root. Each module corresponds to one stage of the
// screening pipeline.

pub mod config;
pub mod document;
pub mod embedding;
pub mod pipeline;
pub mod report;
pub mod scoring;
pub mod skills;
pub mod text;
