// Skill vocabulary and keyword extraction.

pub mod extract;
pub mod vocabulary;
