// Sentence embedding — the semantic half of the match score.

pub mod download;
pub mod onnx;
pub mod similarity;
pub mod traits;
