// Fit classification and ranking.

pub mod fit;
pub mod rank;
