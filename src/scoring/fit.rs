// Fit classification — mapping a similarity score to a discrete label.

/// Discrete fit classification of a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitLabel {
    Strong,
    Medium,
    Weak,
}

impl FitLabel {
    /// Classify a raw cosine similarity. The score is scaled to a
    /// percentage; band edges are inclusive at the lower bound (exactly
    /// 40 is Strong, exactly 20 is Medium). Total over all reals —
    /// negative similarities fall into Weak.
    pub fn from_similarity(similarity: f64) -> Self {
        let percentage = similarity * 100.0;
        if percentage >= 40.0 {
            FitLabel::Strong
        } else if percentage >= 20.0 {
            FitLabel::Medium
        } else {
            FitLabel::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FitLabel::Strong => "Strong",
            FitLabel::Medium => "Medium",
            FitLabel::Weak => "Weak",
        }
    }
}

impl std::fmt::Display for FitLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_forty_is_strong() {
        assert_eq!(FitLabel::from_similarity(0.40), FitLabel::Strong);
    }

    #[test]
    fn test_just_below_forty_is_medium() {
        assert_eq!(FitLabel::from_similarity(0.39999), FitLabel::Medium);
    }

    #[test]
    fn test_exact_twenty_is_medium() {
        assert_eq!(FitLabel::from_similarity(0.20), FitLabel::Medium);
    }

    #[test]
    fn test_just_below_twenty_is_weak() {
        assert_eq!(FitLabel::from_similarity(0.19999), FitLabel::Weak);
    }

    #[test]
    fn test_negative_is_weak() {
        assert_eq!(FitLabel::from_similarity(-0.5), FitLabel::Weak);
        assert_eq!(FitLabel::from_similarity(-1.0), FitLabel::Weak);
    }

    #[test]
    fn test_perfect_match_is_strong() {
        assert_eq!(FitLabel::from_similarity(1.0), FitLabel::Strong);
    }

    #[test]
    fn test_scenario_values() {
        // 0.42 → 42.00% → Strong; 0.195 → 19.50% → Weak
        assert_eq!(FitLabel::from_similarity(0.42), FitLabel::Strong);
        assert_eq!(FitLabel::from_similarity(0.195), FitLabel::Weak);
    }
}
