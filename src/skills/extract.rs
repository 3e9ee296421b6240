// Skill presence detection by substring containment.
//
// A vocabulary term is "present" if it occurs anywhere in the lowercased
// text — deliberately without word-boundary checks. A short term embedded
// in a longer word counts ("java" matches inside "javascript"). This keeps
// multi-word terms like "machine learning" and punctuated terms like
// "node.js" and "c++" working without a tokenizer, at the cost of known
// false positives on short terms. Output order follows vocabulary order.

use super::vocabulary::SkillVocabulary;

/// Return the ordered subset of vocabulary terms present in the text.
/// Matching is case-insensitive substring containment; the result follows
/// vocabulary order, not text order. Deterministic.
pub fn extract_skills(text: &str, vocab: &SkillVocabulary) -> Vec<String> {
    let lowered = text.to_lowercase();
    vocab
        .terms()
        .iter()
        .filter(|term| lowered.contains(term.as_str()))
        .cloned()
        .collect()
}

/// Partition the query's skills into (matched, missing) against a
/// candidate's skills. Both outputs preserve the query-skill order, which
/// is vocabulary order. Together they always cover the query skill set
/// exactly, with no overlap.
pub fn partition_skills(
    query_skills: &[String],
    candidate_skills: &[String],
) -> (Vec<String>, Vec<String>) {
    let (matched, missing) = query_skills
        .iter()
        .cloned()
        .partition(|skill| candidate_skills.contains(skill));
    (matched, missing)
}
