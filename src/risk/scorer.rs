use crate::models::{MatchSet, RiskLevel};

/// Highest score still classified as [`RiskLevel::Low`].
pub const LOW_MAX: usize = 2;
/// Highest score still classified as [`RiskLevel::Moderate`].
pub const MODERATE_MAX: usize = 4;

/// Number of distinct categories with at least one match.
///
/// Additional matches inside an already-matched category never raise the score.
pub fn score(matches: &MatchSet) -> usize {
    matches.matched().count()
}

/// Map a score onto the three risk tiers.
///
/// - `0..=2` → Low
/// - `3..=4` → Moderate
/// - `5..`   → High
pub fn classify(score: usize) -> RiskLevel {
    match score {
        0..=LOW_MAX => RiskLevel::Low,
        s if s <= MODERATE_MAX => RiskLevel::Moderate,
        _ => RiskLevel::High,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn match_set(names: &[&str]) -> MatchSet {
        let categories: Vec<Category> = names.iter().map(|n| Category::new(*n, ["x"])).collect();
        MatchSet::for_categories(&categories)
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(classify(0), RiskLevel::Low);
        assert_eq!(classify(2), RiskLevel::Low);
        assert_eq!(classify(3), RiskLevel::Moderate);
        assert_eq!(classify(4), RiskLevel::Moderate);
        assert_eq!(classify(5), RiskLevel::High);
        assert_eq!(classify(usize::MAX), RiskLevel::High);
    }

    #[test]
    fn test_score_counts_categories_not_matches() {
        let mut m = match_set(&["Tracking", "Location", "Advertising"]);
        assert_eq!(score(&m), 0);

        m.record(0, "track");
        assert_eq!(score(&m), 1);

        // Another hit in a matched category leaves the score alone
        m.record(0, "cookie");
        m.record(0, "track");
        assert_eq!(score(&m), 1);

        // A hit in a new category adds exactly one
        m.record(2, "ads");
        assert_eq!(score(&m), 2);
    }
}
