//! Abandonment scoring.

/// Computes the abandonment score. Higher is a better candidate for featuring.
///
/// `(stars / 1000) * (days_since_commit / 365) * (1 / (open_issues + 1))`
///
/// Popular, long-dormant repositories with few open issues score highest.
pub fn score(stars: u32, days_since_commit: u64, open_issues: u32) -> f64 {
    let star_factor = f64::from(stars) / 1000.0;
    let abandonment_factor = days_since_commit as f64 / 365.0;
    let issue_factor = 1.0 / (f64::from(open_issues) + 1.0);

    star_factor * abandonment_factor * issue_factor
}

/// Rounds a score to two decimal places for display and storage.
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn matches_formula() {
        assert!(close(score(1000, 365, 0), 1.0));
        assert!(close(score(2000, 730, 1), 2.0));
        assert!(close(score(5000, 500, 10), 5.0 * (500.0 / 365.0) / 11.0));
    }

    #[test]
    fn zero_stars_scores_zero() {
        assert_eq!(score(0, 10_000, 0), 0.0);
        assert_eq!(score(0, 1, 500), 0.0);
    }

    #[test]
    fn never_negative() {
        for stars in [0, 1, 1000, u32::MAX] {
            for days in [0, 1, 365, 100_000] {
                for issues in [0, 1, 50, u32::MAX] {
                    assert!(score(stars, days, issues) >= 0.0);
                }
            }
        }
    }

    #[test]
    fn increasing_in_stars_and_days() {
        assert!(score(1001, 400, 3) > score(1000, 400, 3));
        assert!(score(1000, 401, 3) > score(1000, 400, 3));
    }

    #[test]
    fn decreasing_in_issues() {
        assert!(score(1000, 400, 3) > score(1000, 400, 4));
        assert!(score(1000, 400, 0) > score(1000, 400, 1));
    }

    #[test]
    fn rounding() {
        assert_eq!(round_score(score(5000, 500, 10)), 0.62);
        assert_eq!(round_score(score(1200, 400, 50)), 0.03);
        assert_eq!(round_score(0.004), 0.0);
        assert_eq!(round_score(1.005_1), 1.01);
    }
}
