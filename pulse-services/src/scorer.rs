//! Relevance scoring
//!
//! Deterministic recency decay multiplied by the source weight. Scores
//! always land in [0, 1]; stale items keep a nonzero floor so they never
//! vanish from relevance-ordered views entirely.

use chrono::{DateTime, Utc};

/// Compute the relevance score for one item
///
/// Elapsed hours are floored at 1 so "just now" items do not blow up the
/// decay term. Recency decays linearly and is clamped to a 0.1 floor; the
/// weight acts as a multiplicative ceiling and the product is capped at 1.
pub fn relevance_score(published_at: DateTime<Utc>, weight: f64, now: DateTime<Utc>) -> f64 {
    let hours_ago = now
        .signed_duration_since(published_at)
        .num_minutes() as f64
        / 60.0;
    let hours_ago = hours_ago.max(1.0);

    let recency = (1.2 - hours_ago / 48.0).max(0.1);
    (recency * weight).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_fresh_item_full_weight_scores_one() {
        let now = Utc::now();
        // published exactly now, weight 1.0: min(1, 1.2 * 1.0) = 1.0
        assert_eq!(relevance_score(now, 1.0, now), 1.0);
    }

    #[test]
    fn test_stale_item_hits_floor() {
        let now = Utc::now();
        let old = now - Duration::hours(100);
        // 100h old, weight 1.0: recency clamps to the 0.1 floor
        let score = relevance_score(old, 1.0, now);
        assert!((score - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_weight_scales_the_score() {
        let now = Utc::now();
        let score = relevance_score(now, 0.5, now);
        // min(1, 1.2 * 0.5)
        assert!((score - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_future_timestamps_use_the_hour_floor() {
        let now = Utc::now();
        let future = now + Duration::hours(3);
        let score = relevance_score(future, 1.0, now);
        // negative elapsed clamps to 1h, same as a just-published item
        assert_eq!(score, relevance_score(now, 1.0, now));
    }

    #[test]
    fn test_score_always_in_unit_interval() {
        let now = Utc::now();
        for hours in [0i64, 1, 5, 24, 48, 60, 500] {
            for weight in [0.0, 0.3, 0.75, 1.0] {
                let score = relevance_score(now - Duration::hours(hours), weight, now);
                assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
            }
        }
    }
}
