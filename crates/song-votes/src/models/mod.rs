//! Domain models for song recommendations
//!
//! These types are shared by the storage gateway, the scoring service and the
//! HTTP layer. The persisted shape of a recommendation is exactly
//! `{ id, name, link, score }`.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::entities::recommendations;

/// Storage-assigned identifier of a recommendation
pub type RecommendationId = i32;

/// A submitted song suggestion with a mutable popularity score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: RecommendationId,
    pub name: String,
    pub link: String,
    pub score: i32,
}

impl From<recommendations::Model> for Recommendation {
    fn from(model: recommendations::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            link: model.link,
            score: model.score,
        }
    }
}

/// Data required to create a recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationCreateRequest {
    pub name: String,
    pub link: String,
}

impl RecommendationCreateRequest {
    pub fn new<N: Into<String>, L: Into<String>>(name: N, link: L) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }
}

/// Score predicate used to pick the candidate pool for random selection
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum ScoreFilter {
    /// `score > threshold`
    #[strum(serialize = "gt")]
    #[serde(rename = "gt")]
    GreaterThan,
    /// `score <= threshold`
    #[strum(serialize = "lte")]
    #[serde(rename = "lte")]
    LessThanOrEqual,
}

impl ScoreFilter {
    /// The complementary filter; together the two partition every score
    pub fn other(self) -> Self {
        match self {
            Self::GreaterThan => Self::LessThanOrEqual,
            Self::LessThanOrEqual => Self::GreaterThan,
        }
    }

    /// Whether `score` passes this filter against `threshold`
    pub fn matches(self, score: i32, threshold: i32) -> bool {
        match self {
            Self::GreaterThan => score > threshold,
            Self::LessThanOrEqual => score <= threshold,
        }
    }
}

/// Result of a downvote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VoteOutcome {
    /// The score was lowered and the recommendation is still live
    Updated(Recommendation),
    /// The score fell below the eviction threshold and the row was removed
    Evicted { id: RecommendationId },
}

impl VoteOutcome {
    pub fn is_evicted(&self) -> bool {
        matches!(self, Self::Evicted { .. })
    }

    /// The surviving recommendation, if the vote did not evict it
    pub fn recommendation(&self) -> Option<&Recommendation> {
        match self {
            Self::Updated(recommendation) => Some(recommendation),
            Self::Evicted { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_score_filter_tags() {
        assert_eq!(ScoreFilter::GreaterThan.to_string(), "gt");
        assert_eq!(ScoreFilter::LessThanOrEqual.as_ref(), "lte");
        assert_eq!(ScoreFilter::from_str("lte").unwrap(), ScoreFilter::LessThanOrEqual);
        assert!(ScoreFilter::from_str("eq").is_err());
    }

    #[test]
    fn test_score_filters_partition_scores() {
        for score in -10..=30 {
            let gt = ScoreFilter::GreaterThan.matches(score, 10);
            let lte = ScoreFilter::GreaterThan.other().matches(score, 10);
            assert_ne!(gt, lte, "score {score} must fall in exactly one bucket");
        }
    }

    #[test]
    fn test_vote_outcome_serialization() {
        let updated = VoteOutcome::Updated(Recommendation {
            id: 3,
            name: "Song".to_string(),
            link: "https://www.youtube.com/watch?v=abc".to_string(),
            score: -2,
        });
        let json = serde_json::to_value(&updated).unwrap();
        assert_eq!(json["outcome"], "updated");
        assert_eq!(json["score"], -2);

        let evicted = serde_json::to_value(VoteOutcome::Evicted { id: 3 }).unwrap();
        assert_eq!(evicted, serde_json::json!({ "outcome": "evicted", "id": 3 }));
    }
}
