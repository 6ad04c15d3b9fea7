//! Service layer for business logic
//!
//! Services sit between the web handlers and the storage gateway. They own
//! validation, the voting rules and the weighted random pick, and convert
//! repository errors into business errors.
//!
//! # Usage
//!
//! ```rust
//! use song_votes::repositories::InMemoryRecommendationRepository;
//! use song_votes::services::{RecommendationService, ScoringService};
//! use std::sync::Arc;
//!
//! let service = ScoringService::new(Arc::new(InMemoryRecommendationRepository::new()));
//! let service: Arc<dyn RecommendationService> = Arc::new(service);
//! ```

pub mod scoring;
pub mod traits;

pub use scoring::{
    EVICTION_THRESHOLD, POPULAR_DRAW_PROBABILITY, POPULARITY_THRESHOLD, ScoringService,
    get_score_filter,
};
pub use traits::RecommendationService;
