use std::sync::Arc;

use crate::prediction::sources::{Clock, RandomSource};
use crate::skills::taxonomy::SkillTaxonomy;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Nothing here is mutable per request; the seeded random source synchronizes internally.
#[derive(Clone)]
pub struct AppState {
    pub taxonomy: &'static SkillTaxonomy,
    /// Default: ThreadRandom. SeededRandom when RNG_SEED is set.
    pub random: Arc<dyn RandomSource>,
    pub clock: Arc<dyn Clock>,
}
