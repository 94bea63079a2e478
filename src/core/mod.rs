// Core algorithm exports
pub mod distance;
pub mod ranker;
pub mod scoring;
pub mod skills;

pub use distance::{bounds_of, haversine_distance};
pub use ranker::{Ranker, RankingResult, DEFAULT_LIMIT};
pub use scoring::{calculate_score, normalize_distance, RankingError};
pub use skills::{normalize_skill, skill_match, unique_skills, SkillMatch, SkillSet};
