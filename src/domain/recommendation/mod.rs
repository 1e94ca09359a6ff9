//! Space and process recommendation with selection feedback.

mod feedback;
mod grade;
mod process;
mod recommender;
mod space;

pub use feedback::apply_selection_deltas;
pub use grade::{recommend_grade, BudgetRange, Grade};
pub use process::{
    by_rank, sort_by_rank, CostEstimate, ProcessPriority, RecommendedProcess, OTHER_CATEGORY,
    SELECTED_PROCESS_SCORE,
};
pub use recommender::{Recommendation, SpaceProcessRecommender};
pub use space::{rank_spaces, PrioritySpace};
