//! Static tables: answer impacts, space weights, process rules, feedback
//! deltas, classifications and scenario templates.
//!
//! Tables are plain data. The embedded document ships with the binary and
//! can be replaced at startup through `catalog.path`.

mod loader;
mod tables;

pub use loader::CatalogError;
pub use tables::{
    Catalog, ProcessRule, SpaceDefinition, DEFAULT_HIGH_COST_THRESHOLD, DEFAULT_SPACE_BONUS,
};
