//! File boundary: ranked-pool loading and draft-result export.

pub mod export;
pub mod pool;

pub use export::{write_draft_order, write_players};
pub use pool::load_pool;
