pub mod media_entity;
pub mod search_job;
pub mod serp_result;

pub use media_entity::*;
pub use search_job::*;
pub use serp_result::*;
