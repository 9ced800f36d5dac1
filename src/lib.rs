pub mod input;
pub mod output;
pub mod stats;
pub mod summary;
