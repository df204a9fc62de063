pub mod filter;
pub mod model;
pub mod query;
pub mod render;
