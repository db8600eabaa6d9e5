pub mod api;
pub mod args;
pub mod export;
pub mod model;
pub mod query;
pub mod utils;
