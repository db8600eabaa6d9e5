pub mod match_outcome;
pub mod resolved_outcome;
pub mod side;
