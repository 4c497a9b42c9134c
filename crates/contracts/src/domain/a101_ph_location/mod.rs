pub mod dto;
pub mod rank;

pub use dto::*;
pub use rank::LocationRank;
