pub mod range;
pub mod tiles;
