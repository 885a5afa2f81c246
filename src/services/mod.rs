pub mod audit;
pub mod championships;
pub mod extraction;
pub mod players;
