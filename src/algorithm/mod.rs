/// Swap-based pattern balancing
pub mod balance;
/// Toroidal Gaussian energy field and cluster/void queries
pub mod energy;
/// Generation pipeline, configuration and progress observation
pub mod executor;
/// Rank assignment and rank-to-intensity conversion
pub mod ranking;
/// Initial pattern strategies
pub mod seeding;
/// Deterministic extreme-value selection
pub mod selection;
