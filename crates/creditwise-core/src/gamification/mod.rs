pub mod achievements;
pub mod progression;
pub mod streak;
