pub mod dates;
pub mod stars;
