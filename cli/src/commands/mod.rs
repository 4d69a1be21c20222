pub mod calendar;
pub mod generate;
pub mod resolve;
