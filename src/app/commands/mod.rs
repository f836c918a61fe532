pub mod generate;
pub mod modes;
