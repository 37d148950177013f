pub mod choice;
pub mod input;
