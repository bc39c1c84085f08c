pub mod console;
pub mod display;
