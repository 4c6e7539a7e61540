pub mod category;
pub mod reading;
pub mod screen;
