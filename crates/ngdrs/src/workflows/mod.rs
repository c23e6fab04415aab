pub mod cases;
pub mod register;
