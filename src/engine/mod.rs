pub mod builder;
pub mod check;
pub mod render;
