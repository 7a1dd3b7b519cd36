pub mod setup;
pub mod shapes;
