pub mod picking;
pub mod systems;
