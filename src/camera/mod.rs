pub mod components;
pub mod projection;
pub mod setup;
pub mod systems;
