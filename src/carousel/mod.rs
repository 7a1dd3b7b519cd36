pub mod assets;
pub mod components;
pub mod events;
pub mod state;
pub mod systems;
