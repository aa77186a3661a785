pub mod components;
pub mod error;
pub mod events;
pub mod plugins;
pub mod resources;
pub mod systems;
