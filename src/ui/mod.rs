mod app;
mod components;
mod screens;
mod theme;

pub use app::{launch_gui, InventoryApp};
