mod inventory;
mod splash;

pub use inventory::InventoryScreen;
pub use splash::SplashScreen;

pub(crate) use inventory::UiAction;
