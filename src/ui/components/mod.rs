mod dialogs;

pub use dialogs::{ConfirmDeleteAllDialog, EditItemDialog, QuantityDialog};
