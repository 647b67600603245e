mod dialog;

pub use dialog::AckDialog;
