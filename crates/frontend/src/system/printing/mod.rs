pub mod print_dialog;

pub use print_dialog::PrintDialog;
