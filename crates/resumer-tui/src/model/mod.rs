pub mod picker;
pub mod toast;
