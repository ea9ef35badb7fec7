// chrome around every view
pub mod navbar;
pub mod home_button;
pub mod footer;
