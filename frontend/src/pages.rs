// marketing
pub mod landing_page;
pub mod about_page;
pub mod marketplace_page;
pub mod services_page;

// vendors
pub mod vendors_join_page;
pub mod vendor_login_page;
pub mod pricing_page;

// help and legal
pub mod help_page;
pub mod support_page;
pub mod privacy_page;
pub mod terms_page;

pub mod not_found_page;
pub mod error_page;
