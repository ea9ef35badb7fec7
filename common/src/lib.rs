pub mod auth;
pub mod catalog;
pub mod contact;
pub mod faq;
pub mod models;
pub mod views;

pub use models::*;
pub use views::{resolve, ViewId, HOME_KEY};
