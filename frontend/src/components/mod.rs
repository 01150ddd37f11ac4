pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod portfolio;
pub mod process;
pub mod reveal;
pub mod services;
pub mod stats;
pub mod testimonials;
