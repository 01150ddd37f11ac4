pub mod animation;
pub mod clipboard;
pub mod contact;
pub mod dom;
pub mod navigation;
