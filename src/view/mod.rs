pub mod about;
pub mod chrome;
pub mod pages;
