pub mod contact;
pub mod pages;
pub mod profile;
pub mod projects;
