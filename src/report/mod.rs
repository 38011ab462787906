pub mod descriptor;
pub mod catalog;
pub mod format;
pub mod profile;
