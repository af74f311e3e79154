pub mod compare;
pub mod format;
pub mod generate;
pub mod info;
