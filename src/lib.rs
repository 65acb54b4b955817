pub mod books;
pub mod catalog;
pub mod core;
pub mod factorial;
pub mod utils;
