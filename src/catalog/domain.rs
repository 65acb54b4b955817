pub mod service;

use crate::books::domain::model::{Author, BookEntity};
use crate::core::library::LibraryResult;

pub trait CatalogService {
    fn add_book(&self, book: &BookEntity) -> LibraryResult<BookEntity>;
    fn list_books(&self) -> LibraryResult<Vec<BookEntity>>;
    fn find_books_by_author(&self, author: &Author) -> LibraryResult<Vec<BookEntity>>;
}
