use std::cell::RefCell;
use tracing::debug;
use crate::books::domain::Book;
use crate::books::domain::model::{Author, BookEntity};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// CatalogServiceImpl owns a single-threaded, in-memory catalog.
pub struct CatalogServiceImpl {
    branch_id: String,
    book_repository: RefCell<Box<dyn BookRepository>>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository: RefCell::new(book_repository),
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&self, book: &BookEntity) -> LibraryResult<BookEntity> {
        let mut repo = self.book_repository.borrow_mut();
        let _ = repo.create(book)?;
        debug!(branch = self.branch_id.as_str(), book_id = %book.id(),
            title = book.title(), size = repo.count(), "added book");
        Ok(book.clone())
    }

    fn list_books(&self) -> LibraryResult<Vec<BookEntity>> {
        self.book_repository.borrow().find_all()
    }

    fn find_books_by_author(&self, author: &Author) -> LibraryResult<Vec<BookEntity>> {
        let res = self.book_repository.borrow().find_by_author_id(author.author_id())?;
        debug!(branch = self.branch_id.as_str(), author = %author, matches = res.len(), "found books by author");
        Ok(res)
    }
}
