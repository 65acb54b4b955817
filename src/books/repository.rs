pub mod memory_book_repository;

use crate::books::domain::model::{AuthorId, BookEntity};
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

pub trait BookRepository: Repository<BookEntity> {
    fn find_by_author_id(&self, author_id: AuthorId) -> LibraryResult<Vec<BookEntity>>;
}
