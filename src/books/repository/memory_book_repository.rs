use crate::books::domain::Book;
use crate::books::domain::model::{AuthorId, BookEntity};
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// MemoryBookRepository keeps books in insertion order for the lifetime of the
// process. It is append-only and does not deduplicate.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Vec<BookEntity>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        self.books.push(entity.clone());
        Ok(1)
    }

    fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.clone())
    }

    fn count(&self) -> usize {
        self.books.len()
    }
}

impl BookRepository for MemoryBookRepository {
    fn find_by_author_id(&self, author_id: AuthorId) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.iter()
            .filter(|b| b.author().author_id() == author_id)
            .cloned()
            .collect())
    }
}
