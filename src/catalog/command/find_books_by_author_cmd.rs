use std::rc::Rc;
use serde::Serialize;
use crate::books::domain::model::{Author, BookEntity};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct FindBooksByAuthorCommand {
    catalog_service: Rc<dyn CatalogService>,
}

impl FindBooksByAuthorCommand {
    pub fn new(catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct FindBooksByAuthorCommandRequest {
    pub author: Author,
}

impl FindBooksByAuthorCommandRequest {
    pub fn new(author: &Author) -> Self {
        Self {
            author: author.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FindBooksByAuthorCommandResponse {
    pub author: Author,
    pub books: Vec<BookEntity>,
}

impl Command<FindBooksByAuthorCommandRequest, FindBooksByAuthorCommandResponse> for FindBooksByAuthorCommand {
    fn execute(&self, req: FindBooksByAuthorCommandRequest) -> Result<FindBooksByAuthorCommandResponse, CommandError> {
        let books = self.catalog_service.find_books_by_author(&req.author)?;
        Ok(FindBooksByAuthorCommandResponse { author: req.author, books })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::{Author, BookEntity};
    use crate::catalog::command::find_books_by_author_cmd::{FindBooksByAuthorCommand, FindBooksByAuthorCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_find_books_by_author() {
        let svc = factory::create_catalog_service(&Configuration::new("test"));
        let camus = Author::new("Camus", "Albert");
        let sartre = Author::new("Sartre", "Jean-Paul");
        let _ = svc.add_book(&BookEntity::new("L'Etranger", &camus, 1942)).expect("should add book");
        let _ = svc.add_book(&BookEntity::new("La Nausee", &sartre, 1938)).expect("should add book");
        let _ = svc.add_book(&BookEntity::new("La Peste", &camus, 1947)).expect("should add book");

        let cmd = FindBooksByAuthorCommand::new(svc);
        let res = cmd.execute(FindBooksByAuthorCommandRequest::new(&camus)).expect("should find books");
        assert_eq!(camus, res.author);
        assert_eq!(vec!["L'Etranger", "La Peste"], res.books.iter().map(|b| b.title()).collect::<Vec<_>>());

        let res = cmd.execute(FindBooksByAuthorCommandRequest::new(&Author::new("Gide", "Andre")))
            .expect("should find books");
        assert!(res.books.is_empty());
    }
}
