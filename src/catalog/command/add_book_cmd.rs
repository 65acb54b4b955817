use std::rc::Rc;
use serde::Serialize;
use crate::books::domain::Book;
use crate::books::domain::model::{Author, BookEntity};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Rc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: Author,
    pub published_year: i32,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &Author, published_year: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.clone(),
            published_year,
        }
    }

    pub fn build_book(&self) -> BookEntity {
        BookEntity::new(self.title.as_str(), &self.author, self.published_year)
    }
}

impl From<&BookEntity> for AddBookCommandRequest {
    fn from(book: &BookEntity) -> Self {
        AddBookCommandRequest::new(book.title(), book.author(), book.published_year())
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookEntity,
}

impl AddBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::Author;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_add_book() {
        let svc = factory::create_catalog_service(&Configuration::new("test"));
        let cmd = AddBookCommand::new(svc.clone());

        let hugo = Author::new("Hugo", "Victor");
        let res = cmd.execute(AddBookCommandRequest::new("Les Miserables", &hugo, 1862))
            .expect("should add book");
        assert_eq!("Les Miserables", res.book.title());
        assert_eq!(&hugo, res.book.author());
        assert_eq!(vec![res.book], svc.list_books().expect("should list books"));
    }
}
