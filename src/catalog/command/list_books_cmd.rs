use std::rc::Rc;
use serde::Serialize;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Rc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookEntity>,
}

impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.list_books()
            .map_err(CommandError::from)
            .map(|books| ListBooksCommandResponse { books })
    }
}
