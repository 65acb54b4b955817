use std::io::Write;
use std::rc::Rc;
use serde::Serialize;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::find_books_by_author_cmd::{FindBooksByAuthorCommand, FindBooksByAuthorCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::catalog::sample::sample_catalog;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, OutputFormat};

pub const ALL_BOOKS_HEADING: &str = "Tous les livres de la bibliotheque :";

#[derive(Debug, Serialize)]
struct Listing<'a> {
    heading: &'a str,
    books: &'a [BookEntity],
}

// Writes one listing: the heading followed by one line per book in text
// mode, or a single JSON document per listing in json mode.
pub fn render_listing<W: Write>(out: &mut W, heading: &str, books: &[BookEntity],
                                format: OutputFormat) -> Result<(), CommandError> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", heading).map_err(LibraryError::from)?;
            for book in books {
                writeln!(out, "{}", book).map_err(LibraryError::from)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &Listing { heading, books }).map_err(LibraryError::from)?;
            writeln!(out).map_err(LibraryError::from)?;
        }
    }
    Ok(())
}

pub fn list_books<W: Write>(out: &mut W, svc: Rc<dyn CatalogService>, format: OutputFormat) -> Result<(), CommandError> {
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::default())?;
    render_listing(out, ALL_BOOKS_HEADING, &res.books, format)
}

pub fn find_books_by_author<W: Write>(out: &mut W, svc: Rc<dyn CatalogService>,
                                      req: FindBooksByAuthorCommandRequest, format: OutputFormat) -> Result<(), CommandError> {
    let res = FindBooksByAuthorCommand::new(svc).execute(req)?;
    let heading = format!("Livres de {} :", res.author);
    render_listing(out, heading.as_str(), &res.books, format)
}

// Loads the sample books into a fresh catalog, then prints every book followed
// by the books of Victor Hugo.
pub fn run_demo<W: Write>(out: &mut W, config: &Configuration) -> Result<(), CommandError> {
    let svc = factory::create_catalog_service(config);
    let sample = sample_catalog();

    let add_cmd = AddBookCommand::new(svc.clone());
    for book in &sample.books {
        let _ = add_cmd.execute(AddBookCommandRequest::from(book))?;
    }
    info!(branch = config.branch_id.as_str(), books = sample.books.len(), "loaded sample catalog");

    list_books(out, svc.clone(), config.output_format)?;
    if config.output_format == OutputFormat::Text {
        writeln!(out).map_err(LibraryError::from)?;
    }
    find_books_by_author(out, svc, FindBooksByAuthorCommandRequest::new(&sample.hugo), config.output_format)
}
