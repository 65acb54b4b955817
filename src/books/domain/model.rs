use std::fmt;
use std::fmt::{Display, Formatter};
use serde::Serialize;
use uuid::Uuid;
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// AuthorId is minted once per constructed author, so clones share it and
// separately constructed authors never do.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
pub struct AuthorId(Uuid);

impl AuthorId {
    fn generate() -> Self {
        AuthorId(Uuid::new_v4())
    }
}

impl Display for AuthorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named individual associated with one or more books.
///
/// Two authors are equal when they carry the same [`AuthorId`], not when
/// their names match: `Author::new("Hugo", "Victor")` called twice yields two
/// distinct authors, while clones of one author compare equal.
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    author_id: AuthorId,
    family_name: String,
    given_name: String,
}

impl Author {
    pub fn new(family_name: &str, given_name: &str) -> Self {
        Self {
            author_id: AuthorId::generate(),
            family_name: family_name.to_string(),
            given_name: given_name.to_string(),
        }
    }

    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn given_name(&self) -> &str {
        &self.given_name
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.author_id == other.author_id
    }
}

impl Eq for Author {}

impl Identifiable for Author {
    fn id(&self) -> String {
        self.author_id.to_string()
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.given_name, self.family_name)
    }
}

// BookEntity is a titled work with one author and a publication year. The
// author does not have to be known to any catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookEntity {
    book_id: String,
    title: String,
    author: Author,
    published_year: i32,
}

impl BookEntity {
    pub fn new(title: &str, author: &Author, published_year: i32) -> Self {
        Self {
            book_id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            author: author.clone(),
            published_year,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &Author {
        &self.author
    }

    fn published_year(&self) -> i32 {
        self.published_year
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} par {} ({}).", self.title, self.author, self.published_year)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::{Author, BookEntity};
    use crate::core::domain::Identifiable;

    #[test]
    fn test_should_build_author() {
        let author = Author::new("Hugo", "Victor");
        assert_eq!("Hugo", author.family_name());
        assert_eq!("Victor", author.given_name());
        assert_eq!("Victor Hugo", author.to_string());
    }

    #[test]
    fn test_should_compare_authors_by_identity() {
        let hugo = Author::new("Hugo", "Victor");
        let namesake = Author::new("Hugo", "Victor");
        assert_eq!(hugo, hugo.clone());
        assert_ne!(hugo, namesake);
        assert_ne!(hugo.id(), namesake.id());
    }

    #[test]
    fn test_should_build_books() {
        let hugo = Author::new("Hugo", "Victor");
        let book = BookEntity::new("Les Miserables", &hugo, 1862);
        assert_eq!("Les Miserables", book.title());
        assert_eq!(&hugo, book.author());
        assert_eq!(1862, book.published_year());
        assert!(!book.id().is_empty());
    }

    #[test]
    fn test_should_format_book() {
        let dumas = Author::new("Dumas", "Alexandre");
        let book = BookEntity::new("Le Comte de Monte-Cristo", &dumas, 1844);
        assert_eq!("Le Comte de Monte-Cristo par Alexandre Dumas (1844).", book.to_string());
    }

    #[test]
    fn test_should_serialize_book() {
        let dumas = Author::new("Dumas", "Alexandre");
        let book = BookEntity::new("Le Comte de Monte-Cristo", &dumas, 1844);
        let json = serde_json::to_value(&book).expect("serialize book");
        assert_eq!("Le Comte de Monte-Cristo", json["title"]);
        assert_eq!("Dumas", json["author"]["family_name"]);
        assert_eq!(1844, json["published_year"]);
    }
}
