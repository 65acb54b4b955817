use crate::books::domain::model::{Author, BookEntity};

// SampleCatalog is the fixed data set shown by the catalog demo
#[derive(Debug, Clone)]
pub struct SampleCatalog {
    pub hugo: Author,
    pub dumas: Author,
    pub books: Vec<BookEntity>,
}

pub fn sample_catalog() -> SampleCatalog {
    let hugo = Author::new("Hugo", "Victor");
    let dumas = Author::new("Dumas", "Alexandre");
    let books = vec![
        BookEntity::new("Les Miserables", &hugo, 1862),
        BookEntity::new("Notre-Dame de Paris", &hugo, 1831),
        BookEntity::new("Le Comte de Monte-Cristo", &dumas, 1844),
    ];
    SampleCatalog { hugo, dumas, books }
}
