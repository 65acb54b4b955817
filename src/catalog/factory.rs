use std::rc::Rc;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;

pub fn create_catalog_service(config: &Configuration) -> Rc<dyn CatalogService> {
    let book_repo = Box::new(MemoryBookRepository::new());
    Rc::new(CatalogServiceImpl::new(config, book_repo))
}
