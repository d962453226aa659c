use crate::books::dto::BookDto;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

pub fn create_catalog_service(config: &Configuration, seed: &[BookDto]) -> LibraryResult<Box<dyn CatalogService>> {
    let book_repo = factory::create_book_repository(seed);
    Ok(Box::new(CatalogServiceImpl::new(config, book_repo)?))
}
