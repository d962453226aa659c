pub mod service;

use async_trait::async_trait;
use uuid::Uuid;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn get_all_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn get_book_by_id(&self, id: &Uuid) -> LibraryResult<Option<BookDto>>;
    async fn create_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn delete_book(&self, id: &Uuid) -> LibraryResult<bool>;
    async fn search_book(&self, title: &str) -> LibraryResult<Vec<BookDto>>;
}
