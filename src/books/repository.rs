pub mod memory_book_repository;

use async_trait::async_trait;
use uuid::Uuid;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;


#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Sync + Send {
    // all books in insertion order
    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>>;

    async fn find_by_id(&self, id: &Uuid) -> LibraryResult<Option<BookEntity>>;

    // exact title match
    async fn find_by_title(&self, title: &str) -> LibraryResult<Option<BookEntity>>;

    async fn save(&self, entity: &BookEntity) -> LibraryResult<BookEntity>;

    // returns false when nothing was stored under the id
    async fn delete_by_id(&self, id: &Uuid) -> LibraryResult<bool>;

    // books whose title contains the given text, case-sensitive
    async fn search_by_title(&self, title: &str) -> LibraryResult<Vec<BookEntity>>;
}
