use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

const EMPTY_SEARCH_MESSAGE: &str = "Lütfen bir arama kriteri girin";
const NO_RESULTS_MESSAGE: &str = "Sonuç bulunamadı";

pub struct CatalogServiceImpl {
    search_min_chars: usize,
    search_max_chars: usize,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> LibraryResult<Self> {
        config.validate()?;
        Ok(Self {
            search_min_chars: config.search_min_chars,
            search_max_chars: config.search_max_chars,
            book_repository,
        })
    }

    // Blank input is reported before the length check. Length is the number of
    // Unicode scalar values, so "😀" counts as one (not bytes, not UTF-16 units).
    fn validate_search_title(&self, title: &str) -> LibraryResult<()> {
        if title.trim().is_empty() {
            return Err(LibraryError::validation(EMPTY_SEARCH_MESSAGE, Some("400".to_string())));
        }
        let len = title.chars().count();
        if len < self.search_min_chars || len > self.search_max_chars {
            return Err(LibraryError::validation(
                format!("Lütfen {} ila {} karakter uzunluğu arasında bir değer giriniz",
                        self.search_min_chars, self.search_max_chars).as_str(), Some("400".to_string())));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn get_all_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.find_all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn get_book_by_id(&self, id: &Uuid) -> LibraryResult<Option<BookDto>> {
        let res = self.book_repository.find_by_id(id).await?;
        Ok(res.as_ref().map(BookDto::from))
    }

    async fn create_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        if self.book_repository.find_by_title(book.title()).await?.is_some() {
            warn!(title = book.title(), "rejected book with existing title");
            return Err(LibraryError::validation(
                format!("A book with the title {} already exists.", book.title()).as_str(), Some("409".to_string())));
        }
        let saved = self.book_repository.save(&BookEntity::from(book)).await?;
        info!(book_id = %saved.book_id, title = saved.title(), "added book");
        Ok(BookDto::from(&saved))
    }

    async fn delete_book(&self, id: &Uuid) -> LibraryResult<bool> {
        let deleted = self.book_repository.delete_by_id(id).await?;
        info!(book_id = %id, deleted, "removed book");
        Ok(deleted)
    }

    async fn search_book(&self, title: &str) -> LibraryResult<Vec<BookDto>> {
        self.validate_search_title(title)?;
        let res = self.book_repository.search_by_title(title).await?;
        info!(title, matches = res.len(), "searched books");
        if res.is_empty() {
            return Err(LibraryError::validation(NO_RESULTS_MESSAGE, Some("404".to_string())));
        }
        Ok(res.iter().map(BookDto::from).collect())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            published_year: other.published_year,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            published_year: other.published_year,
        }
    }
}
