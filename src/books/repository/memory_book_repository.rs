use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<BookEntity>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().await.clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> LibraryResult<Option<BookEntity>> {
        let books = self.books.read().await;
        Ok(books.iter().find(|b| b.id() == *id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> LibraryResult<Option<BookEntity>> {
        let books = self.books.read().await;
        Ok(books.iter().find(|b| b.title() == title).cloned())
    }

    async fn save(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let mut books = self.books.write().await;
        if books.iter().any(|b| b.id() == entity.id()) {
            return Err(LibraryError::duplicate_key(
                format!("book {} already exists", entity.book_id).as_str()));
        }
        books.push(entity.clone());
        Ok(entity.clone())
    }

    async fn delete_by_id(&self, id: &Uuid) -> LibraryResult<bool> {
        let mut books = self.books.write().await;
        let before = books.len();
        books.retain(|b| b.id() != *id);
        Ok(books.len() != before)
    }

    async fn search_by_title(&self, title: &str) -> LibraryResult<Vec<BookEntity>> {
        let books = self.books.read().await;
        Ok(books.iter().filter(|b| b.title().contains(title)).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_save_and_get_book() {
        let repo = MemoryBookRepository::new();
        let book = BookEntity::new("Dune", "Frank Herbert", 1965);
        let saved = repo.save(&book).await.expect("should save book");
        assert_eq!(book, saved);

        let loaded = repo.find_by_id(&book.book_id).await.expect("should query book");
        assert_eq!(Some(book.clone()), loaded);
        let loaded = repo.find_by_title("Dune").await.expect("should query book");
        assert_eq!(Some(book), loaded);
    }

    #[tokio::test]
    async fn test_should_not_find_missing_book() {
        let repo = MemoryBookRepository::new();
        assert_eq!(None, repo.find_by_id(&Uuid::new_v4()).await.expect("should query book"));
        assert_eq!(None, repo.find_by_title("Dune").await.expect("should query book"));
    }

    #[tokio::test]
    async fn test_should_match_exact_title_only() {
        let repo = MemoryBookRepository::with_books(vec![BookEntity::new("Dune Messiah", "Frank Herbert", 1969)]);
        assert_eq!(None, repo.find_by_title("Dune").await.expect("should query book"));
        assert_eq!(None, repo.find_by_title("dune messiah").await.expect("should query book"));
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_id() {
        let repo = MemoryBookRepository::new();
        let book = BookEntity::new("Dune", "Frank Herbert", 1965);
        let _ = repo.save(&book).await.expect("should save book");
        let err = repo.save(&book).await.expect_err("should reject book");
        assert!(matches!(err, LibraryError::DuplicateKey{ message: _ }));
        assert_eq!(1, repo.find_all().await.expect("should list books").len());
    }

    #[tokio::test]
    async fn test_should_delete_book() {
        let book = BookEntity::new("Dune", "Frank Herbert", 1965);
        let repo = MemoryBookRepository::with_books(vec![book.clone()]);
        assert!(repo.delete_by_id(&book.book_id).await.expect("should delete book"));
        assert!(!repo.delete_by_id(&book.book_id).await.expect("should delete book"));
        assert!(repo.find_all().await.expect("should list books").is_empty());
    }

    #[tokio::test]
    async fn test_should_search_by_title_substring() {
        let repo = MemoryBookRepository::with_books(vec![
            BookEntity::new("Dune", "Frank Herbert", 1965),
            BookEntity::new("Emma", "Jane Austen", 1815),
            BookEntity::new("Children of Dune", "Frank Herbert", 1976),
        ]);
        let res = repo.search_by_title("Dune").await.expect("should search books");
        let titles: Vec<&str> = res.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["Dune", "Children of Dune"], titles);

        let res = repo.search_by_title("dune").await.expect("should search books");
        assert!(res.is_empty());
    }
}
