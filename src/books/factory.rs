use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;

pub fn create_book_repository(seed: &[BookDto]) -> Box<dyn BookRepository> {
    let books = seed.iter().map(BookEntity::from).collect();
    Box::new(MemoryBookRepository::with_books(books))
}
