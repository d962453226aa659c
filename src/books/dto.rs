use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: Uuid,
    pub title: String,
    pub author: String,
    pub published_year: i32,
}

impl BookDto {
    pub fn new(title: &str, author: &str, published_year: i32) -> BookDto {
        BookDto::with_id(Uuid::new_v4(), title, author, published_year)
    }

    pub fn with_id(book_id: Uuid, title: &str, author: &str, published_year: i32) -> BookDto {
        BookDto {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            published_year,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> Uuid {
        self.book_id
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn published_year(&self) -> i32 {
        self.published_year
    }
}
