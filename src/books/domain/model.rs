use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is the stored form of a catalog entry. Titles are unique across the
// catalog but that is checked by the catalog service, not by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: Uuid,
    pub title: String,
    pub author: String,
    pub published_year: i32,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, published_year: i32) -> Self {
        Self {
            book_id: Uuid::new_v4(),
            title: title.to_string(),
            author: author.to_string(),
            published_year,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> Uuid {
        self.book_id
    }
}

impl Book for BookEntity {
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
