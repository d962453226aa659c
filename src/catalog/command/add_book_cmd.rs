use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub published_year: i32,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, published_year: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            published_year,
        }
    }
    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.title.as_str(), self.author.as_str(), self.published_year)
    }
}


#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.create_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref SUT_CMD : AsyncOnce<AddBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"), &[]).expect("should build service");
                AddBookCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = SUT_CMD.get().await;

        let res = cmd.execute(AddBookCommandRequest::new("Ulysses", "James Joyce", 1922))
            .await.expect("should add book");
        assert_eq!("Ulysses", res.book.title.as_str());
        assert_eq!("James Joyce", res.book.author.as_str());
        assert_eq!(1922, res.book.published_year);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_title() {
        let cmd = SUT_CMD.get().await;

        let _ = cmd.execute(AddBookCommandRequest::new("Dubliners", "James Joyce", 1914))
            .await.expect("should add book");
        let err = cmd.execute(AddBookCommandRequest::new("Dubliners", "James Joyce", 1914))
            .await.expect_err("should reject book");
        assert_eq!(CommandError::Validation {
            message: "A book with the title Dubliners already exists.".to_string(),
            reason_code: Some("409".to_string()),
        }, err);
    }

    #[tokio::test]
    async fn test_should_parse_add_book_request() {
        let req: AddBookCommandRequest = serde_json::from_str(
            r#"{"title": "Finnegans Wake", "author": "James Joyce", "published_year": 1939}"#)
            .expect("should parse request");
        let book = req.build_book();
        assert_eq!("Finnegans Wake", book.title.as_str());
        assert_eq!(1939, book.published_year);
    }
}
