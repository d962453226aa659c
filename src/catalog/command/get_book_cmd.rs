use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{parse_book_id, Command, CommandError};

pub struct GetBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub book_id: String,
}

impl GetBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}


// An unknown id yields an empty book rather than an error.
#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: Option<BookDto>,
}

impl GetBookCommandResponse {
    pub fn new(book: Option<BookDto>) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        let book_id = parse_book_id(req.book_id.as_str())?;
        self.catalog_service.get_book_by_id(&book_id)
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}
