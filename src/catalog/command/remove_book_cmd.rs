use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{parse_book_id, Command, CommandError};

pub struct RemoveBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub book_id: String,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub deleted: bool,
}

impl RemoveBookCommandResponse {
    pub fn new(deleted: bool) -> Self {
        Self { deleted }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let book_id = parse_book_id(req.book_id.as_str())?;
        self.catalog_service.delete_book(&book_id).await
            .map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::books::dto::BookDto;
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref BOOK : BookDto = BookDto::new("Orlando", "Virginia Woolf", 1928);
        static ref REMOVE_CMD : AsyncOnce<RemoveBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"), &[BOOK.clone()]).expect("should build service");
                RemoveBookCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let remove_cmd = REMOVE_CMD.get().await;

        let res = remove_cmd.execute(RemoveBookCommandRequest::new(BOOK.book_id.to_string()))
            .await.expect("should remove book");
        assert!(res.deleted);
        let res = remove_cmd.execute(RemoveBookCommandRequest::new(BOOK.book_id.to_string()))
            .await.expect("should not fail");
        assert!(!res.deleted);
    }
}
