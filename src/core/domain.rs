use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::library::{LibraryError, LibraryResult};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> Uuid;
}

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub search_min_chars: usize,
    pub search_max_chars: usize,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            search_min_chars: 2,
            search_max_chars: 20,
        }
    }

    pub fn validate(&self) -> LibraryResult<()> {
        if self.search_min_chars > self.search_max_chars {
            return Err(LibraryError::validation(
                format!("search bounds {}..={} are empty for branch {}",
                        self.search_min_chars, self.search_max_chars, self.branch_id).as_str(), Some("400".to_string())));
        }
        Ok(())
    }
}
