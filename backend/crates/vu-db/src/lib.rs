pub mod database;
pub mod error;
pub mod repositories;

pub use database::Database;
pub use error::{DbError, Result as DbErrorResult};
pub use repositories::api_key_repository::ApiKeyRepository;
pub use repositories::link_repository::LinkRepository;
