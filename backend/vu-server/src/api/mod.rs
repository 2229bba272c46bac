pub mod error;
pub mod lookup;
pub mod message_response;
pub mod middleware;
pub mod user;
