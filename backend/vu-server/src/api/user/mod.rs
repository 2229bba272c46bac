pub mod user;
pub mod user_query;
pub mod user_request;
pub mod user_response;
