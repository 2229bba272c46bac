pub mod api_key_repository;
pub mod link_repository;
