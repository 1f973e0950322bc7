mod fetch_user_service;

pub use fetch_user_service::FetchUserService;
