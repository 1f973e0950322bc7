mod fetch_user;

pub use fetch_user::{FetchUserError, FetchUserUseCase};
