mod fetch_user;

pub use fetch_user::{__path_get_user_handler, get_user_handler, UserProfileResponse};
