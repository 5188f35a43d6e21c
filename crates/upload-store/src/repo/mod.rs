pub mod users;

pub use users::{UsersRepo, USERS_TABLE};
