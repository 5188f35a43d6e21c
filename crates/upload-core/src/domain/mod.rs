pub mod email;
pub mod name;
pub mod user;

pub use email::{is_valid_email, normalize_email};
pub use name::normalize_name;
pub use user::UserRecord;
