mod dashboard;
mod health;
mod users;

pub use dashboard::dashboard;
pub use health::health;
pub use users::{create_user, delete_user, list_users, show_user, update_user};
