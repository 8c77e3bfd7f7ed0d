pub mod manager;
pub mod posts;
pub mod users;

pub use manager::{StoreError, StoreManager};
pub use posts::{PostFilter, PostStore};
pub use users::UserStore;
