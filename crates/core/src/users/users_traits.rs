use crate::errors::Result;
use crate::users::users_model::{NewUser, User};

/// Trait for user repository operations.
pub trait UserRepositoryTrait: Send + Sync {
    fn insert(&self, new_user: NewUser) -> Result<User>;
    fn find_by_id(&self, user_id: &str) -> Result<Option<User>>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}

/// Trait for user service operations.
pub trait UserServiceTrait: Send + Sync {
    fn register(&self, new_user: NewUser) -> Result<User>;
    fn get_by_id(&self, user_id: &str) -> Result<User>;
    fn get_by_email(&self, email: &str) -> Result<Option<User>>;
}
