//! Users module - domain models, service, repository.
//!
//! Users are consumed, not owned, by the journal core: they are the
//! ownership key for trades and the notification target for reminders.

mod users_model;
mod users_repository;
mod users_service;
mod users_traits;

pub use users_model::{NewUser, User};
pub use users_repository::UserRepository;
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
