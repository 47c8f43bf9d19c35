use std::sync::Arc;

use crate::errors::{Error, Result, ValidationError};
use crate::users::users_model::{NewUser, User};
use crate::users::users_traits::{UserRepositoryTrait, UserServiceTrait};

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { repository }
    }

    fn validate(new_user: &NewUser) -> Result<()> {
        if new_user.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if new_user.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email".to_string()).into());
        }
        if !new_user.email.contains('@') {
            return Err(
                ValidationError::InvalidInput(format!("Invalid email: {}", new_user.email)).into(),
            );
        }
        Ok(())
    }
}

impl UserServiceTrait for UserService {
    fn register(&self, new_user: NewUser) -> Result<User> {
        Self::validate(&new_user)?;
        let email = new_user.email.trim().to_lowercase();
        if self.repository.find_by_email(&email)?.is_some() {
            return Err(Error::ConstraintViolation(format!(
                "Email already registered: {email}"
            )));
        }
        self.repository.insert(NewUser {
            name: new_user.name.trim().to_string(),
            email,
            password_hash: new_user.password_hash,
        })
    }

    fn get_by_id(&self, user_id: &str) -> Result<User> {
        self.repository
            .find_by_id(user_id)?
            .ok_or_else(|| Error::NotFound(format!("User not found: {user_id}")))
    }

    fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        self.repository.find_by_email(&email.trim().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockUserRepository {
        users: Mutex<Vec<User>>,
    }

    impl UserRepositoryTrait for MockUserRepository {
        fn insert(&self, new_user: NewUser) -> Result<User> {
            let user = User {
                id: format!("user-{}", self.users.lock().unwrap().len() + 1),
                name: new_user.name,
                email: new_user.email,
                password_hash: new_user.password_hash,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            };
            self.users.lock().unwrap().push(user.clone());
            Ok(user)
        }

        fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == user_id)
                .cloned())
        }

        fn find_by_email(&self, email: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Asha".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$stub".to_string(),
        }
    }

    #[test]
    fn register_normalizes_email() {
        let service = UserService::new(Arc::new(MockUserRepository::default()));
        let user = service.register(new_user(" Asha@Example.COM ")).unwrap();
        assert_eq!(user.email, "asha@example.com");
    }

    #[test]
    fn duplicate_email_is_a_constraint_violation() {
        let service = UserService::new(Arc::new(MockUserRepository::default()));
        service.register(new_user("asha@example.com")).unwrap();
        let err = service.register(new_user("ASHA@example.com")).unwrap_err();
        assert!(matches!(err, Error::ConstraintViolation(_)));
    }

    #[test]
    fn missing_fields_are_rejected() {
        let service = UserService::new(Arc::new(MockUserRepository::default()));
        let err = service
            .register(NewUser {
                name: "  ".to_string(),
                email: "a@b.c".to_string(),
                password_hash: "h".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let err = service.register(new_user("not-an-email")).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn get_by_id_surfaces_not_found() {
        let service = UserService::new(Arc::new(MockUserRepository::default()));
        assert!(matches!(
            service.get_by_id("missing").unwrap_err(),
            Error::NotFound(_)
        ));
    }
}
