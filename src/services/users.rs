use crate::domain::user::{NewUser, User};
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

/// Creates a user after checking the username is free.
///
/// The check and the insert are two separate repository operations; nothing
/// makes the pair atomic. That is acceptable while the store lives inside a
/// single process — a shared backend needs a uniqueness constraint at the
/// storage layer instead.
pub fn register_user<R>(repo: &R, new_user: &NewUser) -> ServiceResult<User>
where
    R: UserReader + UserWriter + ?Sized,
{
    if repo.get_user_by_username(&new_user.username)?.is_some() {
        return Err(ServiceError::Validation(format!(
            "username {} is already taken",
            new_user.username
        )));
    }
    Ok(repo.create_user(new_user)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::UserId;
    use crate::repository::mock::MockRepository;

    #[test]
    fn register_user_rejects_taken_username() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_username()
            .times(1)
            .returning(|username| {
                Ok(Some(User {
                    id: UserId::new(),
                    username: username.to_string(),
                    password: "hunter2".to_string(),
                }))
            });
        repo.expect_create_user().times(0);

        let result = register_user(
            &repo,
            &NewUser {
                username: "agent".to_string(),
                password: "secret".to_string(),
            },
        );
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn register_user_creates_when_username_is_free() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_username()
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_create_user().times(1).returning(|new_user| {
            Ok(User {
                id: UserId::new(),
                username: new_user.username.clone(),
                password: new_user.password.clone(),
            })
        });

        let user = register_user(
            &repo,
            &NewUser {
                username: "agent".to_string(),
                password: "secret".to_string(),
            },
        )
        .expect("registration succeeds");
        assert_eq!(user.username, "agent");
    }
}
