//! Mock credential directory behind the login screen. There is no session
//! storage and no real auth backend; the directory exists so the role
//! gating has something to gate on.

use std::{error, fmt, result};

use model::user::{User, UserRole};
use utility::id::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
    EmailExists,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => {
                write!(f, "invalid email or password")
            }
            AuthError::EmailExists => {
                write!(f, "user with this email already exists")
            }
        }
    }
}

impl error::Error for AuthError {}

pub type AuthResult<T> = result::Result<T, AuthError>;

#[derive(Debug, Clone)]
struct Credential {
    user: User,
    password: String,
}

/// The operator directory. Passwords are stored in the clear because the
/// whole directory is demo data; nothing here leaves the process.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    entries: Vec<Credential>,
}

impl Directory {
    /// The two canned demo accounts, one per role.
    pub fn demo() -> Self {
        let mut directory = Self::default();
        directory.push(
            "1",
            "admin@tours.com",
            "admin123",
            UserRole::SuperAdmin,
            "John Admin",
        );
        directory.push(
            "2",
            "manager@tours.com",
            "manager123",
            UserRole::TourManager,
            "Jane Manager",
        );
        directory
    }

    fn push(&mut self, id: &str, email: &str, password: &str, role: UserRole, name: &str) {
        self.entries.push(Credential {
            user: User {
                id: Id::new(id.to_owned()),
                email: email.to_owned(),
                name: name.to_owned(),
                role,
            },
            password: password.to_owned(),
        });
    }

    /// Email comparison is case-insensitive, the password is exact. The
    /// returned user carries no password.
    pub fn login(&self, email: &str, password: &str) -> AuthResult<User> {
        self.entries
            .iter()
            .find(|entry| {
                entry.user.email.eq_ignore_ascii_case(email)
                    && entry.password == password
            })
            .map(|entry| entry.user.clone())
            .ok_or(AuthError::InvalidCredentials)
    }

    /// Registers a new operator account. Refused when the email is already
    /// taken, compared case-insensitively.
    pub fn create_user(
        &mut self,
        email: &str,
        password: &str,
        role: UserRole,
        name: &str,
    ) -> AuthResult<User> {
        let taken = self
            .entries
            .iter()
            .any(|entry| entry.user.email.eq_ignore_ascii_case(email));
        if taken {
            return Err(AuthError::EmailExists);
        }
        let user = User {
            id: Id::new((self.entries.len() + 1).to_string()),
            email: email.to_owned(),
            name: name.to_owned(),
            role,
        };
        self.entries.push(Credential {
            user: user.clone(),
            password: password.to_owned(),
        });
        log::info!("new {:?} account created for {}", role, email);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_accounts_log_in_case_insensitively() {
        let directory = Directory::demo();
        let admin = directory.login("Admin@Tours.com", "admin123").unwrap();
        assert_eq!(admin.role, UserRole::SuperAdmin);
        assert_eq!(admin.name, "John Admin");
    }

    #[test]
    fn wrong_password_or_unknown_email_is_rejected() {
        let directory = Directory::demo();
        assert_eq!(
            directory.login("admin@tours.com", "wrong"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            directory.login("nobody@tours.com", "admin123"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn duplicate_emails_are_refused() {
        let mut directory = Directory::demo();
        assert_eq!(
            directory.create_user(
                "ADMIN@tours.com",
                "pw",
                UserRole::TourManager,
                "Dup",
            ),
            Err(AuthError::EmailExists)
        );
        let user = directory
            .create_user("new@tours.com", "pw", UserRole::TourManager, "New User")
            .unwrap();
        assert_eq!(user.role, UserRole::TourManager);
        assert!(directory.login("new@tours.com", "pw").is_ok());
    }

    #[test]
    fn only_admins_manage_the_fleet() {
        assert!(UserRole::SuperAdmin.can_manage_fleet());
        assert!(!UserRole::TourManager.can_manage_fleet());
    }
}
