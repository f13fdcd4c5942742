//! User data model and account request payloads.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use zeroize::Zeroizing;

use super::password::PasswordHash;

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    InvalidId,
    EmptyName,
    NameTooLong { max: usize },
    EmptyEmail,
    InvalidEmail,
    EmptyPassword,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong { max } => write!(f, "name must be at most {max} characters"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email is not a valid address"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from string input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an already-parsed UUID (persistence reads).
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Maximum allowed length for a user name.
pub const USER_NAME_MAX: usize = 80;

/// Human readable name for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`], trimming surrounding
    /// whitespace.
    pub fn new(name: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if trimmed.chars().count() > USER_NAME_MAX {
            return Err(UserValidationError::NameTooLong { max: USER_NAME_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Normalised email address used as the account login key.
///
/// ## Invariants
/// - Trimmed, lower-cased, and free of internal whitespace.
/// - Exactly one `@` with a non-empty local part and a dotted domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`] from raw input.
    pub fn new(email: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = email.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(UserValidationError::InvalidEmail);
        }
        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(UserValidationError::InvalidEmail);
        };
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(UserValidationError::InvalidEmail);
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(trimmed.to_lowercase()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Registered user account.
///
/// Favorites are not embedded here; they live behind the favorites port as
/// a relation keyed by [`UserId`].
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    name: UserName,
    email: EmailAddress,
    password_hash: PasswordHash,
}

impl User {
    /// Build a [`User`] from validated components.
    pub fn new(
        id: UserId,
        name: UserName,
        email: EmailAddress,
        password_hash: PasswordHash,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Name shown on the dashboard.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Login email, unique per account.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Stored password hash.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}

/// Validated registration payload.
///
/// The password stays plaintext here (zeroized on drop) so the account
/// service can hash it exactly once at insert time.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub name: UserName,
    pub email: EmailAddress,
    password: Zeroizing<String>,
}

impl NewRegistration {
    /// Construct a registration from raw form inputs.
    pub fn try_from_parts(
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, UserValidationError> {
        if password.is_empty() {
            return Err(UserValidationError::EmptyPassword);
        }
        Ok(Self {
            name: UserName::new(name)?,
            email: EmailAddress::new(email)?,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Plaintext password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated login credentials.
///
/// The password retains caller-provided whitespace to avoid surprising
/// credential comparisons.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, UserValidationError> {
        if password.is_empty() {
            return Err(UserValidationError::EmptyPassword);
        }
        Ok(Self {
            email: EmailAddress::new(email)?,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email used for the account lookup.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
