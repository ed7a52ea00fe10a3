use serde::Serialize;
use uuid::Uuid;

use super::error::{AuthorError, AuthorResult};
use super::validate::{is_valid_email, validate_uuid, UuidInput};

pub const ACTIVATION_TOKEN_LEN: usize = 32;
pub const EMAIL_MAX_LEN: usize = 128;
pub const PASSWORD_HASH_LEN: usize = 97;

/// Author profile. Fields are only reachable through validated setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: Uuid,
    avatar_url: String,
    activation_token: Option<String>,
    email: String,
    #[serde(skip_serializing)]
    password_hash: String,
    username: String,
}

impl Author {
    /// Validates all six fields in order and fails on the first bad one.
    pub fn new<I, T>(
        id: I,
        avatar_url: &str,
        activation_token: Option<T>,
        email: &str,
        password_hash: &str,
        username: &str,
    ) -> AuthorResult<Self>
    where
        I: UuidInput,
        T: AsRef<str>,
    {
        let mut author = Self {
            id: Uuid::nil(),
            avatar_url: String::new(),
            activation_token: None,
            email: String::new(),
            password_hash: String::new(),
            username: String::new(),
        };
        author.set_id(id)?;
        author.set_avatar_url(avatar_url)?;
        author.set_activation_token(activation_token)?;
        author.set_email(email)?;
        author.set_password_hash(password_hash)?;
        author.set_username(username)?;
        Ok(author)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    fn set_id<I: UuidInput>(&mut self, value: I) -> AuthorResult<()> {
        self.id = validate_uuid(value)?;
        Ok(())
    }

    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    pub fn set_avatar_url(&mut self, value: &str) -> AuthorResult<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(AuthorError::EmptyValue("avatar URL is empty".into()));
        }
        self.avatar_url = value.to_string();
        Ok(())
    }

    /// `None` once the account has been activated.
    pub fn activation_token(&self) -> Option<&str> {
        self.activation_token.as_deref()
    }

    pub fn set_activation_token<T: AsRef<str>>(&mut self, value: Option<T>) -> AuthorResult<()> {
        let value = match value {
            Some(token) => token.as_ref().to_string(),
            None => {
                self.activation_token = None;
                return Ok(());
            }
        };
        if value.chars().count() != ACTIVATION_TOKEN_LEN {
            return Err(AuthorError::InvalidLength(format!(
                "activation token must be {ACTIVATION_TOKEN_LEN} characters"
            )));
        }
        self.activation_token = Some(value);
        Ok(())
    }

    /// Marks the account as activated by dropping its one-time token.
    pub fn activate(&mut self) {
        self.activation_token = None;
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, value: &str) -> AuthorResult<()> {
        let value = value.trim();
        if !is_valid_email(value) {
            return Err(AuthorError::invalid_format("email is not valid"));
        }
        if value.chars().count() > EMAIL_MAX_LEN {
            return Err(AuthorError::InvalidLength(format!(
                "email is longer than {EMAIL_MAX_LEN} characters"
            )));
        }
        self.email = value.to_string();
        Ok(())
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn set_password_hash(&mut self, value: &str) -> AuthorResult<()> {
        if value.is_empty() {
            return Err(AuthorError::EmptyValue("hash is empty".into()));
        }
        if value.chars().count() != PASSWORD_HASH_LEN {
            return Err(AuthorError::InvalidLength(format!(
                "hash must be {PASSWORD_HASH_LEN} characters"
            )));
        }
        self.password_hash = value.to_string();
        Ok(())
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, value: &str) -> AuthorResult<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(AuthorError::EmptyValue("username is empty".into()));
        }
        self.username = value.to_string();
        Ok(())
    }
}
