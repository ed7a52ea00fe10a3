use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

use super::error::{AuthorError, AuthorResult};

/// Anything an author id can be read from.
pub trait UuidInput {
    fn parse_uuid(self) -> Result<Uuid, uuid::Error>;
}

impl UuidInput for Uuid {
    fn parse_uuid(self) -> Result<Uuid, uuid::Error> {
        Ok(self)
    }
}

impl UuidInput for &str {
    fn parse_uuid(self) -> Result<Uuid, uuid::Error> {
        Uuid::try_parse(self.trim())
    }
}

impl UuidInput for String {
    fn parse_uuid(self) -> Result<Uuid, uuid::Error> {
        self.as_str().parse_uuid()
    }
}

// 16 bytes are the raw id, anything else is treated as ASCII text.
impl UuidInput for &[u8] {
    fn parse_uuid(self) -> Result<Uuid, uuid::Error> {
        if self.len() == 16 {
            return Uuid::from_slice(self);
        }
        Uuid::try_parse_ascii(self)
    }
}

impl UuidInput for Vec<u8> {
    fn parse_uuid(self) -> Result<Uuid, uuid::Error> {
        self.as_slice().parse_uuid()
    }
}

impl UuidInput for [u8; 16] {
    fn parse_uuid(self) -> Result<Uuid, uuid::Error> {
        Ok(Uuid::from_bytes(self))
    }
}

pub fn validate_uuid<T: UuidInput>(value: T) -> AuthorResult<Uuid> {
    value.parse_uuid().map_err(|e| AuthorError::InvalidFormat {
        message: format!("author id is not a valid uuid: {e}"),
        source: Some(e),
    })
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}
