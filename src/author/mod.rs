//! Author profile entity: validated value object plus its `author` table access.

mod error;
mod model;
mod repo;
mod validate;

pub use error::{AuthorError, AuthorResult};
pub use model::{Author, ACTIVATION_TOKEN_LEN, EMAIL_MAX_LEN, PASSWORD_HASH_LEN};
pub use validate::{validate_uuid, UuidInput};
