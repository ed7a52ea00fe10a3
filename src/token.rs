use rand::RngCore;

use crate::author::ACTIVATION_TOKEN_LEN;

/// Fresh one-time activation token: 16 random bytes as lowercase hex.
pub fn generate_activation_token() -> String {
    let mut bytes = [0u8; ACTIVATION_TOKEN_LEN / 2];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_32_hex_chars() {
        let token = generate_activation_token();
        assert_eq!(token.len(), ACTIVATION_TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn tokens_differ() {
        assert_ne!(generate_activation_token(), generate_activation_token());
    }
}
