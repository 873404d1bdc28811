use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;

/// Length of generated session tokens, in characters.
const TOKEN_LENGTH: usize = 40;

/// Opaque session token generator.
///
/// Produces unguessable alphanumeric bearer tokens from the operating system
/// CSPRNG. Tokens carry no embedded claims; validity and ownership live in
/// the service's token store, which makes revocation a plain row delete.
pub struct TokenGenerator {
    length: usize,
}

impl TokenGenerator {
    pub fn new() -> Self {
        Self {
            length: TOKEN_LENGTH,
        }
    }

    /// Generate a fresh random token.
    pub fn generate(&self) -> String {
        OsRng
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}

impl Default for TokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length_and_charset() {
        let generator = TokenGenerator::new();
        let token = generator.generate();

        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_tokens_are_unique() {
        let generator = TokenGenerator::new();

        let first = generator.generate();
        let second = generator.generate();

        assert_ne!(first, second);
    }
}
