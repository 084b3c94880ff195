use crate::server::error::Error;

/// One-way password hashing with bcrypt.
///
/// Every hash embeds its own random salt and work factor, so hashes produced with one cost
/// still verify after the configured cost changes.
#[derive(Clone, Copy, Debug)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Creates a new instance of [`PasswordHasher`] using the provided bcrypt work factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes a plaintext password.
    ///
    /// # Returns
    /// - `Ok(String)` - Salted bcrypt hash in modular crypt format
    /// - `Err(Error::PasswordHashError)` - The configured cost is not accepted by bcrypt
    pub fn hash(&self, plaintext: &str) -> Result<String, Error> {
        Ok(bcrypt::hash(plaintext, self.cost)?)
    }

    /// Checks a plaintext password against a stored hash.
    ///
    /// Returns `false` both on mismatch and when `hash` is not a valid bcrypt hash.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        match bcrypt::verify(plaintext, hash) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!("Failed to verify password against malformed hash: {}", e);

                false
            }
        }
    }
}
