//! Constant values shared by test fixtures.
//!
//! None of these values are real credentials, they only exist so fixtures and the
//! tests using them agree on usernames and passwords.

/// Username given to the default user fixture.
pub static TEST_USERNAME: &str = "alice";

/// Plaintext password of every user fixture.
pub static TEST_PASSWORD: &str = "correct-horse-battery-staple";

/// bcrypt work factor used when hashing fixture passwords.
///
/// The minimum cost keeps fixtures fast; hashes still verify against any hasher since the
/// cost is embedded in the hash string.
pub const TEST_BCRYPT_COST: u32 = 4;
