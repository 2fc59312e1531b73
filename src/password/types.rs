//! Value types passed between the settings builder, hasher and validator

use std::fmt;
use subtle::ConstantTimeEq;

/// bcrypt version identifier written into generated settings
pub const SETTINGS_VERSION: &str = "2a";
/// Raw salt length in bytes
pub const SALT_LEN: usize = 16;
/// Salt length once encoded with the bcrypt alphabet
pub const ENCODED_SALT_LEN: usize = 22;
/// Length of a `$2a$NN$<salt>` settings string
pub const SETTINGS_LEN: usize = 7 + ENCODED_SALT_LEN;

/// The encoded parameters of a bcrypt computation: version, cost and salt
///
/// Together with a password these fully determine the primitive's output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashSettings {
    cost: u32,
    salt: String,
}

impl HashSettings {
    /// `salt` must already be encoded with the bcrypt alphabet
    pub fn new(cost: u32, salt: impl Into<String>) -> Self {
        Self {
            cost,
            salt: salt.into(),
        }
    }

    pub fn version(&self) -> &'static str {
        SETTINGS_VERSION
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }
}

impl fmt::Display for HashSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}${:02}${}", self.version(), self.cost, self.salt)
    }
}

/// Full output of the bcrypt primitive: settings prefix followed by the digest
///
/// Opaque apart from its leading settings. Equality is checked in constant
/// time.
#[derive(Debug, Clone, Eq)]
pub struct HashString(String);

impl HashString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// The leading `$2a$NN$<salt>` portion, if the string is long enough
    pub fn settings_prefix(&self) -> Option<&str> {
        self.0.get(..SETTINGS_LEN)
    }
}

impl PartialEq for HashString {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(self.0.as_bytes(), other.0.as_bytes())
    }
}

impl PartialEq<str> for HashString {
    fn eq(&self, other: &str) -> bool {
        constant_time_eq(self.0.as_bytes(), other.as_bytes())
    }
}

impl PartialEq<&str> for HashString {
    fn eq(&self, other: &&str) -> bool {
        constant_time_eq(self.0.as_bytes(), other.as_bytes())
    }
}

impl fmt::Display for HashString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HashString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for HashString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<HashString> for String {
    fn from(value: HashString) -> Self {
        value.0
    }
}

/// Byte comparison whose timing does not depend on where the inputs differ
pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
