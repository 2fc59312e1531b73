//! The bcrypt one-way function, treated as an external primitive
//!
//! The Eksblowfish computation itself comes from the `bcrypt` crate. This
//! module only turns a settings string into the crate's inputs and formats
//! the result back into a [`HashString`].

use crate::core::error::{HashError, Result};
use crate::password::types::{HashString, ENCODED_SALT_LEN, SALT_LEN};
use base64::{
    alphabet,
    engine::{
        general_purpose::{GeneralPurpose, GeneralPurposeConfig},
        DecodePaddingMode,
    },
    Engine as _,
};
use bcrypt::Version;

/// bcrypt's base-64 variant: `./A-Za-z0-9`, no padding
///
/// Trailing bits of the last salt character are ignored on decode, as every
/// bcrypt implementation does.
pub const BCRYPT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::BCRYPT,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Deterministic password hashing driven by a settings string
pub trait BcryptPrimitive: Send + Sync {
    /// Hash `password` with the version, cost and salt at the start of
    /// `settings`. Fails with [`HashError::InvalidSettings`] when the settings
    /// are malformed or the cost is out of range.
    fn hash(&self, password: &[u8], settings: &str) -> Result<HashString>;

    /// Encode raw salt bytes with the primitive's alphabet
    fn encode_salt(&self, raw: &[u8]) -> String;
}

/// [`BcryptPrimitive`] backed by the `bcrypt` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct Bcrypt;

impl BcryptPrimitive for Bcrypt {
    fn hash(&self, password: &[u8], settings: &str) -> Result<HashString> {
        let parsed = ParsedSettings::parse(settings)?;
        let parts = bcrypt::hash_with_salt(password, parsed.cost, parsed.salt)?;
        Ok(HashString::from(parts.format_for_version(parsed.version)))
    }

    fn encode_salt(&self, raw: &[u8]) -> String {
        BCRYPT_BASE64.encode(raw)
    }
}

/// Inputs of `bcrypt::hash_with_salt` recovered from a settings string
struct ParsedSettings {
    version: Version,
    cost: u32,
    salt: [u8; SALT_LEN],
}

impl ParsedSettings {
    /// Parse `$<version>$<cost>$<salt>`; anything after the salt is ignored
    fn parse(settings: &str) -> Result<Self> {
        let rest = settings
            .strip_prefix('$')
            .ok_or_else(|| invalid("settings must start with '$'"))?;
        let (version, rest) = rest
            .split_once('$')
            .ok_or_else(|| invalid("missing version"))?;
        let (cost, rest) = rest.split_once('$').ok_or_else(|| invalid("missing cost"))?;

        let version = match version {
            "2a" => Version::TwoA,
            "2b" => Version::TwoB,
            "2y" => Version::TwoY,
            other => return Err(invalid(&format!("unsupported version '{}'", other))),
        };

        if cost.len() != 2 || !cost.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("cost must be two decimal digits"));
        }
        let cost: u32 = cost.parse().map_err(|_| invalid("cost is not a number"))?;

        let encoded_salt = rest
            .get(..ENCODED_SALT_LEN)
            .ok_or_else(|| invalid("salt is too short"))?;
        let salt: [u8; SALT_LEN] = BCRYPT_BASE64
            .decode(encoded_salt)
            .map_err(|e| invalid(&format!("salt is not valid bcrypt base64: {}", e)))?
            .try_into()
            .map_err(|_| invalid("salt has the wrong length"))?;

        Ok(Self {
            version,
            cost,
            salt,
        })
    }
}

fn invalid(reason: &str) -> HashError {
    HashError::InvalidSettings(reason.to_string())
}
