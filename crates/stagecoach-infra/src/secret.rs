//! Provider credential lookup.
//!
//! The gateway reads its completion credential from the process environment
//! once at startup. Absence is a configuration error surfaced per request,
//! never a crash.

use secrecy::SecretString;

/// Environment variable holding the completion provider credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Read the provider API key from the environment.
///
/// An empty value is treated as missing, as is a value that is not valid
/// Unicode, since credentials must be usable strings.
pub fn provider_api_key() -> Option<SecretString> {
    match std::env::var(API_KEY_ENV) {
        Ok(val) if !val.is_empty() => Some(SecretString::from(val)),
        _ => None,
    }
}
