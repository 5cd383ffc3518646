//! Gemini API key lookup and storage.
//!
//! The key is read from the environment first (`GEMINI_API_KEY`, then
//! `API_KEY`) and from the system keyring otherwise. `beacon auth` stores a
//! key in the keyring and `beacon deauth` removes it.

use std::error::Error;
use std::fmt;

use keyring::Entry;
use tracing::{debug, warn};

use crate::core::keyring::KeyringAccessError;

mod ui;

use self::ui::{prompt_api_key, prompt_confirmation, ConfirmationChoice};

const KEYRING_SERVICE: &str = "beacon";
const KEYRING_USER: &str = "gemini";

/// Environment variables consulted for the key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Environment(&'static str),
    Keyring,
}

impl fmt::Display for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySource::Environment(var) => write!(f, "environment ({var})"),
            KeySource::Keyring => f.write_str("system keyring"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKey {
    pub key: String,
    pub source: KeySource,
}

#[derive(Debug)]
pub enum AuthError {
    MissingKey,
    Keyring(KeyringAccessError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingKey => write!(
                f,
                "No Gemini API key found. Set {} or run `beacon auth`.",
                API_KEY_ENV_VARS[0]
            ),
            AuthError::Keyring(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AuthError::MissingKey => None,
            AuthError::Keyring(err) => Some(err),
        }
    }
}

/// First non-blank key among [`API_KEY_ENV_VARS`].
fn key_from_env<F>(lookup: F) -> Option<ResolvedKey>
where
    F: Fn(&str) -> Option<String>,
{
    API_KEY_ENV_VARS.iter().find_map(|var| {
        lookup(var)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(|key| ResolvedKey {
                key,
                source: KeySource::Environment(var),
            })
    })
}

pub struct AuthManager {
    use_keyring: bool,
}

impl AuthManager {
    pub fn new() -> Self {
        Self::new_with_keyring(true)
    }

    /// Construct an AuthManager, optionally disabling keyring access (useful for tests)
    pub fn new_with_keyring(use_keyring: bool) -> Self {
        Self { use_keyring }
    }

    fn entry(&self) -> Result<Entry, KeyringAccessError> {
        Entry::new(KEYRING_SERVICE, KEYRING_USER).map_err(KeyringAccessError::from)
    }

    pub fn get_stored_key(&self) -> Result<Option<String>, KeyringAccessError> {
        if !self.use_keyring {
            return Ok(None);
        }
        match self.entry()?.get_password() {
            Ok(key) => Ok(Some(key)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn store_key(&self, key: &str) -> Result<(), KeyringAccessError> {
        if !self.use_keyring {
            return Ok(());
        }
        self.entry()?.set_password(key)?;
        debug!("stored api key in keyring");
        Ok(())
    }

    /// Returns whether a key was present.
    pub fn remove_key(&self) -> Result<bool, KeyringAccessError> {
        if !self.use_keyring {
            return Ok(false);
        }
        match self.entry()?.delete_credential() {
            Ok(()) => Ok(true),
            Err(keyring::Error::NoEntry) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    pub fn resolve_api_key(&self) -> Result<ResolvedKey, AuthError> {
        self.resolve_api_key_with(|var| std::env::var(var).ok())
    }

    fn resolve_api_key_with<F>(&self, lookup: F) -> Result<ResolvedKey, AuthError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(resolved) = key_from_env(lookup) {
            debug!(source = %resolved.source, "using api key");
            return Ok(resolved);
        }

        match self.get_stored_key() {
            Ok(Some(key)) => Ok(ResolvedKey {
                key,
                source: KeySource::Keyring,
            }),
            Ok(None) => Err(AuthError::MissingKey),
            Err(err) if err.is_recoverable() => {
                warn!(error = %err, "keyring lookup failed");
                Err(AuthError::MissingKey)
            }
            Err(err) => Err(AuthError::Keyring(err)),
        }
    }

    pub fn interactive_auth(&self) -> Result<(), Box<dyn Error>> {
        let existing = matches!(self.get_stored_key(), Ok(Some(_)));
        let key = prompt_api_key(existing)?;
        self.store_key(&key)?;

        println!();
        println!("✅ Gemini API key stored securely.");
        println!("You can now run beacon without setting environment variables.");
        Ok(())
    }

    pub fn interactive_deauth(&self) -> Result<(), Box<dyn Error>> {
        if !matches!(self.get_stored_key()?, Some(_)) {
            println!("No stored Gemini API key.");
            return Ok(());
        }
        if prompt_confirmation("Remove the stored Gemini API key?")? == ConfirmationChoice::No {
            println!("Cancelled.");
            return Ok(());
        }
        if self.remove_key()? {
            println!("✅ Authentication removed");
        }
        Ok(())
    }
}

impl Default for AuthManager {
    fn default() -> Self {
        Self::new()
    }
}
