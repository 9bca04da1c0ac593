//! The fetched profile document and the lookup interface the accessor reads
//! it through.

use std::path::Path;

use serde_json::{Map, Value};

use crate::ProfileError;

/// Read-only key lookup over a fetched profile.
///
/// Whatever fetched the profile (an HTTP client, a cache, a file on disk)
/// implements this; the accessor never mutates what it returns.
pub trait ProfileSource {
    /// Raw value stored under `key`, or `None` when the profile has no such key.
    fn get_from_profile(&self, key: &str) -> Option<&Value>;
}

impl ProfileSource for Map<String, Value> {
    fn get_from_profile(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl ProfileSource for Value {
    fn get_from_profile(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|m| m.get(key))
    }
}

impl<T: ProfileSource + ?Sized> ProfileSource for &T {
    fn get_from_profile(&self, key: &str) -> Option<&Value> {
        (**self).get_from_profile(key)
    }
}

/// An owned profile document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    data: Map<String, Value>,
}

impl Profile {
    #[must_use]
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// Wrap a parsed document.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::NotAnObject`] if the root is not a mapping.
    pub fn from_value(value: Value) -> Result<Self, ProfileError> {
        match value {
            Value::Object(data) => Ok(Self { data }),
            other => Err(ProfileError::NotAnObject(value_kind(&other))),
        }
    }

    /// Parse a JSON profile document.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Json`] on malformed JSON and
    /// [`ProfileError::NotAnObject`] if the root is not a mapping.
    pub fn from_json_str(s: &str) -> Result<Self, ProfileError> {
        Self::from_value(serde_json::from_str(s)?)
    }

    /// Parse a YAML profile document.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Yaml`] on malformed YAML and
    /// [`ProfileError::NotAnObject`] if the root is not a mapping.
    pub fn from_yaml_str(s: &str) -> Result<Self, ProfileError> {
        Self::from_value(serde_yaml::from_str(s)?)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.data
    }
}

impl ProfileSource for Profile {
    fn get_from_profile(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

/// Load a profile document from disk.
///
/// The format is picked from the extension: `.json`, `.yaml` or `.yml`.
///
/// # Errors
///
/// Returns `ProfileError` if the extension is unsupported, the file cannot be
/// read, or its contents fail to parse into a mapping.
pub fn load_profile(path: &Path) -> Result<Profile, ProfileError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let parse: fn(&str) -> Result<Profile, ProfileError> = match ext.as_deref() {
        Some("json") => Profile::from_json_str,
        Some("yaml" | "yml") => Profile::from_yaml_str,
        _ => return Err(ProfileError::UnsupportedFormat(path.display().to_string())),
    };

    let content = std::fs::read_to_string(path).map_err(|e| ProfileError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let profile = parse(&content)?;
    tracing::debug!(
        path = %path.display(),
        keys = profile.data.len(),
        "loaded profile document"
    );
    Ok(profile)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
