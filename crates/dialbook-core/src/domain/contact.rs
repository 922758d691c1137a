use crate::domain::name::normalize_name;
use crate::domain::phone::normalize_phone;
use crate::error::CoreError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawContact")]
pub struct Contact {
    pub name: String,
    #[serde(serialize_with = "serialize_phone")]
    pub phone: Option<String>,
}

#[derive(Deserialize)]
struct RawContact {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    phone: Option<String>,
}

impl TryFrom<RawContact> for Contact {
    type Error = CoreError;

    fn try_from(raw: RawContact) -> Result<Self, Self::Error> {
        let phone = raw.phone.as_deref().filter(|phone| !phone.is_empty());
        Contact::from_parts(raw.name.as_deref(), phone).ok_or(CoreError::EmptyContact)
    }
}

impl Contact {
    /// Builds a contact from user input; both fields must normalize.
    pub fn new(name: &str, phone: &str) -> Result<Self, CoreError> {
        let name = normalize_name(name).ok_or(CoreError::InvalidName)?;
        let phone =
            normalize_phone(phone).ok_or_else(|| CoreError::InvalidPhone(phone.to_string()))?;
        Ok(Self {
            name,
            phone: Some(phone),
        })
    }

    /// Lenient constructor for imported records: keeps whichever fields
    /// normalize and returns `None` only when neither does.
    pub fn from_parts(name: Option<&str>, phone: Option<&str>) -> Option<Self> {
        let name = name.and_then(normalize_name);
        let phone = phone.and_then(normalize_phone);
        if name.is_none() && phone.is_none() {
            return None;
        }
        Some(Self {
            name: name.unwrap_or_default(),
            phone,
        })
    }

    pub fn key(&self) -> ContactKey {
        match &self.phone {
            Some(phone) => ContactKey(phone.clone()),
            None => ContactKey(self.name.to_lowercase()),
        }
    }

    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

/// Unique index key: the normalized phone, or the lowercased name for
/// contacts without one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactKey(String);

impl ContactKey {
    pub fn from_phone(raw: &str) -> Option<Self> {
        normalize_phone(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Missing phones are written as "" so every record keeps both string fields.
fn serialize_phone<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or_default())
}
