use crate::error::{Result, StoreError};
use crate::file;
use dialbook_core::domain::{Contact, ContactKey};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Ordered contact collection with one record per derived key.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    keys: HashSet<ContactKey>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best-effort import from a contacts file. A missing, unreadable or
    /// malformed file yields an empty store.
    pub fn load(path: &Path) -> Self {
        match file::read_if_exists(path) {
            Ok(Some(contents)) => {
                let store = Self::from_json(&contents);
                debug!(path = %path.display(), count = store.len(), "contacts loaded");
                store
            }
            Ok(None) => {
                debug!(path = %path.display(), "contacts file missing, starting empty");
                Self::new()
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "contacts file unreadable, starting empty");
                Self::new()
            }
        }
    }

    /// Imports a JSON array of `{name, phone}` objects. Entries that are not
    /// objects, that have neither a usable name nor phone, or whose key was
    /// already seen are skipped.
    pub fn from_json(contents: &str) -> Self {
        let mut store = Self::new();
        let items = match serde_json::from_str::<Value>(contents) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                warn!("contacts document is not a list, starting empty");
                return store;
            }
            Err(err) => {
                warn!(error = %err, "contacts document is not valid json, starting empty");
                return store;
            }
        };

        for (index, item) in items.iter().enumerate() {
            let Some(record) = item.as_object() else {
                debug!(index, "skipping non-object entry");
                continue;
            };
            let name = record.get("name").and_then(Value::as_str);
            let phone = record
                .get("phone")
                .and_then(Value::as_str)
                .filter(|phone| !phone.is_empty());
            let Some(contact) = Contact::from_parts(name, phone) else {
                debug!(index, "skipping entry without a usable name or phone");
                continue;
            };
            if !store.insert(contact) {
                debug!(index, "skipping duplicate entry");
            }
        }

        store
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        file::write_contacts(path, &self.contacts)?;
        debug!(path = %path.display(), count = self.len(), "contacts saved");
        Ok(())
    }

    pub fn add(&mut self, name: &str, phone: &str) -> Result<&Contact> {
        let contact = Contact::new(name, phone)?;
        let key = contact.key();
        if self.keys.contains(&key) {
            return Err(StoreError::Duplicate {
                phone: key.to_string(),
            });
        }
        self.keys.insert(key);
        self.contacts.push(contact);
        Ok(&self.contacts[self.contacts.len() - 1])
    }

    /// Case-insensitive name substring or phone digit substring match.
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> impl Iterator<Item = &Contact> + '_ {
        let needle = query.trim().to_lowercase();
        let candidates = if needle.is_empty() {
            &self.contacts[..0]
        } else {
            &self.contacts[..]
        };
        candidates.iter().filter(move |contact| {
            contact.name.to_lowercase().contains(&needle)
                || contact
                    .phone
                    .as_deref()
                    .is_some_and(|phone| phone.contains(&needle))
        })
    }

    /// Removes the record keyed by `identifier` when it normalizes to a
    /// stored phone; otherwise removes every record whose name equals it
    /// case-insensitively.
    pub fn delete(&mut self, identifier: &str) -> bool {
        if identifier.trim().is_empty() {
            return false;
        }

        if let Some(key) = ContactKey::from_phone(identifier) {
            if self.keys.remove(&key) {
                self.contacts.retain(|contact| contact.key() != key);
                return true;
            }
        }

        let before = self.contacts.len();
        let keys = &mut self.keys;
        self.contacts.retain(|contact| {
            if contact.name_matches(identifier) {
                keys.remove(&contact.key());
                false
            } else {
                true
            }
        });
        self.contacts.len() != before
    }

    pub fn list(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.contacts.iter()
    }

    pub fn get(&self, key: &ContactKey) -> Option<&Contact> {
        if !self.keys.contains(key) {
            return None;
        }
        self.contacts.iter().find(|contact| &contact.key() == key)
    }

    pub fn contains_key(&self, key: &ContactKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn insert(&mut self, contact: Contact) -> bool {
        if !self.keys.insert(contact.key()) {
            return false;
        }
        self.contacts.push(contact);
        true
    }
}

impl<'a> IntoIterator for &'a ContactStore {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
