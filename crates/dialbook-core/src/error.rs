use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("name is required")]
    InvalidName,
    #[error("invalid phone number {0:?}: expected 10 digits (leading 0 or country code allowed)")]
    InvalidPhone(String),
    #[error("contact needs a name or a valid phone number")]
    EmptyContact,
}
