pub mod contact;
pub mod name;
pub mod phone;

pub use contact::{Contact, ContactKey};
pub use name::normalize_name;
pub use phone::normalize_phone;
