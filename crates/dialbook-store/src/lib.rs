pub mod contacts;
pub mod error;
pub mod file;
pub mod paths;

pub use contacts::ContactStore;
pub use error::{Result, StoreError, StoreErrorKind};
