//! JSON file storage

mod store;

pub use store::JsonStore;
