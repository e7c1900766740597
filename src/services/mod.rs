pub mod collection;
pub mod persistence;
pub mod store;
