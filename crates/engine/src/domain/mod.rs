pub mod attachment;
pub mod delete_queue;
pub mod deriver;
pub mod error;
pub mod naming;
pub mod registry;
pub mod store;
pub mod types;
pub mod urls;
