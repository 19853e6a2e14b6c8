pub mod batch;
pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod random;
pub mod receipts;
pub mod references;
pub mod request;
pub mod style;
pub mod subjects;
pub mod weights;
