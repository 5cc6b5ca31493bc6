// snapguard-core/src/ports/mod.rs

pub mod client;

pub use client::StorageClient;
