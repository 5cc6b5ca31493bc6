// snapguard-core/src/infrastructure/adapters/mod.rs

pub mod ec2;

pub use ec2::Ec2StorageClient;
