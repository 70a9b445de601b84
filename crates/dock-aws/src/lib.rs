mod config;
pub use config::AwsConfig;

mod errors;

mod convert;

mod client;
pub use client::EcsControlPlane;
