//! Host settings providers

mod env_provider;
mod in_memory;

pub use env_provider::EnvSettingsProvider;
pub use in_memory::InMemorySettingsProvider;
