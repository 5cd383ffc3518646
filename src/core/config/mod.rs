pub mod data;
pub mod defaults;
pub mod io;
pub mod keys;
pub mod orchestrator;
pub mod printing;

pub use data::Config;
pub use keys::ConfigKeyError;
