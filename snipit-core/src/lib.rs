pub mod chord;
pub mod config;
pub mod directory;
pub mod error;
pub mod filename;
pub mod sniffer;
pub mod types;

// Keep the public surface small and intentional.
pub use chord::*;
pub use config::*;
pub use directory::*;
pub use error::*;
pub use types::*;
