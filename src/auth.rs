//! Credential types: consumer keys, OAuth tokens, redacted secrets, and user identifiers.

pub mod credentials;
pub mod id;
pub mod secret;

pub use credentials::*;
pub use id::*;
pub use secret::*;
