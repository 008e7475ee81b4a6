//! Extension seams around the dispatcher: request signing and call spacing.
//!
//! [`RequestSigner`] lets callers replace the default OAuth 1.0a signer, and
//! [`CallInterval`] is the gate every dispatched call passes through so the client
//! never exceeds the API's per-second quota on its own.

pub mod rate_limit;
pub mod request_signer;

pub use rate_limit::*;
pub use request_signer::*;
