//! Async client for the Netflix catalog + account API: OAuth 1.0a request signing, a
//! self-limiting dispatcher, and a typed object graph normalized from the API's
//! inconsistently shaped JSON.
//!
//! The entry point is [`client::Netflix`]. It runs the three-legged authorization
//! handshake, signs every call with the consumer (and optional user) credentials, spaces
//! calls through a shared [`ext::CallInterval`] gate, classifies failures into
//! [`classify::ApiError`], and turns successful bodies into [`normalize::Node`] trees whose
//! object nodes are already [`model`] values.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod classify;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod ext;
pub mod http;
pub mod model;
pub mod normalize;
pub mod oauth;
pub mod obs;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		path::{Path, PathBuf},
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
