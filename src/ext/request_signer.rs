//! Request signing contract used by the dispatcher.

// self
use crate::{
	_prelude::*,
	auth::{Consumer, OAuthToken},
	oauth::SignedRequest,
};

/// Signs an outbound request with consumer credentials and an optional user token.
///
/// The dispatcher hands over the absolute target URL and the full parameter map
/// (including the injected `output` and `method` entries); implementations return a
/// [`SignedRequest`] the transport can render as a URL or header. The default
/// implementation is [`HmacSha1Signer`](crate::oauth::HmacSha1Signer).
pub trait RequestSigner
where
	Self: Send + Sync,
{
	/// Produces a signed request for `url` + `params`.
	fn sign(
		&self,
		consumer: &Consumer,
		token: Option<&OAuthToken>,
		url: &Url,
		params: &BTreeMap<String, String>,
	) -> Result<SignedRequest>;
}
