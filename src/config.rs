//! Module containing the [`Config`] struct, the API's configuration.

use std::env;
use std::error::Error as StdError;
use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::Context;
use derive_more::Debug;
use url::Url;

/// Configuration values for the API.
///
/// These are read from the environment on startup.
#[derive(Debug, Clone)]
pub struct Config {
	/// The ip address and port the API is going to listen on.
	#[debug("{addr}")]
	pub addr: SocketAddr,

	/// The database URL that the API will connect to.
	#[debug("{}", database_url.as_str())]
	pub database_url: Url,

	/// The bearer token required for admin operations (publishing case sets).
	///
	/// Compared for exact equality against the `Authorization` header.
	#[debug("*****")]
	pub admin_token: String,

	/// The origin allowed to make cross-site requests against mutating routes.
	///
	/// When unset, mutating routes allow any origin (the default for local development).
	pub cors_origin: Option<String>,
}

impl Config {
	/// Creates a new [`Config`] object by reading from the environment.
	pub fn new() -> anyhow::Result<Self> {
		let ip_addr = parse_from_env("AEROBENCH_API_IP")?;
		let port = parse_from_env("AEROBENCH_API_PORT")?;
		let addr = SocketAddr::new(ip_addr, port);
		let database_url = parse_from_env("DATABASE_URL")?;
		let admin_token = parse_from_env("AEROBENCH_API_ADMIN_TOKEN")?;
		let cors_origin = parse_from_env_opt("AEROBENCH_API_CORS_ORIGIN")?;

		Ok(Self {
			addr,
			database_url,
			admin_token,
			cors_origin,
		})
	}
}

/// Parses an environment variable into a `T`.
fn parse_from_env<T>(var: &str) -> anyhow::Result<T>
where
	T: FromStr,
	T::Err: StdError + Send + Sync + 'static,
{
	let value = env::var(var).with_context(|| format!("missing `{var}` environment variable"))?;

	if value.is_empty() {
		anyhow::bail!("`{var}` cannot be empty");
	}

	<T as FromStr>::from_str(&value).with_context(|| format!("failed to parse `{var}`"))
}

/// Parses an environment variable into an `Option<T>`, returning `None` if the variable is not
/// set or empty.
fn parse_from_env_opt<T>(var: &str) -> anyhow::Result<Option<T>>
where
	T: FromStr,
	T::Err: StdError + Send + Sync + 'static,
{
	let Some(value) = env::var(var).ok() else {
		return Ok(None);
	};

	if value.is_empty() {
		return Ok(None);
	}

	<T as FromStr>::from_str(&value)
		.map(Some)
		.with_context(|| format!("failed to parse `{var}`"))
}
