//! HTTP client and response decoding for the random-user API.

use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Public endpoint returning one random profile per call.
pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";

/// HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub type FetchResult<T> = Result<T, FetchError>;

#[derive(Debug)]
pub enum FetchError {
    /// Transport failure, including timeouts.
    Network(reqwest::Error),
    /// Non-success HTTP status.
    Status(u16),
    /// Body did not match the expected envelope.
    Decode(serde_json::Error),
    /// Envelope decoded but `results` was empty.
    EmptyResults,
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(err) => write!(f, "network error: {err}"),
            Self::Status(status) => write!(f, "unexpected HTTP status {status}"),
            Self::Decode(err) => write!(f, "unexpected response body: {err}"),
            Self::EmptyResults => write!(f, "response contained no users"),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Network(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::Status(_) | Self::EmptyResults => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(value)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// The fields of one profile the widget displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomUser {
    pub title: String,
    pub first: String,
    pub last: String,
    pub email: String,
    pub city: String,
    pub country: String,
    pub avatar_url: String,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    results: Vec<ApiUser>,
}

#[derive(Debug, Deserialize)]
struct ApiUser {
    name: ApiName,
    email: String,
    location: ApiLocation,
    picture: ApiPicture,
}

#[derive(Debug, Deserialize)]
struct ApiName {
    title: String,
    first: String,
    last: String,
}

// `city` and `country` only; the API's numeric/object location fields vary.
#[derive(Debug, Deserialize)]
struct ApiLocation {
    city: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct ApiPicture {
    large: String,
}

/// Decodes a response body, taking the first user of `results`.
pub fn decode_random_user(body: &str) -> FetchResult<RandomUser> {
    let envelope: Envelope = serde_json::from_str(body)?;
    let user = envelope
        .results
        .into_iter()
        .next()
        .ok_or(FetchError::EmptyResults)?;

    Ok(RandomUser {
        title: user.name.title,
        first: user.name.first,
        last: user.name.last,
        email: user.email,
        city: user.location.city,
        country: user.location.country,
        avatar_url: user.picture.large,
    })
}

/// Anything the widget can fetch a profile from.
pub trait UserSource {
    fn fetch_user(&self) -> FetchResult<RandomUser>;
}

/// Blocking HTTP source for the random-user API.
pub struct RandomUserClient {
    client: Client,
    endpoint: String,
}

impl RandomUserClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> FetchResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl UserSource for RandomUserClient {
    fn fetch_user(&self) -> FetchResult<RandomUser> {
        debug!(
            "event=user_fetch module=remote status=start endpoint={}",
            self.endpoint
        );

        let response = self
            .client
            .get(&self.endpoint)
            .header(USER_AGENT, format!("listdeck/{}", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "event=user_fetch module=remote status=error error_code=http_status http_status={}",
                status.as_u16()
            );
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text()?;
        decode_random_user(&body)
    }
}
