use std::time::Duration;

use reqwest::Proxy;
use serde::Deserialize;
use thiserror::Error;

use crate::directory::{Directory, PersonRecord};
use crate::utils;

pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";
pub const DEFAULT_RESULTS: u32 = 12;

#[derive(Clone, Debug)]
pub struct FetchOptions {
    pub endpoint: String,
    pub results: u32,
    pub nationalities: Vec<String>,
    pub timeout_seconds: usize,
    pub proxy: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            results: DEFAULT_RESULTS,
            nationalities: utils::DEFAULT_NATIONALITIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            timeout_seconds: 10,
            proxy: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport failure: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected response status {status}")]
    BadStatus { status: u16 },

    #[error("malformed payload: {message}")]
    MalformedPayload { message: String },

    #[error("failed to build HTTP client: {source}")]
    HttpClientBuild {
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to setup proxy: {proxy}: {source}")]
    ProxySetup {
        proxy: String,
        #[source]
        source: reqwest::Error,
    },
}

// wire shape of the randomuser payload; only the fields the directory needs
#[derive(Debug, Deserialize)]
struct ApiPayload {
    results: Vec<ApiPerson>,
}

#[derive(Debug, Deserialize)]
struct ApiPerson {
    login: ApiLogin,
    name: ApiName,
    email: String,
    phone: String,
    location: ApiLocation,
    picture: ApiPicture,
    dob: ApiDob,
}

#[derive(Debug, Deserialize)]
struct ApiLogin {
    uuid: String,
}

#[derive(Debug, Deserialize)]
struct ApiName {
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    street: ApiStreet,
    city: String,
    state: String,
    postcode: Postcode,
}

#[derive(Debug, Deserialize)]
struct ApiStreet {
    number: u32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiPicture {
    large: String,
}

#[derive(Debug, Deserialize)]
struct ApiDob {
    date: String,
}

// postcodes arrive as numbers for some locales and strings for others
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Postcode {
    Text(String),
    Number(u64),
}

impl Postcode {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

impl ApiPerson {
    fn into_record(self) -> Result<PersonRecord, FetchError> {
        let birthdate =
            utils::format_birthdate(&self.dob.date).map_err(|message| {
                FetchError::MalformedPayload { message }
            })?;
        Ok(PersonRecord {
            id: self.login.uuid,
            first: self.name.first,
            last: self.name.last,
            email: self.email,
            phone: self.phone,
            street_number: self.location.street.number.to_string(),
            street_name: self.location.street.name,
            city: self.location.city,
            state: self.location.state,
            postcode: self.location.postcode.into_string(),
            portrait_url: self.picture.large,
            birthdate,
        })
    }
}

pub fn build_client(options: &FetchOptions) -> Result<reqwest::Client, FetchError> {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::USER_AGENT,
        reqwest::header::HeaderValue::from_static("staffdir/0.2"),
    );

    let mut builder = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(options.timeout_seconds as u64));

    if let Some(proxy_url) = options.proxy.as_deref() {
        let proxy = Proxy::all(proxy_url).map_err(|source| FetchError::ProxySetup {
            proxy: proxy_url.to_string(),
            source,
        })?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|source| FetchError::HttpClientBuild { source })
}

/// The session's single fetch. Issues one GET for the configured number of
/// people, checks the status, decodes the payload, and builds the directory.
/// Any failure is terminal for the fetch: the caller reports it and leaves
/// the gallery empty.
pub async fn fetch_directory(
    client: &reqwest::Client,
    options: &FetchOptions,
) -> Result<Directory, FetchError> {
    let response = client
        .get(&options.endpoint)
        .query(&[
            ("results", options.results.to_string()),
            ("nat", options.nationalities.join(",")),
            ("noinfo", String::new()),
        ])
        .send()
        .await
        .map_err(|source| FetchError::Transport { source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::BadStatus {
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| FetchError::Transport { source })?;

    parse_payload(&body)
}

/// Decodes a response body into a directory. Split from the network path so
/// payload handling is testable without a server.
pub fn parse_payload(body: &[u8]) -> Result<Directory, FetchError> {
    let payload: ApiPayload = serde_json::from_slice(body).map_err(|e| {
        FetchError::MalformedPayload {
            message: e.to_string(),
        }
    })?;

    let mut records = Vec::with_capacity(payload.results.len());
    for person in payload.results {
        records.push(person.into_record()?);
    }

    Directory::new(records).map_err(|message| FetchError::MalformedPayload { message })
}
