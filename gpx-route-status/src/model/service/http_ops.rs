use super::ServiceError;
use crate::config::HttpConfiguration;
use reqwest::blocking::Client;
use std::time::Duration;

/// builds the blocking client shared by all service clients.
pub fn build_client(conf: &HttpConfiguration) -> Result<Client, ServiceError> {
    Client::builder()
        .timeout(Duration::from_secs(conf.timeout_secs))
        .connect_timeout(Duration::from_secs(conf.connect_timeout_secs))
        .user_agent(conf.user_agent.clone())
        .build()
        .map_err(|e| ServiceError::ClientBuildError(e.to_string()))
}

/// issues a GET request and returns the response body. any status other
/// than a success status is an error.
///
/// # Arguments
/// * `client` - http client
/// * `service` - name of the service, used in error messages
/// * `url` - request url without query string
/// * `query` - query parameters, url-encoded by the client
/// * `user_agent` - overrides the client user agent when provided
pub fn get_text(
    client: &Client,
    service: &'static str,
    url: &str,
    query: &[(&str, String)],
    user_agent: Option<&str>,
) -> Result<String, ServiceError> {
    log::debug!("{service} GET {url} {query:?}");
    let mut request = client.get(url).query(query);
    if let Some(ua) = user_agent {
        request = request.header(reqwest::header::USER_AGENT, ua);
    }
    let response = request.send().map_err(|e| ServiceError::RequestError {
        service,
        url: url.to_string(),
        source: e,
    })?;
    let status = response.status();
    if !status.is_success() {
        return Err(ServiceError::StatusError {
            service,
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    response.text().map_err(|e| ServiceError::RequestError {
        service,
        url: url.to_string(),
        source: e,
    })
}

/// decodes a JSON body, naming the service on failure.
pub fn decode_json<T: serde::de::DeserializeOwned>(
    service: &'static str,
    body: &str,
) -> Result<T, ServiceError> {
    serde_json::from_str(body).map_err(|e| ServiceError::DecodeError {
        service,
        message: e.to_string(),
    })
}
