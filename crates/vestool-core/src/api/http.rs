//! Blocking HTTP GET via the curl crate (libcurl).

use std::time::Duration;

use super::ApiError;
use crate::config::HttpConfig;

/// Performs a GET and returns the response body.
///
/// Follows redirects. Any status outside 2xx is an error.
pub(super) fn get(url: &str, http: &HttpConfig) -> Result<Vec<u8>, ApiError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(http.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(http.timeout_secs))?;
    easy.useragent(concat!("vestool/", env!("CARGO_PKG_VERSION")))?;

    let mut headers = curl::easy::List::new();
    headers.append("Accept: application/json")?;
    easy.http_headers(headers)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(ApiError::Status {
            url: url.to_string(),
            code,
        });
    }
    Ok(body)
}
