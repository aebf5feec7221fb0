use url::Url;

use crate::error::{AppError, AppResult, HttpError, ValidationError};

/// Names and values of the query parameters appended to the target URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryShape {
    pub user_param: String,
    pub user_prefix: String,
    pub limit_param: String,
    pub limit: u64,
}

impl Default for QueryShape {
    fn default() -> Self {
        Self {
            user_param: "user".to_owned(),
            user_prefix: "user".to_owned(),
            limit_param: "limit".to_owned(),
            limit: 20,
        }
    }
}

/// The fixed endpoint under test. Passed explicitly into every sweep.
#[derive(Debug, Clone)]
pub struct TargetEndpoint {
    base: Url,
    query: QueryShape,
}

impl TargetEndpoint {
    /// Validates the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is malformed, not http(s), has no host,
    /// or cannot carry query parameters.
    pub fn new(url: &str, query: QueryShape) -> AppResult<Self> {
        let base = Url::parse(url).map_err(|err| {
            AppError::validation(ValidationError::InvalidUrl {
                url: url.to_owned(),
                source: err,
            })
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::validation(ValidationError::UnsupportedScheme {
                scheme: base.scheme().to_owned(),
            }));
        }
        if base.host_str().is_none() {
            return Err(AppError::validation(ValidationError::UrlMissingHost));
        }
        if base.cannot_be_a_base() {
            return Err(AppError::http(HttpError::UrlCannotBeBase {
                url: url.to_owned(),
            }));
        }
        Ok(Self { base, query })
    }

    /// URL of the request for one user id, e.g. `...?user=user42&limit=20`.
    #[must_use]
    pub fn url_for_user(&self, user_id: u64) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair(
                &self.query.user_param,
                &format!("{}{}", self.query.user_prefix, user_id),
            )
            .append_pair(&self.query.limit_param, &self.query.limit.to_string());
        url
    }

    #[must_use]
    pub fn host(&self) -> &str {
        self.base.host_str().unwrap_or("unknown-host")
    }

    #[must_use]
    pub fn port(&self) -> u16 {
        self.base.port_or_known_default().unwrap_or(0)
    }

    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }
}
