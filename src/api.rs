use crate::errors::DashboardError;
use crate::flex_value::FlexValue;
use crate::roster::{self, Row};
use crate::subscription::SubscriptionStatus;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fixed per-request timeout for both upstream services
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("maxplayer-roster/", env!("CARGO_PKG_VERSION"));

/// One reseller record from the roster service
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RosterAccount {
    #[serde(default)]
    pub username: FlexValue,
    #[serde(default)]
    pub lists: Option<Vec<RosterList>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RosterList {
    #[serde(default)]
    pub iptv_info: IptvInfo,
}

/// Panel credentials linked to a roster list
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct IptvInfo {
    #[serde(default)]
    pub username: FlexValue,
    #[serde(default)]
    pub password: FlexValue,
    #[serde(default)]
    pub fqdn: FlexValue,
    #[serde(default)]
    pub port: FlexValue,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UserInfo {
    #[serde(default)]
    pub status: FlexValue,
    #[serde(default)]
    pub exp_date: FlexValue,
    #[serde(default)]
    pub active_cons: FlexValue,
    #[serde(default)]
    pub max_connections: FlexValue,
}

fn build_client(default_headers: HeaderMap, timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(default_headers)
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Client for the reseller roster service
#[derive(Debug, Clone)]
pub struct RosterClient {
    pub url: String,
    token: String,
    client: reqwest::Client,
}

impl RosterClient {
    pub fn new(url: String, token: String) -> Self {
        Self::with_timeout(url, token, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(url: String, token: String, timeout: Duration) -> Self {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self {
            url,
            token,
            client: build_client(headers, timeout),
        }
    }

    /// Fetch the roster once and flatten it into rows.
    ///
    /// Every failure mode collapses into `RosterFetchFailed`; no partial result is returned.
    pub async fn fetch_roster(&self) -> Result<Vec<Row>, DashboardError> {
        info!(url = %self.url, "fetching roster");
        match self.try_fetch().await {
            Ok(rows) => {
                info!(rows = rows.len(), "roster loaded");
                Ok(rows)
            }
            Err(err) => {
                warn!(error = %err, "roster fetch failed");
                Err(err)
            }
        }
    }

    async fn try_fetch(&self) -> Result<Vec<Row>, DashboardError> {
        let resp = self
            .client
            .get(&self.url)
            .header("Api-Token", &self.token)
            .send()
            .await?
            .error_for_status()?;

        let body = resp.bytes().await?;
        debug!(bytes = body.len(), "roster body received");
        let payload: serde_json::Value = serde_json::from_slice(&body)?;
        roster::flatten_payload(payload)
    }
}

/// Free-function form of [`RosterClient::fetch_roster`]
pub async fn fetch_roster(api_base_url: &str, api_token: &str) -> Result<Vec<Row>, DashboardError> {
    RosterClient::new(api_base_url.to_string(), api_token.to_string())
        .fetch_roster()
        .await
}

/// Client for the per-panel subscription status endpoint
#[derive(Debug, Clone)]
pub struct SubscriptionClient {
    timeout: Duration,
    client: reqwest::Client,
}

impl Default for SubscriptionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscriptionClient {
    pub fn new() -> Self {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            client: build_client(HeaderMap::new(), timeout),
        }
    }

    pub fn status_url(endpoint_base: &str, login: &str, secret: &str) -> String {
        // Credentials go in unescaped, matching what panels have always been sent.
        // Reserved characters in either value produce a broken query string.
        format!(
            "{}/player_api.php?username={}&password={}",
            endpoint_base.trim_end_matches('/'),
            login,
            secret
        )
    }

    /// Ask the panel for live status. Never fails: every error becomes
    /// [`SubscriptionStatus::unavailable`].
    pub async fn probe(&self, endpoint_base: &str, login: &str, secret: &str) -> SubscriptionStatus {
        match self.try_probe(endpoint_base, login, secret).await {
            Ok(status) => status,
            Err(reason) => {
                warn!(endpoint = %endpoint_base, %reason, "subscription probe failed");
                SubscriptionStatus::unavailable()
            }
        }
    }

    async fn try_probe(
        &self,
        endpoint_base: &str,
        login: &str,
        secret: &str,
    ) -> Result<SubscriptionStatus, String> {
        let url = Self::status_url(endpoint_base, login, secret);
        let resp = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                format!("timed out after {:?}", self.timeout)
            } else {
                e.to_string()
            }
        })?;

        if resp.status() != reqwest::StatusCode::OK {
            return Err(format!("status {}", resp.status()));
        }

        #[derive(Deserialize)]
        struct StatusResponse {
            #[serde(default)]
            user_info: UserInfo,
        }

        let body = resp.bytes().await.map_err(|e| e.to_string())?;
        let parsed: StatusResponse =
            serde_json::from_slice(&body).map_err(|e| format!("invalid body: {}", e))?;

        SubscriptionStatus::from_user_info(&parsed.user_info)
            .ok_or_else(|| format!("unreadable exp_date {}", parsed.user_info.exp_date))
    }
}

/// Free-function form of [`SubscriptionClient::probe`]
pub async fn probe(endpoint_base: &str, login: &str, secret: &str) -> SubscriptionStatus {
    SubscriptionClient::new().probe(endpoint_base, login, secret).await
}
