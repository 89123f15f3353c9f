use thiserror::Error;

/// Errors surfaced to the dashboard user
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DashboardError {
    /// No roster token in the environment, `.env`, or config file
    #[error("API_TOKEN is not configured")]
    MissingToken,

    /// Any network, status, decode or shape failure while loading the roster
    #[error("Roster fetch failed: {0}")]
    RosterFetchFailed(String),

    /// Writing the CSV export failed
    #[error("Export failed: {0}")]
    Export(String),

    /// Config file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl DashboardError {
    /// Short title used by the error popup
    pub fn title(&self) -> &'static str {
        match self {
            DashboardError::MissingToken => "Missing Token",
            DashboardError::RosterFetchFailed(_) => "No Roster Available",
            DashboardError::Export(_) => "Export Failed",
            DashboardError::Config(_) => "Config Error",
        }
    }

    /// Get detailed diagnostic information about the error
    pub fn diagnostics(&self) -> String {
        match self {
            DashboardError::MissingToken => {
                "Missing API_TOKEN\nSuggestion: export API_TOKEN, add it to .env, or set \"api_token\" in config.json".to_string()
            }
            DashboardError::RosterFetchFailed(source) => {
                format!("Roster Fetch Failed\nError: {}\nSuggestion: Check the token and roster URL, then press 'l' to retry", source)
            }
            DashboardError::Export(source) => {
                format!("Export Failed\nError: {}\nSuggestion: Check that the export path is writable", source)
            }
            DashboardError::Config(source) => {
                format!("Config Error\nError: {}\nSuggestion: Fix or remove config.json", source)
            }
        }
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DashboardError::RosterFetchFailed(format!("request timed out: {}", err))
        } else {
            DashboardError::RosterFetchFailed(err.to_string())
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::RosterFetchFailed(format!("invalid roster payload: {}", err))
    }
}
