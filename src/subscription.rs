use crate::api::UserInfo;
use chrono::{DateTime, NaiveDate};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
    Active,
    Inactive,
    /// The subscription service could not be asked or did not answer sensibly
    Unknown,
}

impl SubscriptionState {
    pub fn display_name(&self) -> &'static str {
        match self {
            SubscriptionState::Active => "Active",
            SubscriptionState::Inactive => "Inactive",
            SubscriptionState::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expiry {
    Date(NaiveDate),
    Unlimited,
    Unknown,
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expiry::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Expiry::Unlimited => write!(f, "unlimited"),
            Expiry::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connections {
    Usage { active: String, max: String },
    Unknown,
}

impl fmt::Display for Connections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connections::Usage { active, max } => write!(f, "{}/{}", active, max),
            Connections::Unknown => write!(f, "unknown"),
        }
    }
}

/// Live status of one row's subscription, fetched on demand and never stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionStatus {
    pub state: SubscriptionState,
    pub expiry: Expiry,
    pub connections: Connections,
}

impl SubscriptionStatus {
    /// Uniform status for every probe failure
    pub fn unavailable() -> Self {
        Self {
            state: SubscriptionState::Unknown,
            expiry: Expiry::Unknown,
            connections: Connections::Unknown,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        self.state == SubscriptionState::Unknown
    }

    /// Derive a status from the panel's `user_info` block.
    ///
    /// Returns `None` when `exp_date` is set but is not a Unix timestamp.
    pub fn from_user_info(info: &UserInfo) -> Option<Self> {
        let state = match info.status.to_text().as_deref() {
            Some("Active") => SubscriptionState::Active,
            _ => SubscriptionState::Inactive,
        };

        let expiry = if info.exp_date.is_blank() {
            Expiry::Unlimited
        } else {
            let ts = info.exp_date.as_i64()?;
            Expiry::Date(DateTime::from_timestamp(ts, 0)?.date_naive())
        };

        let connections = Connections::Usage {
            active: info.active_cons.text_or("0"),
            max: info.max_connections.text_or("0"),
        };

        Some(Self {
            state,
            expiry,
            connections,
        })
    }

    /// One-line summary for table rows
    pub fn summary(&self) -> String {
        format!(
            "{} | exp {} | cons {}",
            self.state.display_name(),
            self.expiry,
            self.connections
        )
    }
}
