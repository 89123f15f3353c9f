use crate::api::{IptvInfo, RosterAccount};
use crate::errors::DashboardError;
use crate::flex_value::FlexValue;
use serde::{Deserialize, Serialize};

/// Placeholder for missing account names and hostnames
pub const NOT_AVAILABLE: &str = "N/A";

/// Scheme used when composing a row's endpoint base
pub const ENDPOINT_SCHEME: &str = "http";

/// One reseller account joined with its first linked credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub account_name: String,
    pub login: Option<String>,
    pub secret: Option<String>,
    pub domain: String,
    pub endpoint_base: String,
}

// An empty credential carries nothing a null does not, and CSV cannot tell them apart
fn non_empty(value: &FlexValue) -> Option<String> {
    value.to_text().filter(|s| !s.is_empty())
}

impl Row {
    fn from_account(account: &RosterAccount, info: &IptvInfo) -> Self {
        let domain = info
            .fqdn
            .to_text()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        // A missing port leaves a dangling ':' that the probe will fail on
        let port = info.port.to_text().unwrap_or_default();
        Self {
            account_name: account
                .username
                .to_text()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            login: non_empty(&info.username),
            secret: non_empty(&info.password),
            endpoint_base: format!("{}://{}:{}", ENDPOINT_SCHEME, domain, port),
            domain,
        }
    }

    /// Case-insensitive substring match across every field
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    /// Field values in display/export column order, null as empty
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.account_name,
            self.login.as_deref().unwrap_or(""),
            self.secret.as_deref().unwrap_or(""),
            &self.domain,
            &self.endpoint_base,
        ]
    }
}

/// Flatten a decoded roster payload into rows, preserving account order.
///
/// An object payload carries its accounts under `data` (absent means none),
/// an array payload is the account list itself, and any other shape yields no
/// rows. Accounts without linked lists are skipped; only the first list of an
/// account contributes.
pub fn flatten_payload(payload: serde_json::Value) -> Result<Vec<Row>, DashboardError> {
    let accounts = match payload {
        serde_json::Value::Object(mut map) => match map.remove("data") {
            Some(data) => serde_json::from_value::<Vec<RosterAccount>>(data)?,
            None => Vec::new(),
        },
        list @ serde_json::Value::Array(_) => serde_json::from_value::<Vec<RosterAccount>>(list)?,
        _ => Vec::new(),
    };

    Ok(flatten_accounts(&accounts))
}

pub fn flatten_accounts(accounts: &[RosterAccount]) -> Vec<Row> {
    accounts
        .iter()
        .filter_map(|account| {
            let first = account.lists.as_ref()?.first()?;
            Some(Row::from_account(account, &first.iptv_info))
        })
        .collect()
}

/// Indices of rows matching the filter text, in roster order
pub fn filter_indices(rows: &[Row], query: &str) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.matches(query))
        .map(|(i, _)| i)
        .collect()
}
