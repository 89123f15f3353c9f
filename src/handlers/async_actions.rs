use crate::api::{RosterClient, SubscriptionClient};
use crate::app::{App, AsyncAction, ProbeRequest};
use tokio::sync::mpsc;
use tracing::debug;

/// Kick off a roster load in the background.
/// A missing token is reported immediately instead of issuing a request.
pub fn spawn_roster_load(app: &mut App, tx: &mpsc::Sender<AsyncAction>) {
    let generation = app.begin_roster_load();

    let token = match app.config.token() {
        Ok(token) => token.to_string(),
        Err(error) => {
            app.apply_roster_failure(generation, error);
            return;
        }
    };

    let client = RosterClient::new(app.config.roster_url.clone(), token);
    let tx = tx.clone();
    tokio::spawn(async move {
        let action = match client.fetch_roster().await {
            Ok(rows) => AsyncAction::RosterLoaded { generation, rows },
            Err(error) => AsyncAction::RosterFailed { generation, error },
        };
        let _ = tx.send(action).await;
    });
}

pub fn spawn_probe(client: &SubscriptionClient, request: ProbeRequest, tx: &mpsc::Sender<AsyncAction>) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        debug!(row = request.row, endpoint = %request.endpoint_base, "probing subscription");
        let status = client
            .probe(&request.endpoint_base, &request.login, &request.secret)
            .await;
        debug!(row = request.row, status = %status.summary(), "probe finished");
        let _ = tx
            .send(AsyncAction::ProbeFinished {
                generation: request.generation,
                row: request.row,
                seq: request.seq,
                status,
            })
            .await;
    });
}

pub fn handle_async_action(app: &mut App, action: AsyncAction) {
    match action {
        AsyncAction::RosterLoaded { generation, rows } => {
            app.apply_roster(generation, rows);
        }
        AsyncAction::RosterFailed { generation, error } => {
            app.apply_roster_failure(generation, error);
        }
        AsyncAction::ProbeFinished {
            generation,
            row,
            seq,
            status,
        } => {
            app.apply_probe(generation, row, seq, status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::errors::DashboardError;

    #[tokio::test]
    async fn test_missing_token_fails_without_request() {
        let mut app = App::new(AppConfig::default());
        let (tx, mut rx) = mpsc::channel(4);
        spawn_roster_load(&mut app, &tx);
        assert!(!app.state_loading);
        assert_eq!(app.error, Some(DashboardError::MissingToken));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_failure_action_sets_error() {
        let mut app = App::new(AppConfig::default());
        let generation = app.begin_roster_load();
        handle_async_action(
            &mut app,
            AsyncAction::RosterFailed {
                generation,
                error: DashboardError::RosterFetchFailed("status 500".into()),
            },
        );
        assert!(!app.state_loading);
        assert!(app.error.is_some());
    }
}
