mod common;

use axum::routing::get;
use axum::Router;
use maxplayer_roster_lib::export::{self, UTF8_BOM};
use maxplayer_roster_lib::fetch_roster;
use serde_json::json;

#[tokio::test]
async fn exported_roster_reads_back_unchanged() {
    let app = Router::new().route(
        "/users",
        get(|| async {
            axum::Json(json!({ "data": [
                { "username": "Müller, GmbH", "lists": [ { "iptv_info": { "username": "m\"1", "password": "p,w", "fqdn": "m.tv", "port": 80 } } ] },
                { "username": "no-creds", "lists": [ { "iptv_info": { "fqdn": "n.tv", "port": 8080 } } ] },
                { "username": "blank-creds", "lists": [ { "iptv_info": { "username": "", "password": "", "fqdn": "b.tv", "port": 80 } } ] },
                { "username": "multi\nline", "lists": [ { "iptv_info": { "username": "x", "password": "y" } } ] }
            ]}))
        }),
    );
    let base = common::serve(app).await;
    let rows = fetch_roster(&format!("{base}/users"), "t").await.unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[2].login, None);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("roster.csv");
    let written = export::write_csv(&path, &rows).unwrap();
    assert_eq!(written, 4);

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(UTF8_BOM));
    assert_eq!(export::read_csv(&bytes).unwrap(), rows);
}
