//! Integration tests for the HMC logon session against a mock HMC

use hmc_client::adapters::hmc::{paths, HmcClient, Session, SessionOptions};
use hmc_client::config::secret_string;
use hmc_client::domain::{AuthError, FetchError, HmcError};
use mockito::Matcher;
use std::time::Duration;
use tokio::net::TcpListener;

const LPAR_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:ns2="http://a9.com/-/spec/opensearch/1.1/">
  <id>4d6f2a1c-0b1e-3d0a-9c55-7a3b1e0f0c11</id>
  <entry>
    <content type="application/vnd.ibm.powervm.uom+xml; type=LogicalPartition">
      <LogicalPartition:LogicalPartition xmlns:LogicalPartition="http://www.ibm.com/xmlns/systems/power/firmware/uom/mc/2012_10/" schemaVersion="V1_3_0">
        <LogicalPartition:PartitionID>1</LogicalPartition:PartitionID>
        <LogicalPartition:PartitionName>lpar1</LogicalPartition:PartitionName>
        <LogicalPartition:PartitionUUID>u1</LogicalPartition:PartitionUUID>
      </LogicalPartition:LogicalPartition>
    </content>
  </entry>
</feed>"#;

fn session_for(url: &str) -> Session {
    Session::new(
        "hscroot",
        secret_string("abc123".to_string()),
        url,
        SessionOptions::default(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_login_sends_logon_request() {
    let mut server = mockito::Server::new_async().await;
    let logon = server
        .mock("PUT", "/rest/api/web/Logon")
        .match_header(
            "content-type",
            "application/vnd.ibm.powervm.web+xml; type=LogonRequest",
        )
        .match_header(
            "accept",
            "application/vnd.ibm.powervm.web+xml; type=LogonResponse",
        )
        .match_header("x-audit-memento", "hmctest")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"schemaVersion="V1_1_0""#.to_string()),
            Matcher::Regex(r#"<UserID kb="CUR" kxe="false">hscroot</UserID>"#.to_string()),
            Matcher::Regex(r#"<Password kb="CUR" kxe="false">abc123</Password>"#.to_string()),
        ]))
        .with_status(200)
        .with_header("set-cookie", "JSESSIONID=abc123; Path=/")
        .with_body("<LogonResponse/>")
        .create_async()
        .await;

    let mut session = session_for(&server.url());
    session.login().await.unwrap();

    logon.assert_async().await;
    assert!(session.is_logged_in());
}

#[tokio::test]
async fn test_fetch_after_login_carries_session_cookie() {
    let mut server = mockito::Server::new_async().await;
    let _logon = server
        .mock("PUT", "/rest/api/web/Logon")
        .with_status(200)
        .with_header("set-cookie", "JSESSIONID=abc123; Path=/")
        .create_async()
        .await;
    let feed = server
        .mock("GET", "/rest/api/uom/LogicalPartition")
        .match_header("cookie", "JSESSIONID=abc123")
        .match_header("accept", paths::FEED_ACCEPT)
        .with_status(200)
        .with_body(LPAR_FEED)
        .create_async()
        .await;

    let mut session = session_for(&server.url());
    session.login().await.unwrap();

    let cookie = session.session_cookie().unwrap();
    assert!(cookie.contains("JSESSIONID=abc123"));

    let client = HmcClient::new(session);
    let lpars = client.logical_partitions().await.unwrap();

    feed.assert_async().await;
    assert_eq!(lpars.len(), 1);
    assert_eq!(lpars[0].name, "lpar1");
    assert_eq!(lpars[0].id, 1);
    assert_eq!(lpars[0].uuid, "u1");
}

#[tokio::test]
async fn test_login_rejected_leaves_no_cookie() {
    let mut server = mockito::Server::new_async().await;
    let _logon = server
        .mock("PUT", "/rest/api/web/Logon")
        .with_status(401)
        .with_body("<HttpErrorResponse/>")
        .create_async()
        .await;

    let mut session = session_for(&server.url());
    let err = session.login().await.unwrap_err();

    match err {
        AuthError::Rejected { url, status } => {
            assert_eq!(status, 401);
            assert!(url.ends_with("/rest/api/web/Logon"));
        }
        other => panic!("Expected Rejected, got {other:?}"),
    }
    assert!(!session.is_logged_in());
    assert!(session.session_cookie().is_none());
}

#[tokio::test]
async fn test_rejected_logon_cookie_is_discarded() {
    let mut server = mockito::Server::new_async().await;
    let _logon = server
        .mock("PUT", "/rest/api/web/Logon")
        .with_status(401)
        .with_header("set-cookie", "JSESSIONID=rejected; Path=/")
        .create_async()
        .await;
    let feed = server
        .mock("GET", "/rest/api/uom/LogicalPartition")
        .match_header("cookie", Matcher::Missing)
        .with_status(401)
        .create_async()
        .await;

    let mut session = session_for(&server.url());
    let err = session.login().await.unwrap_err();
    assert!(matches!(err, AuthError::Rejected { status: 401, .. }));
    assert!(session.session_cookie().is_none());

    let err = session
        .fetch(&paths::resource_path(paths::LOGICAL_PARTITION), paths::FEED_ACCEPT)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
    feed.assert_async().await;
}

#[tokio::test]
async fn test_failed_relogin_drops_previous_cookie() {
    let mut server = mockito::Server::new_async().await;
    let accepted = server
        .mock("PUT", "/rest/api/web/Logon")
        .with_status(200)
        .with_header("set-cookie", "JSESSIONID=first; Path=/")
        .create_async()
        .await;

    let mut session = session_for(&server.url());
    session.login().await.unwrap();
    assert!(session.session_cookie().unwrap().contains("JSESSIONID=first"));

    accepted.remove_async().await;
    let _rejected = server
        .mock("PUT", "/rest/api/web/Logon")
        .with_status(403)
        .with_header("set-cookie", "JSESSIONID=second; Path=/")
        .create_async()
        .await;

    let err = session.login().await.unwrap_err();
    assert!(matches!(err, AuthError::Rejected { status: 403, .. }));
    assert!(!session.is_logged_in());
    assert!(session.session_cookie().is_none());
}

#[tokio::test]
async fn test_unresponsive_hmc_times_out() {
    // Connections complete in the listen backlog but never get an answer
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let options = SessionOptions {
        timeout: Duration::from_millis(200),
        connect_timeout: Duration::from_millis(200),
        ..SessionOptions::default()
    };
    let mut session = Session::new(
        "hscroot",
        secret_string("abc123".to_string()),
        &base_url,
        options,
    )
    .unwrap();

    let err = session.login().await.unwrap_err();
    assert!(matches!(err, AuthError::Timeout { .. }), "got {err:?}");

    let err = session
        .fetch(&paths::resource_path(paths::LOGICAL_PARTITION), paths::FEED_ACCEPT)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Timeout { .. }), "got {err:?}");
    assert_eq!(HmcError::from(err).exit_code(), 4);

    drop(listener);
}

#[tokio::test]
async fn test_fetch_server_error_reports_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/rest/api/uom/LogicalPartition")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let session = session_for(&server.url());
    let err = session
        .fetch(&paths::resource_path(paths::LOGICAL_PARTITION), paths::FEED_ACCEPT)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.url().ends_with("/rest/api/uom/LogicalPartition"));
}

#[tokio::test]
async fn test_fetch_without_login_sends_no_cookie() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/api/uom/LogicalPartition")
        .match_header("cookie", Matcher::Missing)
        .with_status(401)
        .create_async()
        .await;

    let session = session_for(&server.url());
    let err = session
        .fetch(&paths::resource_path(paths::LOGICAL_PARTITION), paths::FEED_ACCEPT)
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, FetchError::Status { status: 401, .. }));
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let mut server = mockito::Server::new_async().await;
    let logon = server
        .mock("PUT", "/rest/api/web/Logon")
        .with_status(200)
        .create_async()
        .await;

    let mut session = session_for(&format!("{}/", server.url()));
    session.login().await.unwrap();

    logon.assert_async().await;
}

#[tokio::test]
async fn test_search_value_is_percent_encoded() {
    let mut server = mockito::Server::new_async().await;
    let search = server
        .mock(
            "GET",
            "/rest/api/uom/SharedStoragePool/search/(StoragePoolName==pool%201)",
        )
        .with_status(200)
        .with_body(r#"<feed xmlns="http://www.w3.org/2005/Atom"/>"#)
        .create_async()
        .await;

    let client = HmcClient::new(session_for(&server.url()));
    let uuids = client.shared_storage_pool_uuids("pool 1").await.unwrap();

    search.assert_async().await;
    assert!(uuids.is_empty());
}

#[tokio::test]
async fn test_login_connection_refused_is_transport_error() {
    let mut session = session_for("http://127.0.0.1:1");
    let err = session.login().await.unwrap_err();

    assert!(matches!(err, AuthError::Transport { .. }));
    assert_eq!(HmcError::from(err).exit_code(), 3);
}

#[tokio::test]
async fn test_invalid_credential_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let logon = server
        .mock("PUT", "/rest/api/web/Logon")
        .with_status(200)
        .expect(0)
        .create_async()
        .await;

    let mut session = Session::new(
        "hscroot",
        secret_string("bad\u{0}password".to_string()),
        &server.url(),
        SessionOptions::default(),
    )
    .unwrap();

    let err = session.login().await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredential(_)));
    logon.assert_async().await;
}
