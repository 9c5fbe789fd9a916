//! Endpoint routing tests for IPs, monitoring, contact groups and the catalog.

mod common;

use common::{api_path, client_for, envelope, last_form_body};
use jiffybox::{ContactGroup, IpMove, MonitorCheck};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount(server: &MockServer, verb: &str, resource: &str) {
    Mock::given(method(verb))
        .and(path(api_path(resource)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(json!(format!("{verb} {resource}")))),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_delete_monitor_uses_check_id() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "DELETE", "monitoring/42").await;

    let client = client_for(&mock_server);
    let result = client.delete_monitor("42").await.unwrap();

    assert_eq!(result["result"], "DELETE monitoring/42");
}

#[tokio::test]
async fn test_monitor_reads() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "GET", "monitoring").await;
    mount(&mock_server, "GET", "monitoring/42").await;
    mount(&mock_server, "GET", "monitoring/42/status").await;
    mount(&mock_server, "GET", "monitoring/192.0.2.10/status").await;

    let client = client_for(&mock_server);
    client.list_monitors().await.unwrap();
    client.monitor_details(42).await.unwrap();
    client.monitor_status(42).await.unwrap();
    client.ip_monitor_statuses("192.0.2.10").await.unwrap();
}

#[tokio::test]
async fn test_create_monitor() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "POST", "monitoring").await;

    let client = client_for(&mock_server);
    let mut check = MonitorCheck::new("web", "192.0.2.10", "http", 80);
    check.check_interval = Some(5);
    check.contact_groups = Some(3);
    client.create_monitor(&check).await.unwrap();

    let body = last_form_body(&mock_server).await;
    assert_eq!(body["checkType"], "http");
    assert_eq!(body["port"], "80");
    assert_eq!(body["checkInterval"], "5");
    assert_eq!(body["contactGroups"], "3");
}

#[tokio::test]
async fn test_create_monitor_validation() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    // port is required for new checks
    let err = client
        .create_monitor(&json!({"name": "web", "ip": "192.0.2.10", "checkType": "http"}))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("port"));

    let err = client
        .create_monitor(&json!({
            "name": "web",
            "ip": "192.0.2.10",
            "checkType": "http",
            "port": "http"
        }))
        .await
        .unwrap_err();
    assert!(err.is_validation());

    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_and_update_monitor() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "POST", "monitoring/42").await;
    mount(&mock_server, "PUT", "monitoring/42").await;

    let client = client_for(&mock_server);

    // port is optional when duplicating
    client
        .duplicate_monitor(42, &json!({"name": "web-2", "ip": "192.0.2.11", "checkType": "http"}))
        .await
        .unwrap();

    client
        .update_monitor(42, &json!({"retryTolerance": 3}))
        .await
        .unwrap();
    assert_eq!(last_form_body(&mock_server).await["retryTolerance"], "3");
}

#[tokio::test]
async fn test_ip_endpoints() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "GET", "ips").await;
    mount(&mock_server, "GET", "ips/11").await;
    mount(&mock_server, "PUT", "ips/11/7/move").await;

    let client = client_for(&mock_server);
    client.list_ips().await.unwrap();
    client.box_ips(11).await.unwrap();

    let result = client
        .move_ip(11, 7, &IpMove { targetid: 12 })
        .await
        .unwrap();
    assert_eq!(result["result"], "PUT ips/11/7/move");
    assert_eq!(last_form_body(&mock_server).await["targetid"], "12");
}

#[tokio::test]
async fn test_move_ip_requires_numeric_target() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let err = client.move_ip(11, 7, &json!({})).await.unwrap_err();
    assert!(err.is_validation());

    let err = client
        .move_ip(11, 7, &json!({"targetId": "box-12"}))
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_contact_group_endpoints() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "GET", "contactGroups").await;
    mount(&mock_server, "GET", "contactGroups/3").await;
    mount(&mock_server, "DELETE", "contactGroups/3").await;
    mount(&mock_server, "POST", "contactGroups").await;
    mount(&mock_server, "PUT", "contactGroups/3").await;
    mount(&mock_server, "POST", "contactGroups/3").await;

    let client = client_for(&mock_server);
    let group = ContactGroup {
        name: "ops".to_string(),
        contacts: vec!["ops@example.com".to_string()],
    };

    client.list_contact_groups().await.unwrap();
    client.contact_group_details(3).await.unwrap();
    client.delete_contact_group(3).await.unwrap();
    client.create_contact_group(&group).await.unwrap();
    client.change_contact_group(3, &group).await.unwrap();
    let result = client.duplicate_contact_group(3, &group).await.unwrap();

    assert_eq!(result["result"], "POST contactGroups/3");
    let body = last_form_body(&mock_server).await;
    assert_eq!(body["contacts"], "ops@example.com");
}

#[tokio::test]
async fn test_contact_group_repeats_contacts_in_form() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "POST", "contactGroups").await;

    let client = client_for(&mock_server);
    client
        .create_contact_group(&json!({
            "name": "ops",
            "contacts": ["a@example.com", "b@example.com"]
        }))
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let contacts: Vec<String> = url::form_urlencoded::parse(&requests[0].body)
        .filter(|(k, _)| k == "contacts")
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(contacts, ["a@example.com", "b@example.com"]);
}

#[tokio::test]
async fn test_catalog_endpoints() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "GET", "plans").await;
    mount(&mock_server, "GET", "plans/CloudLevel%203").await;
    mount(&mock_server, "GET", "distributions").await;
    mount(&mock_server, "GET", "distributions/debian_12_64bit").await;
    mount(&mock_server, "GET", "doc").await;
    mount(&mock_server, "GET", "doc/jiffyBoxes").await;

    let client = client_for(&mock_server);
    client.list_plans().await.unwrap();
    client.plan_details("CloudLevel 3").await.unwrap();
    client.list_distributions().await.unwrap();
    client.distribution_details("debian_12_64bit").await.unwrap();
    client.list_doc_modules().await.unwrap();

    let doc = client.doc_module("jiffyBoxes").await.unwrap();
    assert_eq!(doc["result"], "GET doc/jiffyBoxes");
}
