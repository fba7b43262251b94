use std::sync::{Arc, Mutex};

use feed_engine::{FetchError, UpdateChannel, UpdateLifecycle, UpdateSettings, UpdateSink};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct TestSink {
    events: Arc<Mutex<Vec<UpdateLifecycle>>>,
}

impl TestSink {
    fn new() -> Self {
        Self::default()
    }

    fn take(&self) -> Vec<UpdateLifecycle> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl UpdateSink for TestSink {
    fn emit(&self, event: UpdateLifecycle) {
        self.events.lock().unwrap().push(event);
    }
}

fn channel_for(server: &MockServer, installed_label: &str) -> UpdateChannel {
    UpdateChannel::new(UpdateSettings::new(
        format!("{}/manifest.json", server.uri()),
        installed_label,
    ))
}

#[tokio::test]
async fn check_reports_up_to_date_for_a_matching_label() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/manifest.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"label":"v1"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let channel = channel_for(&server, "v1");
    let sink = TestSink::new();
    channel.check(&sink).await.expect("check ok");

    assert_eq!(
        sink.take(),
        vec![
            UpdateLifecycle::CheckingForUpdate,
            UpdateLifecycle::UpToDate,
        ]
    );
}

#[tokio::test]
async fn check_walks_the_install_lifecycle_for_a_new_label() {
    let server = MockServer::start().await;
    let manifest = format!(
        r#"{{"label":"v3","package_url":"{}/pkg/v3.bundle"}}"#,
        server.uri()
    );
    Mock::given(method("GET"))
        .and(path("/manifest.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(manifest, "application/json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pkg/v3.bundle"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![0u8; 512], "application/octet-stream"))
        .expect(1)
        .mount(&server)
        .await;

    let channel = channel_for(&server, "v1");
    let sink = TestSink::new();
    channel.check(&sink).await.expect("check ok");

    assert_eq!(
        sink.take(),
        vec![
            UpdateLifecycle::CheckingForUpdate,
            UpdateLifecycle::DownloadingPackage,
            UpdateLifecycle::InstallingUpdate,
            UpdateLifecycle::UpdateInstalled,
        ]
    );
}

#[tokio::test]
async fn check_stops_where_a_malformed_manifest_fails_it() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/manifest.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not a manifest"))
        .mount(&server)
        .await;

    let channel = channel_for(&server, "v1");
    let sink = TestSink::new();
    let err = channel.check(&sink).await.unwrap_err();

    assert!(matches!(err, FetchError::UnexpectedResponse { .. }));
    assert_eq!(sink.take(), vec![UpdateLifecycle::CheckingForUpdate]);
}

#[tokio::test]
async fn lookup_metadata_resolves_the_manifest_label() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/manifest.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"label":"v3"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let channel = channel_for(&server, "v1");
    let metadata = channel.lookup_metadata().await.expect("lookup ok");

    assert_eq!(metadata.label, "v3");
}
