use chrono::FixedOffset;
use tokio::net::TcpListener;

use vcds_logview::app_state::build_app_state;
use vcds_logview::core::client::log_api_client::HttpLogApiClient;
use vcds_logview::core::client::log_api_client_trait::LogApiClient;
use vcds_logview::domain::log::model::LogUpload;
use vcds_logview::view::controller::{
    LogViewController, RefreshOutcome, UploadOutcome, UploadSubmission, MSG_NO_FILE,
    MSG_UPLOAD_FAILED, MSG_UPLOAD_OK,
};
use vcds_logview::view::notifier::RecordingNotifier;

const SAMPLE: &str = "\
Monday,20,January,2025,,WVWZZZ1KZAW000001-VCID-1234
VCDS Version: Release 24.7,Data version: 20240101,CAYC 1.6l TDI
,
,Group A:,'001,,,Group B:,'003,
Marker,TIME,Engine speed,Coolant temperature,,TIME,Mass air flow,
,,/min,°C,,,g/s,
,
,0.50,820,88.5,,0.52,3.10,
,1.50,840,,,1.52,3.30,
";

async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = vcds_logview::server::serve_on(listener, build_app_state()).await;
    });
    format!("http://{addr}")
}

fn view(base_url: &str) -> LogViewController<HttpLogApiClient, RecordingNotifier> {
    LogViewController::new(HttpLogApiClient::new(base_url), RecordingNotifier::new())
        .with_offset(FixedOffset::east_opt(0).unwrap())
}

#[tokio::test]
async fn upload_then_list_renders_card() {
    let base_url = spawn_server().await;
    let mut view = view(&base_url);

    assert_eq!(view.init().await, RefreshOutcome::Rendered(0));
    assert!(view.container().is_empty());

    let outcome = view
        .handle_submit(UploadSubmission::with_file(LogUpload::new("drive.csv", SAMPLE)))
        .await;
    assert_eq!(outcome, UploadOutcome::Uploaded);
    assert_eq!(view.notifier().messages(), vec![MSG_UPLOAD_OK.to_string()]);

    let cards = view.container().cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].title, "drive.csv");
    assert_eq!(
        cards[0].description_line(),
        "Description: Log for VIN WVWZZZ1KZAW000001 with motor type CAYC 1.6l TDI"
    );
    assert_eq!(cards[0].uploaded_at_line(), "Uploaded At: 1/20/2025, 12:00:00 AM");

    let log_id = cards[0].action.log_id;
    let groups = view.client().list_groups(log_id).await.unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].sensors["Engine speed"].len(), 2);

    let record = view.client().get_log(log_id).await.unwrap();
    assert_eq!(record.vin.as_deref(), Some("WVWZZZ1KZAW000001"));
}

#[tokio::test]
async fn rejected_upload_keeps_existing_cards() {
    let base_url = spawn_server().await;
    let mut view = view(&base_url);

    view.handle_submit(UploadSubmission::with_file(LogUpload::new("a.csv", SAMPLE)))
        .await;
    assert_eq!(view.container().len(), 1);

    let outcome = view
        .handle_submit(UploadSubmission::with_file(LogUpload::new("notes.txt", "hello")))
        .await;

    assert_eq!(outcome, UploadOutcome::Failed);
    assert_eq!(view.container().len(), 1);
    assert_eq!(
        view.notifier().messages().last().map(String::as_str),
        Some(MSG_UPLOAD_FAILED)
    );
}

#[tokio::test]
async fn empty_submission_sends_nothing() {
    let base_url = spawn_server().await;
    let mut view = view(&base_url);

    let outcome = view.handle_submit(UploadSubmission::empty()).await;

    assert_eq!(outcome, UploadOutcome::NoFileSelected);
    assert_eq!(view.notifier().messages(), vec![MSG_NO_FILE.to_string()]);
    assert!(view.client().list_logs(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn purge_then_refresh_clears_cards() {
    let base_url = spawn_server().await;
    let mut view = view(&base_url);

    view.handle_submit(UploadSubmission::with_file(LogUpload::new("a.csv", SAMPLE)))
        .await;
    assert_eq!(view.container().len(), 1);

    let res = view.client().delete_all_logs().await.unwrap();
    assert_eq!(res["message"], "All logs deleted successfully");

    assert_eq!(view.fetch_logs().await, RefreshOutcome::Rendered(0));
    assert!(view.container().is_empty());
}

#[tokio::test]
async fn unknown_log_is_not_found() {
    let base_url = spawn_server().await;
    let client = HttpLogApiClient::new(&base_url);

    let err = client.get_log(404).await.unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));

    let err = client.list_groups(404).await.unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn dashboard_renders_uploaded_logs() {
    let base_url = spawn_server().await;
    let mut view = view(&base_url);
    view.handle_submit(UploadSubmission::with_file(LogUpload::new("fuel&timing.csv", SAMPLE)))
        .await;

    let page = reqwest::get(format!("{base_url}/")).await.unwrap().text().await.unwrap();

    assert!(page.contains(r#"id="log-cards-container""#));
    assert!(page.contains("fuel&amp;timing.csv"));
    assert!(page.contains("Visualizing log with ID:"));
}
