//! UploadSession end to end: submission, countdown timing and cancellation.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use axum::{extract::Multipart, routing::post, Json, Router};
use csv_uploader::{
    Countdown, HttpUploader, SelectedFile, UploadError, UploadOutcome, UploadReply, UploadResult,
    UploadSession, Uploader, UploaderConfig,
};
use serde_json::{json, Value};
use tokio::task::LocalSet;
use tokio::time::sleep;

const DASHBOARD: &str = "http://dashboard.test/";

// =============================================================================
// Test doubles
// =============================================================================

/// Replies from a queue, optionally after a delay.
struct ScriptedUploader {
    replies: RefCell<VecDeque<UploadResult<UploadReply>>>,
    calls: Rc<Cell<usize>>,
    delay: Duration,
}

impl ScriptedUploader {
    fn new(replies: Vec<UploadResult<UploadReply>>) -> (Self, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let uploader = Self {
            replies: RefCell::new(replies.into()),
            calls: Rc::clone(&calls),
            delay: Duration::ZERO,
        };
        (uploader, calls)
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Uploader for ScriptedUploader {
    type Blob = Vec<u8>;

    async fn upload(&self, _file: &SelectedFile<Vec<u8>>) -> UploadResult<UploadReply> {
        self.calls.set(self.calls.get() + 1);
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        let next = self.replies.borrow_mut().pop_front();
        next.unwrap_or_else(|| Err(UploadError::NetworkUnreachable("no scripted reply".into())))
    }
}

fn ok(message: &str) -> UploadResult<UploadReply> {
    Ok(UploadReply {
        message: message.to_string(),
    })
}

fn recorder() -> (impl Fn(&str), Rc<RefCell<Vec<String>>>) {
    let opened = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&opened);
    (move |url: &str| sink.borrow_mut().push(url.to_string()), opened)
}

fn config() -> UploaderConfig {
    UploaderConfig::default().with_dashboard_url(DASHBOARD)
}

fn data_csv() -> SelectedFile<Vec<u8>> {
    SelectedFile::from_bytes("data.csv", vec![b'x'; 2048])
}

// =============================================================================
// Submission
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_submit_without_file_makes_no_call() {
    let (uploader, calls) = ScriptedUploader::new(vec![ok("unused")]);
    let (navigator, opened) = recorder();
    let session = UploadSession::new(uploader, navigator, config());

    LocalSet::new()
        .run_until(async {
            let outcome = session.submit().await;
            assert_eq!(
                outcome,
                Some(UploadOutcome::Failure("Please select a file first".into()))
            );
            assert_eq!(calls.get(), 0);
            assert!(!session.snapshot().busy);
            assert!(opened.borrow().is_empty());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_server_failure_returns_to_idle() {
    let (uploader, _) = ScriptedUploader::new(vec![Err(UploadError::ServerRejected {
        status: 500,
        message: "invalid header row".into(),
    })]);
    let (navigator, opened) = recorder();
    let session = UploadSession::new(uploader, navigator, config());

    LocalSet::new()
        .run_until(async {
            session.select_file(data_csv());
            let outcome = session.submit().await;

            assert_eq!(outcome, Some(UploadOutcome::Failure("invalid header row".into())));
            let snapshot = session.snapshot();
            assert!(!snapshot.busy);
            assert_eq!(snapshot.file_name.as_deref(), Some("data.csv"));
            assert_eq!(snapshot.countdown, Countdown::Idle);

            sleep(Duration::from_secs(10)).await;
            assert!(opened.borrow().is_empty());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_busy_refuses_second_submit() {
    let (uploader, calls) = ScriptedUploader::new(vec![ok("first"), ok("second")]);
    let uploader = uploader.with_delay(Duration::from_secs(2));
    let (navigator, _) = recorder();
    let session = UploadSession::new(uploader, navigator, config());

    LocalSet::new()
        .run_until(async {
            session.select_file(data_csv());
            let (first, second) = tokio::join!(session.submit(), async {
                sleep(Duration::from_millis(100)).await;
                assert!(session.snapshot().busy);
                session.submit().await
            });

            assert_eq!(first, Some(UploadOutcome::Success("first".into())));
            assert_eq!(second, None);
            assert_eq!(calls.get(), 1);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_select_path_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.csv");
    std::fs::write(&path, "id,name\n1,a\n").unwrap();

    let (uploader, _) = ScriptedUploader::new(vec![]);
    let (navigator, _) = recorder();
    let session = UploadSession::new(uploader, navigator, config());

    LocalSet::new()
        .run_until(async {
            session.select_path(&path).await.unwrap();
            assert_eq!(session.snapshot().file_name.as_deref(), Some("export.csv"));

            let missing = session.select_path(dir.path().join("missing.csv")).await;
            assert!(matches!(missing, Err(UploadError::Io(_))));
            assert_eq!(session.snapshot().file_name.as_deref(), Some("export.csv"));
        })
        .await;
}

// =============================================================================
// Countdown
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_countdown_redirects_once_after_five_seconds() {
    let (uploader, _) = ScriptedUploader::new(vec![ok("Processed 10 rows")]);
    let (navigator, opened) = recorder();
    let session = UploadSession::new(uploader, navigator, config());

    LocalSet::new()
        .run_until(async {
            session.select_file(data_csv());
            let outcome = session.submit().await;
            assert_eq!(outcome, Some(UploadOutcome::Success("Processed 10 rows".into())));
            assert_eq!(session.snapshot().file_name, None);

            // Sample well below the tick period and keep each distinct value.
            let mut shown: Vec<u32> = Vec::new();
            let mut opened_at = None;
            for step in 0..700u64 {
                if let Some(n) = session.snapshot().countdown.remaining() {
                    if shown.last() != Some(&n) {
                        shown.push(n);
                    }
                }
                if opened_at.is_none() && !opened.borrow().is_empty() {
                    opened_at = Some(Duration::from_millis(step * 10));
                }
                sleep(Duration::from_millis(10)).await;
            }

            assert_eq!(shown, vec![5, 4, 3, 2, 1, 0]);
            assert_eq!(session.snapshot().countdown, Countdown::Fired);
            assert_eq!(*opened.borrow(), vec![DASHBOARD.to_string()]);
            let opened_at = opened_at.unwrap();
            assert!(opened_at >= Duration::from_secs(5), "opened at {:?}", opened_at);
            assert!(opened_at <= Duration::from_millis(5200), "opened at {:?}", opened_at);

            sleep(Duration::from_secs(30)).await;
            assert_eq!(opened.borrow().len(), 1);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_reselect_cancels_pending_redirect() {
    let (uploader, _) = ScriptedUploader::new(vec![ok("done")]);
    let (navigator, opened) = recorder();
    let session = UploadSession::new(uploader, navigator, config());

    LocalSet::new()
        .run_until(async {
            session.select_file(data_csv());
            session.submit().await;
            sleep(Duration::from_millis(2500)).await;
            assert_eq!(session.snapshot().countdown, Countdown::Counting(3));

            session.select_file(SelectedFile::from_bytes("other.csv", vec![1, 2, 3]));
            let snapshot = session.snapshot();
            assert_eq!(snapshot.countdown, Countdown::Idle);
            assert_eq!(snapshot.outcome, None);

            sleep(Duration::from_secs(10)).await;
            assert!(opened.borrow().is_empty());
            assert_eq!(session.snapshot().countdown, Countdown::Idle);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_new_upload_cancels_pending_redirect() {
    let (uploader, _) = ScriptedUploader::new(vec![
        ok("done"),
        Err(UploadError::NetworkUnreachable("connection refused".into())),
    ]);
    let (navigator, opened) = recorder();
    let session = UploadSession::new(uploader, navigator, config());

    LocalSet::new()
        .run_until(async {
            session.select_file(data_csv());
            session.submit().await;
            sleep(Duration::from_millis(1500)).await;

            session.select_file(data_csv());
            let outcome = session.submit().await;
            assert_eq!(outcome, Some(UploadOutcome::Failure("connection refused".into())));

            sleep(Duration::from_secs(10)).await;
            assert!(opened.borrow().is_empty());
            assert_eq!(session.snapshot().countdown, Countdown::Idle);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_manual_redirect_leaves_countdown_running() {
    let (uploader, _) = ScriptedUploader::new(vec![ok("done")]);
    let (navigator, opened) = recorder();
    let session = UploadSession::new(uploader, navigator, config());

    LocalSet::new()
        .run_until(async {
            session.manual_redirect();
            assert_eq!(opened.borrow().len(), 1);

            session.select_file(data_csv());
            session.submit().await;
            session.manual_redirect();
            assert_eq!(opened.borrow().len(), 2);
            assert_eq!(session.snapshot().countdown, Countdown::Counting(5));

            sleep(Duration::from_millis(5500)).await;
            assert_eq!(opened.borrow().len(), 3);
            assert_eq!(session.snapshot().countdown, Countdown::Fired);
        })
        .await;
}

// =============================================================================
// Against a stub endpoint
// =============================================================================

async fn processed_rows(mut multipart: Multipart) -> Json<Value> {
    let mut rows = 0;
    while let Some(field) = multipart.next_field().await.unwrap() {
        if field.name() == Some("file") {
            let text = field.text().await.unwrap();
            rows = text.lines().skip(1).count();
        }
    }
    Json(json!({"message": format!("Processed {} rows", rows)}))
}

#[tokio::test]
async fn test_http_upload_then_redirect() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route("/upload", post(processed_rows));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = config()
        .with_upload_url(format!("http://{}/upload", addr))
        .with_tick_period(Duration::from_millis(10))
        .with_redirect_grace(Duration::from_millis(5));
    let uploader = HttpUploader::from_config(&config);
    let (navigator, opened) = recorder();
    let session = UploadSession::new(uploader, navigator, config);

    let mut body = String::from("id,value\n");
    for i in 0..10 {
        body.push_str(&format!("{},{}\n", i, i * 2));
    }

    LocalSet::new()
        .run_until(async {
            session.select_file(SelectedFile::from_bytes("data.csv", body.into_bytes()));
            let outcome = session.submit().await;
            assert_eq!(outcome, Some(UploadOutcome::Success("Processed 10 rows".into())));
            assert_eq!(session.snapshot().countdown, Countdown::Counting(5));

            sleep(Duration::from_millis(500)).await;
            assert_eq!(*opened.borrow(), vec![DASHBOARD.to_string()]);
        })
        .await;
}
