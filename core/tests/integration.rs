use std::fs;

use boot_api::{Envelope, InitReport, Kind, NOT_IMPLEMENTED};
use bootcore::{channel, Dispatcher, ProcessEngine, RootResolver};
use serde_json::json;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use uuid::Uuid;

async fn send<W: AsyncWriteExt + Unpin>(w: &mut W, env: &Envelope) {
    let s = serde_json::to_string(env).unwrap();
    w.write_all(s.as_bytes()).await.unwrap();
    w.write_all(b"\n").await.unwrap();
    w.flush().await.unwrap();
}

async fn read<R: AsyncBufReadExt + Unpin>(r: &mut R) -> Envelope {
    let mut line = String::new();
    r.read_line(&mut line).await.unwrap();
    assert!(!line.is_empty(), "channel closed early");
    serde_json::from_str(line.trim()).unwrap()
}

#[tokio::test]
async fn initialize_session_over_the_channel() {
    let project = tempfile::tempdir().unwrap();
    fs::write(project.path().join("pubspec.yaml"), "name: demo\n").unwrap();
    let nested = project.path().join("lib/src/ui/widgets/deep");
    fs::create_dir_all(&nested).unwrap();
    let start = nested.join("button.dart");

    let resolver = RootResolver::default();
    let root = resolver.resolve(&start);
    assert_eq!(root, Some(project.path().join("test")));

    let engine = ProcessEngine::new("true".into(), Vec::new()).unwrap();
    let mut dispatcher = Dispatcher::new(engine, root.clone());

    let (host, shim) = tokio::io::duplex(4096);
    let (shim_read, shim_write) = tokio::io::split(shim);
    let server = tokio::spawn(async move {
        channel::serve(BufReader::new(shim_read), shim_write, &mut dispatcher).await
    });

    let (host_read, mut host_write) = tokio::io::split(host);
    let mut host_reader = BufReader::new(host_read);

    // ready event announces the resolved root
    let ready = read(&mut host_reader).await;
    assert_eq!(ready.kind, Kind::Event);
    assert_eq!(ready.topic.as_deref(), Some(channel::READY_TOPIC));
    let expected_root = root.unwrap().display().to_string();
    assert_eq!(
        ready.payload,
        Some(json!({ "root": expected_root.clone() }))
    );

    // initialize starts the engine and reports the root
    let id = Uuid::new_v4().to_string();
    send(&mut host_write, &Envelope::request(id.clone(), "initialize", None)).await;
    let resp = read(&mut host_reader).await;
    assert_eq!(resp.id, Some(id));
    assert_eq!(resp.kind, Kind::Response);
    let report: InitReport = serde_json::from_value(resp.result.unwrap()).unwrap();
    assert!(report.ok);
    assert_eq!(report.root, Some(expected_root));

    // anything else is answered with not-implemented, never a fault
    let id = Uuid::new_v4().to_string();
    send(&mut host_write, &Envelope::request(id.clone(), "teardown", None)).await;
    let resp = read(&mut host_reader).await;
    assert_eq!(resp.id, Some(id));
    assert!(resp.result.is_none());
    assert_eq!(resp.error.unwrap().code, NOT_IMPLEMENTED);

    // closing the host side ends the session cleanly
    drop(host_write);
    drop(host_reader);
    server.await.unwrap().unwrap();
}

#[tokio::test]
async fn initialize_without_root_or_engine() {
    // no marker anywhere under the temp tree and a command that cannot
    // start: ok is false and root is absent, but the shim still answers
    let scratch = tempfile::tempdir().unwrap();
    let resolver = RootResolver::new("bootcore-absent.marker", "test");
    let root = resolver.resolve(&scratch.path().join("file"));
    assert_eq!(root, None);

    let engine = ProcessEngine::new("bootcore-no-such-engine".into(), Vec::new()).unwrap();
    let mut dispatcher = Dispatcher::new(engine, root);

    let (host, shim) = tokio::io::duplex(4096);
    let (shim_read, shim_write) = tokio::io::split(shim);
    let server = tokio::spawn(async move {
        channel::serve(BufReader::new(shim_read), shim_write, &mut dispatcher).await
    });

    let (host_read, mut host_write) = tokio::io::split(host);
    let mut host_reader = BufReader::new(host_read);

    let ready = read(&mut host_reader).await;
    assert_eq!(ready.topic.as_deref(), Some(channel::READY_TOPIC));
    assert_eq!(ready.payload, None);

    let id = Uuid::new_v4().to_string();
    send(&mut host_write, &Envelope::request(id.clone(), "initialize", None)).await;
    let resp = read(&mut host_reader).await;
    assert_eq!(resp.id, Some(id));
    let report: InitReport = serde_json::from_value(resp.result.unwrap()).unwrap();
    assert!(!report.ok);
    assert!(report.root.is_none());

    drop(host_write);
    drop(host_reader);
    server.await.unwrap().unwrap();
}
