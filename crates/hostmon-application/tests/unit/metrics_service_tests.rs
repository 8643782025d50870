//! Tests for the metrics collection use case

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use hostmon_application::{MetricsServiceImpl, MetricsServiceInterface};
use hostmon_domain::ports::{SampleSource, SnapshotStore};
use hostmon_domain::{Error, MetricsSnapshot, RawSample, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

const TOP_OUTPUT: &str = "\
top - 14:02:11 up 3 days,  4:05,  2 users,  load average: 0.52, 0.58, 0.59
Tasks: 312 total,   1 running, 311 sleeping,   0 stopped,   0 zombie
%Cpu(s): 12.3 us,  2.1 sy,  0.0 ni, 85.6 id,  0.0 wa,  0.0 hi,  0.0 si,  0.0 st
MiB Mem :   7943.0 total,   2000.0 free,   3200.0 used,   2743.0 buff/cache
MiB Swap:   2048.0 total,   2048.0 free,      0.0 used.   4400.0 avail Mem
";

/// Source replaying fixed output, counting invocations
struct FixedSource {
    output: Option<&'static str>,
    calls: AtomicUsize,
}

impl FixedSource {
    fn new(output: &'static str) -> Self {
        Self {
            output: Some(output),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            output: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SampleSource for FixedSource {
    async fn acquire(&self) -> Result<RawSample> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.output {
            Some(text) => Ok(RawSample::captured_at(
                text,
                Utc.with_ymd_and_hms(2024, 3, 9, 8, 30, 15).unwrap(),
            )),
            None => Err(Error::acquisition("failed to launch top: not found")),
        }
    }

    fn describe(&self) -> String {
        "fixed".to_string()
    }
}

/// Store reporting every save on a channel
struct ChannelStore {
    saved: mpsc::UnboundedSender<MetricsSnapshot>,
    latest: Mutex<Option<MetricsSnapshot>>,
    fail: bool,
}

impl ChannelStore {
    fn new(fail: bool) -> (Self, mpsc::UnboundedReceiver<MetricsSnapshot>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let store = Self {
            saved: tx,
            latest: Mutex::new(None),
            fail,
        };
        (store, rx)
    }
}

#[async_trait]
impl SnapshotStore for ChannelStore {
    async fn save(&self, snapshot: &MetricsSnapshot) -> Result<()> {
        let _ = self.saved.send(snapshot.clone());
        if self.fail {
            return Err(Error::persistence("disk full"));
        }
        *self.latest.lock().unwrap() = Some(snapshot.clone());
        Ok(())
    }

    async fn load_latest(&self) -> Result<Option<MetricsSnapshot>> {
        Ok(self.latest.lock().unwrap().clone())
    }
}

fn service(
    source: FixedSource,
    fail_store: bool,
) -> (
    MetricsServiceImpl,
    Arc<FixedSource>,
    mpsc::UnboundedReceiver<MetricsSnapshot>,
) {
    let source = Arc::new(source);
    let (store, rx) = ChannelStore::new(fail_store);
    let service = MetricsServiceImpl::new(source.clone(), Arc::new(store));
    (service, source, rx)
}

#[tokio::test]
async fn test_collect_assembles_snapshot() {
    let (service, _, _) = service(FixedSource::new(TOP_OUTPUT), false);

    let snapshot = service.collect().await.unwrap();

    assert_eq!(snapshot.cpu.usage_percent, 14.4);
    assert_eq!(snapshot.memory.total_mib, 7943.0);
    assert_eq!(snapshot.memory.used_mib, 3200.0);
    assert_eq!(snapshot.memory.free_mib, 2000.0);
    assert_eq!(snapshot.memory.percent_used, 40.29);
    assert_eq!(
        snapshot.timestamp,
        Utc.with_ymd_and_hms(2024, 3, 9, 8, 30, 15).unwrap()
    );
}

#[tokio::test]
async fn test_collect_does_not_persist() {
    let (service, _, mut saved) = service(FixedSource::new(TOP_OUTPUT), false);

    service.collect().await.unwrap();

    assert!(saved.try_recv().is_err());
    assert!(service.latest_persisted().await.unwrap().is_none());
}

#[tokio::test]
async fn test_record_persists_in_background() {
    let (service, _, mut saved) = service(FixedSource::new(TOP_OUTPUT), false);

    let snapshot = service.record().await.unwrap();

    let persisted = tokio::time::timeout(Duration::from_secs(5), saved.recv())
        .await
        .expect("snapshot persisted in time")
        .expect("store alive");
    assert_eq!(persisted, snapshot);
}

#[tokio::test]
async fn test_persistence_failure_does_not_fail_record() {
    let (service, _, mut saved) = service(FixedSource::new(TOP_OUTPUT), true);

    let snapshot = service.record().await.unwrap();
    assert_eq!(snapshot.cpu.usage_percent, 14.4);

    // The write was attempted and its failure swallowed
    tokio::time::timeout(Duration::from_secs(5), saved.recv())
        .await
        .unwrap();
    assert!(service.latest_persisted().await.unwrap().is_none());
}

#[tokio::test]
async fn test_spawn_persist_handle_completes() {
    let (service, _, _) = service(FixedSource::new(TOP_OUTPUT), false);
    let snapshot = service.collect().await.unwrap();

    service.spawn_persist(snapshot.clone()).await.unwrap();

    assert_eq!(service.latest_persisted().await.unwrap(), Some(snapshot));
}

#[tokio::test]
async fn test_persist_surfaces_store_errors() {
    let (service, _, _) = service(FixedSource::new(TOP_OUTPUT), true);
    let snapshot = service.collect().await.unwrap();

    let err = service.persist(&snapshot).await.unwrap_err();
    assert!(matches!(err, Error::Persistence { .. }));
}

#[tokio::test]
async fn test_acquisition_failure_is_reported_and_not_persisted() {
    let (service, _, mut saved) = service(FixedSource::failing(), false);

    let err = service.record().await.unwrap_err();

    assert!(matches!(err, Error::Acquisition { .. }));
    tokio::task::yield_now().await;
    assert!(saved.try_recv().is_err());
}

#[tokio::test]
async fn test_parse_failure_is_reported() {
    let (service, _, _) = service(FixedSource::new("Tasks: 1 total\n"), false);

    let err = service.collect().await.unwrap_err();
    assert!(matches!(err, Error::CpuLineNotFound));
}

#[tokio::test]
async fn test_each_call_acquires_again() {
    let (service, source, _) = service(FixedSource::new(TOP_OUTPUT), false);

    service.collect().await.unwrap();
    service.collect().await.unwrap();
    let _ = service.record().await.unwrap();

    assert_eq!(source.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_failure_does_not_poison_later_calls() {
    struct FlakySource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SampleSource for FlakySource {
        async fn acquire(&self) -> Result<RawSample> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(Error::acquisition("top exited with status 1"))
            } else {
                Ok(RawSample::new(TOP_OUTPUT))
            }
        }

        fn describe(&self) -> String {
            "flaky".to_string()
        }
    }

    let (store, _rx) = ChannelStore::new(false);
    let service = MetricsServiceImpl::new(
        Arc::new(FlakySource {
            calls: AtomicUsize::new(0),
        }),
        Arc::new(store),
    );

    assert!(service.collect().await.is_err());
    assert!(service.collect().await.is_ok());
}

#[test]
fn test_service_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MetricsServiceImpl>();
}
