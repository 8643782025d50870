//! Unit tests for metric value objects and the snapshot schema

use chrono::{TimeZone, Utc};
use hostmon_domain::{
    CpuReading, Error, MemoryReading, MemoryUnit, MetricsSnapshot, RawSample,
};

fn sample_snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        timestamp: Utc.with_ymd_and_hms(2024, 3, 9, 8, 30, 15).unwrap(),
        cpu: CpuReading {
            usage_percent: 14.4,
        },
        memory: MemoryReading {
            total_mib: 7943.0,
            used_mib: 3200.0,
            free_mib: 2000.0,
            percent_used: 40.29,
            unit: MemoryUnit::MiB,
        },
    }
}

#[test]
fn test_snapshot_serializes_to_published_schema() {
    let json = serde_json::to_value(sample_snapshot()).unwrap();

    assert_eq!(json["timestamp"], "2024-03-09T08:30:15.000Z");
    assert_eq!(json["cpu"]["usage"], 14.4);
    assert_eq!(json["memory"]["total"], 7943.0);
    assert_eq!(json["memory"]["used"], 3200.0);
    assert_eq!(json["memory"]["free"], 2000.0);
    assert_eq!(json["memory"]["percentUsed"], 40.29);
    assert_eq!(json["memory"]["unit"], "MiB");
}

#[test]
fn test_snapshot_reads_back_from_json() {
    let snapshot = sample_snapshot();
    let text = serde_json::to_string_pretty(&snapshot).unwrap();
    let restored: MetricsSnapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, snapshot);
}

#[test]
fn test_timestamp_rejects_non_iso_strings() {
    let text = r#"{"timestamp":"yesterday","cpu":{"usage":1.0},
        "memory":{"total":1.0,"used":1.0,"free":0.0,"percentUsed":100.0,"unit":"MiB"}}"#;
    assert!(serde_json::from_str::<MetricsSnapshot>(text).is_err());
}

#[test]
fn test_cpu_reading_from_idle_bounds() {
    assert_eq!(CpuReading::from_idle(0.0).unwrap().usage_percent, 100.0);
    assert_eq!(CpuReading::from_idle(100.0).unwrap().usage_percent, 0.0);
    assert!(matches!(
        CpuReading::from_idle(100.01),
        Err(Error::InvalidReading { .. })
    ));
    assert!(matches!(
        CpuReading::from_idle(-1.0),
        Err(Error::InvalidReading { .. })
    ));
}

#[test]
fn test_memory_unit_tokens_round_trip_through_display() {
    for unit in MemoryUnit::ALL {
        assert_eq!(unit.to_string(), unit.token());
    }
}

#[test]
fn test_raw_sample_lines_keep_order() {
    let sample = RawSample::new("first\nsecond\r\nthird");
    assert_eq!(sample.lines(), vec!["first", "second", "third"]);
    assert!(!sample.is_blank());
    assert!(RawSample::new(" \n\t\n").is_blank());
}
