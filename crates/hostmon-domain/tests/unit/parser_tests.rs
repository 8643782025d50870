//! Unit tests for whole-sample parsing

use chrono::{TimeZone, Utc};
use hostmon_domain::parsing::MonitorOutputParser;
use hostmon_domain::{Error, RawSample};

const PROCPS_NG_SAMPLE: &str = "\
top - 14:02:11 up 3 days,  4:10,  2 users,  load average: 0.52, 0.58, 0.59
Tasks: 312 total,   1 running, 311 sleeping,   0 stopped,   0 zombie
%Cpu(s): 12.3 us,  2.1 sy,  0.0 ni, 85.6 id,  0.0 wa,  0.0 hi,  0.0 si,  0.0 st
MiB Mem :   7943.0 total,   2000.0 free,   3200.0 used,   2743.0 buff/cache
MiB Swap:   2048.0 total,   2048.0 free,      0.0 used.   4400.0 avail Mem

    PID USER      PR  NI    VIRT    RES    SHR S  %CPU  %MEM     TIME+ COMMAND
      1 root      20   0  168084  13100   8420 S   0.0   0.2   0:04.12 systemd
";

const LEGACY_SAMPLE: &str = "\
top - 14:02:11 up 3 days,  4:10,  2 users,  load average: 0.52, 0.58, 0.59
Tasks: 112 total,   1 running, 111 sleeping,   0 stopped,   0 zombie
Cpu(s):  1.2%us,  0.5%sy,  0.0%ni, 98.0%id,  0.3%wa,  0.0%hi,  0.0%si,  0.0%st
Mem:  16384000k total,  8192000k used,  8192000k free,   123456k buffers
Swap:  2097148k total,        0k used,  2097148k free,  4000000k cached
";

#[test]
fn test_procps_ng_sample() {
    let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let sample = RawSample::captured_at(PROCPS_NG_SAMPLE, at);
    let snapshot = MonitorOutputParser::new().parse_snapshot(&sample).unwrap();

    assert_eq!(snapshot.timestamp, at);
    assert_eq!(snapshot.cpu.usage_percent, 14.4);
    assert_eq!(snapshot.memory.total_mib, 7943.0);
    assert_eq!(snapshot.memory.used_mib, 3200.0);
    assert_eq!(snapshot.memory.free_mib, 2000.0);
    assert_eq!(snapshot.memory.percent_used, 40.29);
}

#[test]
fn test_legacy_sample() {
    let snapshot = MonitorOutputParser::new()
        .parse_snapshot(&RawSample::new(LEGACY_SAMPLE))
        .unwrap();

    assert_eq!(snapshot.cpu.usage_percent, 2.0);
    assert_eq!(snapshot.memory.total_mib, 16000.0);
    assert_eq!(snapshot.memory.used_mib, 8000.0);
    assert_eq!(snapshot.memory.percent_used, 50.0);
}

#[test]
fn test_cpu_and_memory_are_parsed_independently_of_order() {
    let sample = RawSample::new(
        "KiB Mem : 16384000 total, 8192000 used, 4096000 free\n\
         %Cpu(s): 12.3 us, 2.1 sy, 0.0 ni, 85.6 id, 0.0 wa\n",
    );
    let parsed = MonitorOutputParser::new().parse(&sample).unwrap();
    assert_eq!(parsed.cpu.usage_percent, 14.4);
    assert_eq!(parsed.memory.total_mib, 16000.0);
}

#[test]
fn test_missing_sections_fail_the_sample() {
    let parser = MonitorOutputParser::new();

    let no_cpu = RawSample::new("MiB Mem : 1.0 total, 1.0 used, 0.0 free\n");
    assert!(matches!(parser.parse(&no_cpu), Err(Error::CpuLineNotFound)));

    let no_memory = RawSample::new("%Cpu(s): 1.0 us, 99.0 id\n");
    assert!(matches!(parser.parse(&no_memory), Err(Error::MemLineNotFound)));

    let nothing = RawSample::new("garbage\n");
    assert!(matches!(parser.parse(&nothing), Err(Error::CpuLineNotFound)));
}

#[test]
fn test_zero_total_fails_snapshot() {
    let sample = RawSample::new(
        "%Cpu(s): 1.0 us, 99.0 id\nMiB Mem : 0.0 total, 0.0 used, 0.0 free\n",
    );
    let parser = MonitorOutputParser::new();
    assert!(parser.parse(&sample).is_ok());
    assert!(matches!(
        parser.parse_snapshot(&sample),
        Err(Error::DivisionByZeroMemory)
    ));
}
