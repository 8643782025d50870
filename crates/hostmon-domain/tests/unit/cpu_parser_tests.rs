//! Unit tests for CPU summary line parsing

use hostmon_domain::Error;
use hostmon_domain::parsing::cpu::{extract_idle, find_cpu_line, parse_cpu};

#[test]
fn test_procps_ng_line() {
    let lines = ["%Cpu(s): 12.3 us, 2.1 sy, 0.0 ni, 85.6 id, 0.0 wa"];
    let reading = parse_cpu(&lines).expect("cpu reading");
    assert_eq!(reading.usage_percent, 14.4);
}

#[test]
fn test_legacy_percent_suffixed_fields() {
    let lines = ["Cpu(s):  1.2%us,  0.5%sy,  0.0%ni, 98.0%id,  0.3%wa,  0.0%hi"];
    let reading = parse_cpu(&lines).expect("cpu reading");
    assert_eq!(reading.usage_percent, 2.0);
}

#[test]
fn test_long_idle_label_and_integers() {
    let lines = ["%Cpu(s): 3 us, 1 sy, 96 idle"];
    assert_eq!(parse_cpu(&lines).unwrap().usage_percent, 4.0);
}

#[test]
fn test_idle_without_trailing_comma_at_end_of_line() {
    assert_eq!(extract_idle("%Cpu(s):  5.0 us,  1.0 sy, 94.0 id").unwrap(), 94.0);
}

#[test]
fn test_variable_whitespace() {
    assert_eq!(extract_idle("%Cpu(s):  0.0 us,  0.0 sy,  0.0 ni,100.0   id,").unwrap(), 100.0);
}

#[test]
fn test_fully_idle_and_fully_busy() {
    assert_eq!(parse_cpu(&["%Cpu(s): 100.0 id"]).unwrap().usage_percent, 0.0);
    assert_eq!(parse_cpu(&["%Cpu(s): 100.0 us, 0.0 id"]).unwrap().usage_percent, 100.0);
}

#[test]
fn test_usage_is_complement_of_idle() {
    for tenths in 0..=1000 {
        let idle = f64::from(tenths) / 10.0;
        let line = format!("%Cpu(s):  1.0 us,  0.0 sy, {idle:.1} id,  0.0 wa");
        let reading = parse_cpu(&[line.as_str()]).unwrap();
        let expected = ((100.0 - idle) * 100.0).round() / 100.0;
        assert!(
            (reading.usage_percent - expected).abs() < 1e-9,
            "idle {idle} gave {}",
            reading.usage_percent
        );
    }
}

#[test]
fn test_marker_found_regardless_of_position() {
    let lines = [
        "top - 10:00:00 up 1 day,  2:03,  1 user,  load average: 0.10, 0.20, 0.30",
        "Tasks: 200 total,   1 running, 199 sleeping,   0 stopped,   0 zombie",
        "MiB Mem :   7943.0 total,   2000.0 free,   3200.0 used,   2743.0 buff/cache",
        "%Cpu(s):  7.0 us,  3.0 sy,  0.0 ni, 90.0 id,  0.0 wa,  0.0 hi,  0.0 si,  0.0 st",
    ];
    assert_eq!(find_cpu_line(&lines).unwrap(), lines[3]);
    assert_eq!(parse_cpu(&lines).unwrap().usage_percent, 10.0);
}

#[test]
fn test_first_marker_line_wins() {
    let lines = ["%Cpu(s): 10.0 us, 90.0 id", "%Cpu(s): 50.0 us, 50.0 id"];
    assert_eq!(parse_cpu(&lines).unwrap().usage_percent, 10.0);
}

#[test]
fn test_per_cpu_lines_are_not_the_summary() {
    let lines = ["%Cpu0  :  1.0 us,  0.0 sy, 99.0 id"];
    assert!(matches!(parse_cpu(&lines), Err(Error::CpuLineNotFound)));
}

#[test]
fn test_missing_cpu_line() {
    let lines = ["Tasks: 1 total", "MiB Mem : 1.0 total, 1.0 used, 0.0 free"];
    assert!(matches!(parse_cpu(&lines), Err(Error::CpuLineNotFound)));
    assert!(matches!(parse_cpu(&[]), Err(Error::CpuLineNotFound)));
}

#[test]
fn test_missing_idle_field() {
    let lines = ["%Cpu(s): 12.3 us, 2.1 sy, 0.0 ni, 0.0 wa"];
    match parse_cpu(&lines) {
        Err(Error::IdleFieldNotFound { line }) => assert!(line.starts_with("%Cpu(s):")),
        other => panic!("Expected IdleFieldNotFound, got {other:?}"),
    }
}

#[test]
fn test_idle_above_hundred_is_invalid() {
    let lines = ["%Cpu(s): 0.0 us, 120.5 id"];
    assert!(matches!(
        parse_cpu(&lines),
        Err(Error::InvalidReading { .. })
    ));
}
