#![cfg(unix)]

use std::time::{Duration, Instant};

use jobtop::config::{CommandSpec, Config};
use jobtop::pipeline;
use jobtop::report::{Format, HEADER};
use jobtop::Error;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// extra arguments from the collector land in $1.. and are ignored
fn cat(name: &str) -> CommandSpec {
    CommandSpec {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), "cat \"$0\"".to_string(), fixture(name)],
    }
}

fn config() -> Config {
    Config {
        servers: vec!["oss1".to_string(), "oss2".to_string()],
        throughput: cat("lltop.txt"),
        nodes: cat("pbsnodes.xml"),
        jobs: cat("qstat.xml"),
        ..Default::default()
    }
}

const C5IB_3: &str = "    c5ib-3        900          0         80";
const C5IB_2: &str = "    c5ib-2        120         30        400   101(alice)   102(bob)";
const C6IB_1: &str = "    c6ib-1         15        700        900   103(carol)";

#[tokio::test]
async fn text_report_end_to_end() {
    let mut out = Vec::new();
    pipeline::run(&config(), Format::Text, &mut out).await.unwrap();
    let text = String::from_utf8(out).unwrap();

    let expected = [
        "top writers",
        HEADER,
        C5IB_3,
        C5IB_2,
        C6IB_1,
        "top readers",
        HEADER,
        C6IB_1,
        C5IB_2,
        C5IB_3,
        "top iops",
        HEADER,
        C6IB_1,
        C5IB_2,
        C5IB_3,
        "Total: writes 1035 MB, reads 730 MB, iops 1380",
    ];
    assert_eq!(text.lines().collect::<Vec<_>>(), expected);
}

#[tokio::test]
async fn top_lines_limits_each_table() {
    let config = Config {
        top_lines: 1,
        ..config()
    };
    let mut out = Vec::new();
    pipeline::run(&config, Format::Text, &mut out).await.unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.lines().count(), 3 * 3 + 1);
    assert!(text.ends_with("Total: writes 1035 MB, reads 730 MB, iops 1380\n"));
}

#[tokio::test]
async fn json_report_end_to_end() {
    let mut out = Vec::new();
    pipeline::run(&config(), Format::Json, &mut out).await.unwrap();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(v["rankings"]["writes"][0]["hostname"], "c5ib-3");
    assert_eq!(v["rankings"]["reads"][0]["hostname"], "c6ib-1");
    assert_eq!(v["rankings"]["iops"][1]["jobs"][1]["id"], "102.sched.cluster");
    assert_eq!(v["totals"]["write_mb"], 1035);
}

#[tokio::test]
async fn failing_source_aborts_the_run() {
    let config = Config {
        nodes: CommandSpec::new("sh", &["-c", "echo pbs_server down >&2; exit 2"]),
        ..config()
    };
    let mut out = Vec::new();
    let err = pipeline::run(&config, Format::Text, &mut out).await.unwrap_err();

    assert!(matches!(err, Error::Exit { ref stderr, .. } if stderr == "pbs_server down"));
    assert!(out.is_empty());
}

#[tokio::test]
async fn failing_source_cancels_slow_siblings() {
    let config = Config {
        throughput: CommandSpec::new("sh", &["-c", "exec sleep 30"]),
        jobs: CommandSpec::new("sh", &["-c", "exec sleep 30"]),
        nodes: CommandSpec::new("sh", &["-c", "echo pbs_server down >&2; exit 2"]),
        ..config()
    };
    let started = Instant::now();
    let mut out = Vec::new();
    let res = tokio::time::timeout(
        Duration::from_secs(5),
        pipeline::run(&config, Format::Text, &mut out),
    )
    .await
    .expect("slow sources were not cancelled");

    assert!(matches!(res, Err(Error::Exit { .. })));
    assert!(started.elapsed() < Duration::from_secs(5));
    assert!(out.is_empty());
}

#[tokio::test]
async fn unmapped_host_is_reported() {
    let config = Config {
        host_infix: "".to_string(),
        ..config()
    };
    let mut out = Vec::new();
    let err = pipeline::run(&config, Format::Text, &mut out).await.unwrap_err();

    match err {
        Error::UnknownHost { host, node } => {
            assert_eq!(host, "c5ib-3");
            assert_eq!(node, "c5ib-3");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
