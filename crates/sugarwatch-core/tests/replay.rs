use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use sugarwatch_core::{Message, ReplayReport, Revision, keys, replay_log_file, replay_messages};

fn extended_graph_payload(reference: u32, points: &[(u16, u8)]) -> Vec<u8> {
    let mut payload = Vec::new();
    payload.extend_from_slice(&reference.to_le_bytes());
    payload.extend_from_slice(&(points.len() as u16).to_le_bytes());
    for &(offset, _) in points {
        payload.extend_from_slice(&offset.to_le_bytes());
    }
    payload.extend(points.iter().map(|&(_, value)| value));
    payload
}

fn sample_log() -> Vec<Message> {
    vec![
        // Heartbeat before the phone has data.
        Message::new(),
        // First full data message.
        Message::new()
            .with_uint(keys::KEY_BG_TIMESTAMP, 1_700_000_000)
            .with_str(keys::KEY_BG_STRING, "7.5")
            .with_str(keys::KEY_DELTA_STRING, "+0.3")
            .with_uint(keys::KEY_ARROW_INDEX, 4)
            .with_bytes(
                keys::KEY_GRAPH_DATA,
                extended_graph_payload(1_700_000_000 - 600, &[(0, 50), (5, 55), (10, 60)]),
            )
            .with_uint(keys::KEY_GRAPH_HIGH_LINE, 100)
            .with_uint(keys::KEY_GRAPH_LOW_LINE, 40),
        // Later update with a truncated graph payload.
        Message::new()
            .with_uint(keys::KEY_BG_TIMESTAMP, 1_700_000_300)
            .with_str(keys::KEY_DELTA_STRING, "-0.1")
            .with_bytes(keys::KEY_GRAPH_DATA, vec![0xe8, 0x03, 0x00]),
    ]
}

fn assert_expected_report(report: &ReplayReport) {
    assert_eq!(report.report_version, sugarwatch_core::REPORT_VERSION);
    assert_eq!(report.tool.name, "sugarwatch");
    assert_eq!(report.revision, "extended");
    assert_eq!(report.messages_total, 3);
    assert_eq!(report.data_updates, 2);
    assert_eq!(report.graph_updates, 1);
    assert_eq!(report.graph_rejects, 1);

    let reading = &report.final_state.reading;
    assert_eq!(reading.timestamp, 1_700_000_300);
    assert_eq!(reading.bg, "7.5");
    assert_eq!(reading.delta, "-0.1");
    assert_eq!(reading.trend.as_deref(), Some("Flat"));

    // The rejected payload left the first decode on screen.
    let graph = &report.final_state.graph;
    assert_eq!(graph.reference_timestamp, 1_700_000_000 - 600);
    assert_eq!(graph.count, 3);
    assert_eq!(graph.points[1].offset_minutes, 5);
    assert_eq!(graph.points[1].mg_dl, 110);
    assert_eq!(graph.high_line, 200);
    assert_eq!(graph.low_line, 80);
}

#[test]
fn replay_in_memory_log() {
    let report = replay_messages(Revision::Extended, &sample_log());
    assert_expected_report(&report);
}

#[test]
fn replay_round_trips_through_json_file() {
    let mut path = std::env::temp_dir();
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("sugarwatch_replay_{unique}.json"));

    let json = serde_json::to_string_pretty(&sample_log()).unwrap();
    fs::write(&path, json).unwrap();

    let report = replay_log_file(Revision::Extended, &path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_expected_report(&report);

    // The report itself serializes deterministically.
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["final_state"]["graph"]["points"][0]["mg_dl"], 100);
}

#[test]
fn replay_rejects_malformed_log() {
    let mut path = std::env::temp_dir();
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("sugarwatch_malformed_{unique}.json"));

    fs::write(&path, "{not json").unwrap();
    let err = replay_log_file(Revision::Extended, &path).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(err.to_string().contains("malformed message log"));
}
