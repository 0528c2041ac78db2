use horgg_core::errors::{ErrorInfo, HorggError};
use horgg_core::provenance::{SampleProvenance, SchemaVersion};
use horgg_core::{Edge, GroupId, NodeId};

#[test]
fn provenance_round_trip_json() {
    let provenance = SampleProvenance {
        master_seed: 99,
        call_index: 2,
        call_seed: 1234,
        graph_hash: "abc".into(),
        label: Some("roundtrip".into()),
        created_at: "2023-10-31T00:00:00Z".into(),
    };
    let json = serde_json::to_string_pretty(&provenance).expect("serialize");
    let decoded: SampleProvenance = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, provenance);
    assert_eq!(SchemaVersion::default(), SchemaVersion::new(1, 0, 0));
}

#[test]
fn edges_and_errors_round_trip_json() {
    let edge = Edge::new(3, 1);
    assert_eq!(edge.node, NodeId::from_raw(3));
    assert_eq!(edge.group, GroupId::from_raw(1));
    assert_eq!(edge.as_pair(), (3, 1));
    assert_eq!(edge.to_string(), "n3-g1");

    let json = serde_json::to_string(&edge).expect("serialize edge");
    let decoded: Edge = serde_json::from_str(&json).expect("deserialize edge");
    assert_eq!(decoded, edge);

    let err = HorggError::MaxAttemptsExceeded(
        ErrorInfo::new("swap-budget", "exhausted").with_context("attempts", "10"),
    );
    let json = serde_json::to_string(&err).expect("serialize error");
    assert!(json.contains("\"family\":\"MaxAttemptsExceeded\""));
    let decoded: HorggError = serde_json::from_str(&json).expect("deserialize error");
    assert_eq!(decoded, err);
}
