use quadchart::core::{ChartData, QuadrantColors};
use quadchart::error::ChartError;
use quadchart::store::{
    AxisKind, AxisPatch, BubblePatch, ChartStore, FileBackend, GroupPatch, MemoryBackend,
    NewBubble, NewGroup, QuadrantColorsPatch, QuadrantLabelsPatch, StorageBackend,
};

fn memory_store() -> ChartStore<MemoryBackend> {
    ChartStore::new(MemoryBackend::new())
}

fn seeded_store() -> ChartStore<MemoryBackend> {
    let mut store = memory_store();
    store.save(&ChartData::sample()).expect("seed save");
    store
}

#[test]
fn empty_backend_serves_sample_aggregate() {
    let mut store = memory_store();
    let data = store.load().expect("load");
    assert_eq!(data.title, "IT Responsibility Matrix");
    assert_eq!(data.bubbles.len(), 17);
    assert_eq!(data.groups.len(), 2);
}

#[test]
fn save_then_load_round_trips() {
    let mut store = memory_store();
    let mut data = ChartData::sample();
    data.title = "Edited".to_owned();
    store.save(&data).expect("save");

    let loaded = store.load().expect("load");
    assert_eq!(loaded, data);
}

#[test]
fn add_bubble_assigns_fresh_id_and_persists() {
    let mut store = seeded_store();
    let bubble = store
        .add_bubble(NewBubble {
            name: "New Task".to_owned(),
            x: 5.0,
            y: 5.0,
            size: 10.0,
            group: "helpdesk".to_owned(),
        })
        .expect("add bubble");

    // Sample ids run 1..=17, so the generated id continues the sequence.
    assert_eq!(bubble.id, "18");
    let data = store.load().expect("load");
    assert_eq!(data.bubbles.len(), 18);
    assert_eq!(data.bubble("18").expect("new bubble").name, "New Task");
}

#[test]
fn patch_bubble_updates_only_given_fields() {
    let mut store = seeded_store();
    store
        .patch_bubble(
            "1",
            BubblePatch {
                x: Some(7.0),
                ..BubblePatch::default()
            },
        )
        .expect("patch");

    let data = store.load().expect("load");
    let bubble = data.bubble("1").expect("bubble 1");
    assert_eq!(bubble.x, 7.0);
    assert_eq!(bubble.name, "Grant App Access");
    assert_eq!(bubble.y, 5.0);
}

#[test]
fn patch_unknown_bubble_is_a_no_op() {
    let mut store = seeded_store();
    let before = store.load().expect("load");
    store
        .patch_bubble("no-such-id", BubblePatch::position(1.0, 1.0))
        .expect("patch");
    assert_eq!(store.load().expect("reload"), before);
}

#[test]
fn delete_group_cascades_to_its_bubbles() {
    let mut store = memory_store();
    let mut data = ChartData::empty();
    data.groups.push(quadchart::core::Group {
        id: "a".to_owned(),
        name: "A".to_owned(),
        color: "#111111".to_owned(),
    });
    data.groups.push(quadchart::core::Group {
        id: "b".to_owned(),
        name: "B".to_owned(),
        color: "#222222".to_owned(),
    });
    for (id, group) in [("1", "a"), ("2", "b"), ("3", "a")] {
        data.bubbles.push(quadchart::core::Bubble {
            id: id.to_owned(),
            name: id.to_owned(),
            x: 1.0,
            y: 1.0,
            size: 1.0,
            group: group.to_owned(),
        });
    }
    store.save(&data).expect("seed");

    store.delete_group("a").expect("delete group");

    let data = store.load().expect("load");
    assert_eq!(data.groups.len(), 1);
    assert_eq!(data.groups[0].id, "b");
    assert_eq!(data.bubbles.len(), 1);
    assert_eq!(data.bubbles[0].group, "b");
}

#[test]
fn group_patch_and_axis_patch_apply() {
    let mut store = seeded_store();
    store
        .patch_group(
            "helpdesk",
            GroupPatch {
                color: Some("#ff0000".to_owned()),
                ..GroupPatch::default()
            },
        )
        .expect("patch group");
    store
        .patch_axis(
            AxisKind::X,
            AxisPatch {
                max: Some(50.0),
                ..AxisPatch::default()
            },
        )
        .expect("patch axis");

    let data = store.load().expect("load");
    assert_eq!(data.group("helpdesk").expect("group").color, "#ff0000");
    assert_eq!(data.x_axis.max, 50.0);
    assert_eq!(data.x_axis.label, "Complexity");
}

#[test]
fn quadrant_patches_apply_partially() {
    let mut store = seeded_store();
    store
        .patch_quadrant_labels(QuadrantLabelsPatch {
            top_left: Some("Focus".to_owned()),
            ..QuadrantLabelsPatch::default()
        })
        .expect("patch labels");
    store
        .patch_quadrant_colors(QuadrantColorsPatch {
            bottom_right: Some("rgba(1, 2, 3, 0.5)".to_owned()),
            ..QuadrantColorsPatch::default()
        })
        .expect("patch colors");

    let data = store.load().expect("load");
    assert_eq!(data.quadrants.top_left, "Focus");
    assert_eq!(data.quadrants.top_right, "Strategic Projects");
    assert_eq!(data.quadrants.colors.bottom_right, "rgba(1, 2, 3, 0.5)");
}

#[test]
fn export_import_round_trip_is_lossless() {
    let mut store = seeded_store();
    store
        .patch_quadrant_colors(QuadrantColorsPatch {
            top_left: Some("rgba(9, 9, 9, 0.5)".to_owned()),
            ..QuadrantColorsPatch::default()
        })
        .expect("non-default colors");
    let original = store.load().expect("load");

    let exported = store.export_as_text().expect("export");
    let imported = store.import_from_text(&exported).expect("import");

    assert_eq!(imported, original);
    assert_eq!(store.load().expect("reload"), original);
}

#[test]
fn malformed_import_fails_and_leaves_state_unchanged() {
    let mut store = seeded_store();
    let before = store.load().expect("load");

    let result = store.import_from_text("{ not json at all");
    assert!(matches!(result, Err(ChartError::Format(_))));

    assert_eq!(store.load().expect("reload"), before);
}

#[test]
fn import_missing_quadrants_migrates_defaults() {
    let mut store = memory_store();
    let payload = r#"{
        "title": "Legacy",
        "bubbles": [],
        "groups": [],
        "xAxis": { "label": "X", "min": 0.0, "max": 10.0 },
        "yAxis": { "label": "Y", "min": 0.0, "max": 10.0 }
    }"#;

    let data = store.import_from_text(payload).expect("import legacy");
    assert_eq!(data.quadrants.top_left, "Top Left");
    assert_eq!(data.quadrants.colors, QuadrantColors::default());
}

#[test]
fn load_migrates_and_repersists_legacy_payload() {
    let mut backend = MemoryBackend::new();
    backend
        .save_raw(
            r#"{
                "title": "Legacy",
                "bubbles": [],
                "groups": [],
                "xAxis": { "label": "X", "min": 0.0, "max": 10.0 },
                "yAxis": { "label": "Y", "min": 0.0, "max": 10.0 },
                "quadrants": {
                    "topLeft": "TL", "topRight": "TR",
                    "bottomLeft": "BL", "bottomRight": "BR"
                }
            }"#,
        )
        .expect("seed raw");

    let mut store = ChartStore::new(backend);
    let data = store.load().expect("load");
    assert_eq!(data.quadrants.top_left, "TL");
    assert_eq!(data.quadrants.colors, QuadrantColors::default());

    // The migrated payload was persisted back with the colors filled in.
    let exported = store.export_as_text().expect("export");
    assert!(exported.contains("colors"));
}

#[test]
fn clear_resets_to_empty_scaffold() {
    let mut store = seeded_store();
    let data = store.clear().expect("clear");

    assert_eq!(data.title, "Bubble Chart");
    assert!(data.bubbles.is_empty());
    assert!(data.groups.is_empty());
    assert_eq!(data.x_axis.max, 100.0);
    assert_eq!(store.load().expect("reload"), data);
}

#[test]
fn add_group_assigns_fresh_id() {
    let mut store = memory_store();
    store.clear().expect("start empty");

    let first = store
        .add_group(NewGroup {
            name: "One".to_owned(),
            color: "#111111".to_owned(),
        })
        .expect("add group");
    let second = store
        .add_group(NewGroup {
            name: "Two".to_owned(),
            color: "#222222".to_owned(),
        })
        .expect("add group");

    assert_eq!(first.id, "1");
    assert_eq!(second.id, "2");
}

#[test]
fn file_backend_round_trips_via_disk() {
    let path = std::env::temp_dir().join(format!(
        "quadchart-store-test-{}.json",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let mut store = ChartStore::new(FileBackend::new(&path));
        let mut data = ChartData::sample();
        data.title = "On Disk".to_owned();
        store.save(&data).expect("save to disk");
    }

    let mut reopened = ChartStore::new(FileBackend::new(&path));
    let loaded = reopened.load().expect("load from disk");
    assert_eq!(loaded.title, "On Disk");
    assert_eq!(loaded.bubbles.len(), 17);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_file_serves_sample() {
    let path = std::env::temp_dir().join(format!(
        "quadchart-store-missing-{}.json",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let mut store = ChartStore::new(FileBackend::new(&path));
    let data = store.load().expect("load");
    assert_eq!(data.title, "IT Responsibility Matrix");

    let _ = std::fs::remove_file(&path);
}
