//! Flow editing, publishing and persistence.
mod common;
use common::*;
use nutriflow::prelude::*;

#[test]
fn test_new_flow_is_empty_draft() {
    let flow = Flow::new("Intake", "nutritionist-9");
    assert!(flow.is_empty());
    assert_eq!(flow.status, FlowStatus::Draft);
    assert_eq!(flow.nutritionist_id, "nutritionist-9");
    assert_eq!(flow.created_at, flow.updated_at);
    assert!(!flow.id.is_empty());
}

#[test]
fn test_add_and_configure_steps() {
    let mut flow = Flow::new("Intake", "n");
    let first = flow.add_step(StepKind::SingleChoice, "Goal").unwrap();
    let second = flow.add_step(StepKind::Information, "Tip").unwrap();
    assert_ne!(first, second);

    flow.update_config(&first, |config| {
        config.options = vec![ChoiceOption::new("a", "A").leading_to(second.clone())];
        config.default_next_step_id = Some(second.clone());
    })
    .unwrap();
    flow.rename_step(&second, "A useful tip").unwrap();
    flow.move_step(&second, Position::new(120.0, 40.0)).unwrap();

    let tip = flow.step(&second).unwrap();
    assert_eq!(tip.title, "A useful tip");
    assert_eq!(tip.position, Position::new(120.0, 40.0));
    assert!(lint(&flow).is_valid());
}

#[test]
fn test_generated_ids_skip_taken_ones() {
    let mut flow = Flow::new("f", "n");
    flow.insert_step(Step::new("step-1", StepKind::Information, "taken"))
        .unwrap();
    let id = flow.add_step(StepKind::Information, "new").unwrap();
    assert_eq!(id, "step-2");
    let id = flow.add_step(StepKind::Information, "newer").unwrap();
    assert_eq!(id, "step-3");
}

#[test]
fn test_insert_rejects_duplicate_id() {
    let mut flow = create_abc_flow();
    let err = flow
        .insert_step(Step::new("A", StepKind::Information, "again"))
        .unwrap_err();
    assert_eq!(err, FlowError::DuplicateStepId("A".to_string()));
}

#[test]
fn test_remove_step_clears_pointers_to_it() {
    let mut flow = create_abc_flow();
    let removed = flow.remove_step("C").unwrap();
    assert_eq!(removed.id, "C");

    let a = flow.step("A").unwrap();
    assert_eq!(a.config.option("yes").unwrap().next_step_id, None);
    assert_eq!(flow.step("B").unwrap().config.default_next_step_id, None);
    assert!(lint(&flow).is_valid());

    assert_eq!(
        flow.remove_step("C").unwrap_err(),
        FlowError::StepNotFound("C".to_string())
    );
}

#[test]
fn test_publish_requires_clean_lint() {
    let mut broken = create_dangling_flow();
    match broken.publish() {
        Err(FlowError::PublishRejected { error_count, first, .. }) => {
            assert_eq!(error_count, 1);
            assert!(first.contains("E003"));
        }
        other => panic!("expected rejection, got {:?}", other),
    }
    assert_eq!(broken.status, FlowStatus::Draft);

    let mut flow = create_abc_flow();
    let report = flow.publish().unwrap();
    assert!(report.is_valid());
    assert_eq!(flow.status, FlowStatus::Active);
}

#[test]
fn test_archived_flows_are_read_only() {
    let mut flow = create_abc_flow();
    flow.archive();
    assert_eq!(flow.status, FlowStatus::Archived);

    let err = flow.add_step(StepKind::Information, "late").unwrap_err();
    assert_eq!(err, FlowError::NotEditable("flow-abc".to_string()));
    assert!(flow.remove_step("A").is_err());
    assert!(flow.publish().is_err());
}

#[test]
fn test_edits_bump_updated_at() {
    let mut flow = Flow::new("f", "n");
    let before = flow.updated_at;
    std::thread::sleep(std::time::Duration::from_millis(5));
    flow.add_step(StepKind::Information, "x").unwrap();
    assert!(flow.updated_at > before);
    assert_eq!(flow.created_at, before);
}

#[test]
fn test_in_memory_store_round_trip() {
    let mut store = InMemoryFlowStore::new();
    let mut flow = create_abc_flow();
    store.save_flow(&mut flow).unwrap();

    let loaded = store.get_flow("flow-abc").unwrap();
    assert_eq!(loaded, flow);

    let mut other = create_intake_flow();
    store.save_flow(&mut other).unwrap();
    assert_eq!(store.list_flows(None).unwrap().len(), 2);
    let owned = store.list_flows(Some("nutritionist-2")).unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, "flow-intake");

    store.delete_flow("flow-abc").unwrap();
    assert!(matches!(
        store.get_flow("flow-abc"),
        Err(StoreError::NotFound(id)) if id == "flow-abc"
    ));
}

#[test]
fn test_store_keeps_its_own_copy() {
    let mut store = InMemoryFlowStore::new();
    let mut flow = create_abc_flow();
    store.save_flow(&mut flow).unwrap();

    // Edits are not persisted until saved again.
    flow.rename_step("A", "Changed").unwrap();
    assert_eq!(
        store.get_flow("flow-abc").unwrap().step("A").unwrap().title,
        "Do you eat breakfast?"
    );
}

#[test]
fn test_json_dir_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonDirStore::open(dir.path().join("flows")).unwrap();

    let mut flow = create_intake_flow();
    store.save_flow(&mut flow).unwrap();
    assert!(store.root().join("flow-intake.json").exists());

    let loaded = store.get_flow("flow-intake").unwrap();
    assert_eq!(loaded, flow);

    let listed = store.list_flows(Some("nutritionist-2")).unwrap();
    assert_eq!(listed.len(), 1);

    let deleted = store.delete_flow("flow-intake").unwrap();
    assert_eq!(deleted.id, "flow-intake");
    assert!(matches!(
        store.get_flow("flow-intake"),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn test_json_dir_store_rejects_path_like_ids() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonDirStore::open(dir.path()).unwrap();
    assert!(matches!(
        store.get_flow("../etc/passwd"),
        Err(StoreError::InvalidId(_))
    ));
}

#[test]
fn test_snapshot_round_trip() {
    let flow = create_intake_flow();
    let bytes = FlowSnapshot::new(flow.clone()).to_bytes().unwrap();
    let restored = FlowSnapshot::from_bytes(&bytes).unwrap();
    assert_eq!(restored.flow, flow);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("intake.bin");
    let path = path.to_str().unwrap();
    FlowSnapshot::new(flow.clone()).save(path).unwrap();
    assert_eq!(FlowSnapshot::from_file(path).unwrap().flow, flow);
}

#[test]
fn test_snapshot_rejects_other_versions() {
    let mut snapshot = FlowSnapshot::new(create_abc_flow());
    snapshot.format_version = 99;
    let bytes = snapshot.to_bytes().unwrap();
    assert!(matches!(
        FlowSnapshot::from_bytes(&bytes),
        Err(SnapshotError::UnsupportedVersion {
            found: 99,
            expected: 1
        })
    ));
}
