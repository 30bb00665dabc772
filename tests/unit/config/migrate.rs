use super::*;
use crate::scene::host::ObjectId;

fn legacy(renderer: Option<ObjectId>, migrated: bool) -> LegacyTargetFields {
    LegacyTargetFields {
        renderer,
        material_index: 1,
        property: "_MatCapColor".to_string(),
        migrated,
    }
}

#[test]
fn empty_list_gains_legacy_target() {
    let out = migrate(&legacy(Some(ObjectId(3)), false), &[]);
    assert_eq!(out, vec![ColorTarget::new(ObjectId(3), 1, "_MatCapColor")]);
}

#[test]
fn existing_list_is_preserved() {
    let existing = vec![ColorTarget::new(ObjectId(5), 0, "_Color")];
    let out = migrate(&legacy(Some(ObjectId(3)), false), &existing);
    assert_eq!(out, existing);
}

#[test]
fn already_migrated_or_empty_fields_are_ignored() {
    assert!(migrate(&legacy(Some(ObjectId(3)), true), &[]).is_empty());
    assert!(migrate(&legacy(None, false), &[]).is_empty());
}

#[test]
fn config_migration_runs_once() {
    let mut config = AnimatorConfig::new(ObjectId(0));
    config.legacy = Some(legacy(Some(ObjectId(2)), false));

    let once = config.migrated();
    assert_eq!(once.targets.len(), 1);
    assert!(once.legacy.as_ref().unwrap().migrated);

    let mut cleared = once.clone();
    cleared.targets.clear();
    assert!(cleared.migrated().targets.is_empty());
}
