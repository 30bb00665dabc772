use super::*;

fn avatar() -> (SceneGraph, ObjectId, ObjectId) {
    let mut scene = SceneGraph::default();
    let root = scene.add_object("Avatar", None, None);
    let armature = scene.add_object("Armature", Some(root), None);
    let hips = scene.add_object("Hips", Some(armature), None);
    let ribbon = scene.add_object("Ribbon", Some(hips), Some(vec![None]));
    (scene, root, ribbon)
}

#[test]
fn relative_path_joins_ancestors_below_root() {
    let (scene, root, ribbon) = avatar();
    assert_eq!(scene.relative_path(root, ribbon), "Armature/Hips/Ribbon");
    assert_eq!(scene.relative_path(root, root), "");
}

#[test]
fn relative_path_stops_at_intermediate_root() {
    let (scene, _, ribbon) = avatar();
    let armature = scene.find("Armature").unwrap();
    assert_eq!(scene.relative_path(armature, ribbon), "Hips/Ribbon");
}

#[test]
fn shared_materials_only_for_renderers() {
    let (scene, root, ribbon) = avatar();
    assert!(scene.shared_materials(root).is_none());
    assert_eq!(scene.shared_materials(ribbon).unwrap().len(), 1);
}

#[test]
fn validate_rejects_dangling_parent() {
    let mut scene = SceneGraph::default();
    scene.add_object("Orphan", Some(ObjectId(9)), None);
    assert!(scene.validate().is_err());
}

#[test]
fn validate_rejects_cycles() {
    let mut scene = SceneGraph::default();
    let a = scene.add_object("A", None, None);
    let b = scene.add_object("B", Some(a), None);
    scene.objects[a.index()].parent = Some(b);
    assert!(scene.validate().is_err());
}

#[test]
fn material_defaults_for_unset_values() {
    let material = Material::default();
    assert_eq!(material.color("_Color"), crate::foundation::core::Rgb::white());
    assert_eq!(material.vector("_MainTexHSVG").to_array(), [0.0, 1.0, 1.0, 1.0]);
    assert!(!material.has_property("_Color"));
}
