//! Integration tests for the full add-on lifecycle: register, drive the
//! operator through shortcuts, menus, and dialogs, unregister.

use sel2coll::addon;
use sel2coll::core::ObjectId;
use sel2coll::ops::selection_to_collection::{DESCRIPTOR, IDNAME, NAME_FIELD};
use sel2coll::prelude::*;

/// Scene with Cube, Sphere, and Suzanne, all selected.
fn selected_scene() -> (Scene, Vec<ObjectId>) {
    let mut scene = Scene::new("Scene");
    let ids = vec![
        scene.add_object("Cube"),
        scene.add_object("Sphere"),
        scene.add_object("Suzanne"),
    ];
    scene.select(ids.iter().copied());
    (scene, ids)
}

#[test]
fn test_ctrl_g_moves_selection_into_new_collection() {
    let (mut scene, ids) = selected_scene();
    let mut wm = WindowManager::new();
    let handle = addon::register(&mut wm).expect("register failed");

    let outcome = wm
        .press_key(&mut scene, SpaceType::View3d, KeyChord::ctrl(Key::G))
        .expect("press failed");
    assert_eq!(outcome, Some(Status::Finished));

    let new_coll = scene
        .find_collection("New Collection")
        .expect("collection was not created");
    for id in &ids {
        assert_eq!(
            scene.object_collections(*id),
            vec![new_coll],
            "selected objects belong to the new collection only"
        );
    }

    let root = scene.root_collection();
    assert!(scene.collection(root).unwrap().has_child(new_coll));

    let report = wm.reports().last().expect("no report emitted");
    assert_eq!(report.level, ReportLevel::Info);
    assert_eq!(report.message, "Created collection 'New Collection' with 3 objects.");

    handle.unregister(&mut wm).expect("unregister failed");
}

#[test]
fn test_empty_selection_warns_and_cancels() {
    let mut scene = Scene::new("Scene");
    scene.add_object("Cube");
    let collections_before = scene.num_collections();

    let mut wm = WindowManager::new();
    let handle = addon::register(&mut wm).expect("register failed");

    let outcome = wm
        .press_key(&mut scene, SpaceType::View3d, KeyChord::ctrl(Key::G))
        .expect("press failed");
    assert_eq!(outcome, Some(Status::Cancelled));

    let report = wm.reports().last().expect("no report emitted");
    assert_eq!(report.level, ReportLevel::Warning);
    assert_eq!(report.message, "No objects selected!");

    assert_eq!(scene.num_collections(), collections_before, "scene is untouched");

    handle.unregister(&mut wm).expect("unregister failed");
}

#[test]
fn test_shortcut_works_in_outliner_too() {
    let (mut scene, _) = selected_scene();
    let mut wm = WindowManager::new();
    let handle = addon::register(&mut wm).expect("register failed");

    let outcome = wm
        .press_key(&mut scene, SpaceType::Outliner, KeyChord::ctrl(Key::G))
        .expect("press failed");
    assert_eq!(outcome, Some(Status::Finished));
    assert!(scene.find_collection("New Collection").is_some());

    handle.unregister(&mut wm).expect("unregister failed");
}

#[test]
fn test_menu_entries_run_the_operator() {
    let mut wm = WindowManager::new();
    let handle = addon::register(&mut wm).expect("register failed");

    for menu in [MenuId::View3dObject, MenuId::OutlinerCollection] {
        assert_eq!(wm.menus().find(menu, DESCRIPTOR.label), Some(IDNAME));

        let (mut scene, _) = selected_scene();
        let outcome = wm
            .click_menu(&mut scene, menu, DESCRIPTOR.label)
            .expect("click failed");
        assert_eq!(outcome, Some(Status::Finished));
        assert!(scene.find_collection("New Collection").is_some());
    }

    handle.unregister(&mut wm).expect("unregister failed");
}

#[test]
fn test_unbound_chord_does_nothing() {
    let (mut scene, _) = selected_scene();
    let mut wm = WindowManager::new();
    let handle = addon::register(&mut wm).expect("register failed");

    let outcome = wm
        .press_key(&mut scene, SpaceType::View3d, KeyChord::new(Key::G))
        .expect("press failed");
    assert_eq!(outcome, None);
    assert!(wm.reports().is_empty());
    assert!(scene.find_collection("New Collection").is_none());

    handle.unregister(&mut wm).expect("unregister failed");
}

#[test]
fn test_objects_leave_every_previous_collection() {
    let mut scene = Scene::new("Scene");
    let cube = scene.add_object("Cube");
    let props = scene.create_collection("Props");
    let root = scene.root_collection();
    scene.link_collection(root, props).unwrap();
    scene.link_object(props, cube).unwrap();
    assert_eq!(scene.object_collections(cube).len(), 2);
    scene.select([cube]);

    let mut wm = WindowManager::new();
    let handle = addon::register(&mut wm).expect("register failed");
    wm.press_key(&mut scene, SpaceType::View3d, KeyChord::ctrl(Key::G))
        .expect("press failed");

    let new_coll = scene.find_collection("New Collection").unwrap();
    assert_eq!(scene.object_collections(cube), vec![new_coll]);
    assert!(scene.collection(props).unwrap().is_empty());

    handle.unregister(&mut wm).expect("unregister failed");
}

#[test]
fn test_name_collision_gets_numeric_suffix() {
    let (mut scene, ids) = selected_scene();
    scene.create_collection("New Collection");

    let mut wm = WindowManager::new();
    let handle = addon::register(&mut wm).expect("register failed");
    wm.press_key(&mut scene, SpaceType::View3d, KeyChord::ctrl(Key::G))
        .expect("press failed");

    let uniqued = scene
        .find_collection("New Collection.001")
        .expect("suffixed collection missing");
    assert_eq!(scene.object_collections(ids[0]), vec![uniqued]);
    // The report quotes the name as requested.
    assert_eq!(
        wm.reports().last().unwrap().message,
        "Created collection 'New Collection' with 3 objects."
    );

    handle.unregister(&mut wm).expect("unregister failed");
}

#[test]
fn test_dialog_rename_flows_into_collection() {
    let (mut scene, ids) = selected_scene();
    let mut wm = WindowManager::new();
    wm.set_dialog_driver(|form: &mut DialogForm| {
        form.set_value(NAME_FIELD, "Set Dressing");
        DialogChoice::Confirm
    });
    let handle = addon::register(&mut wm).expect("register failed");

    let outcome = wm
        .press_key(&mut scene, SpaceType::View3d, KeyChord::ctrl(Key::G))
        .expect("press failed");
    assert_eq!(outcome, Some(Status::Finished));

    let coll = scene.find_collection("Set Dressing").expect("renamed collection missing");
    assert_eq!(scene.object_collections(ids[1]), vec![coll]);
    assert_eq!(
        wm.reports().last().unwrap().message,
        "Created collection 'Set Dressing' with 3 objects."
    );

    handle.unregister(&mut wm).expect("unregister failed");
}

#[test]
fn test_dismissed_dialog_leaves_scene_untouched() {
    let (mut scene, ids) = selected_scene();
    let collections_before = scene.num_collections();

    let mut wm = WindowManager::new();
    wm.set_dialog_driver(|_form: &mut DialogForm| DialogChoice::Cancel);
    let handle = addon::register(&mut wm).expect("register failed");

    let outcome = wm
        .press_key(&mut scene, SpaceType::View3d, KeyChord::ctrl(Key::G))
        .expect("press failed");
    assert_eq!(outcome, Some(Status::Cancelled));
    assert!(wm.reports().is_empty());
    assert_eq!(scene.num_collections(), collections_before);
    assert_eq!(scene.selection(), &ids[..]);

    handle.unregister(&mut wm).expect("unregister failed");
}

#[test]
fn test_execute_skips_the_dialog() {
    let (mut scene, _) = selected_scene();
    let mut wm = WindowManager::new();
    // A driver that would cancel; Execute must never consult it.
    wm.set_dialog_driver(|_form: &mut DialogForm| DialogChoice::Cancel);
    let handle = addon::register(&mut wm).expect("register failed");

    let status = wm
        .run_operator(IDNAME, &mut scene, CallMode::Execute)
        .expect("run failed");
    assert_eq!(status, Status::Finished);
    assert!(scene.find_collection("New Collection").is_some());

    handle.unregister(&mut wm).expect("unregister failed");
}

#[test]
fn test_unregister_restores_the_window_manager() {
    let mut scene = Scene::new("Scene");
    let cube = scene.add_object("Cube");
    scene.select([cube]);

    let mut wm = WindowManager::new();
    let handle = addon::register(&mut wm).expect("register failed");
    handle.unregister(&mut wm).expect("unregister failed");

    assert!(wm.operators().is_empty());
    assert_eq!(wm.menus().num_entries(), 0);
    assert_eq!(wm.keyconfig().num_items(), 0);

    // The shortcut is dead after teardown.
    let outcome = wm
        .press_key(&mut scene, SpaceType::View3d, KeyChord::ctrl(Key::G))
        .expect("press failed");
    assert_eq!(outcome, None);
}

#[test]
fn test_register_cycles_are_stable() {
    let mut wm = WindowManager::new();
    for _ in 0..5 {
        let handle = addon::register(&mut wm).expect("register failed");
        handle.unregister(&mut wm).expect("unregister failed");
    }

    let (mut scene, _) = selected_scene();
    let handle = addon::register(&mut wm).expect("register failed");
    let outcome = wm
        .press_key(&mut scene, SpaceType::View3d, KeyChord::ctrl(Key::G))
        .expect("press failed");
    assert_eq!(outcome, Some(Status::Finished));
    handle.unregister(&mut wm).expect("unregister failed");
}

#[test]
fn test_two_runs_with_same_name_make_distinct_collections() {
    let mut scene = Scene::new("Scene");
    let a = scene.add_object("A");
    let b = scene.add_object("B");
    let c = scene.add_object("C");

    let mut wm = WindowManager::new();
    let handle = addon::register(&mut wm).expect("register failed");

    scene.select([a, b]);
    wm.press_key(&mut scene, SpaceType::View3d, KeyChord::ctrl(Key::G))
        .expect("first press failed");

    scene.select([b, c]);
    wm.press_key(&mut scene, SpaceType::View3d, KeyChord::ctrl(Key::G))
        .expect("second press failed");

    let first = scene.find_collection("New Collection").unwrap();
    let second = scene.find_collection("New Collection.001").unwrap();
    assert_ne!(first, second);

    // B moved on with the second run; A stayed behind.
    assert_eq!(scene.object_collections(a), vec![first]);
    assert_eq!(scene.object_collections(b), vec![second]);
    assert_eq!(scene.object_collections(c), vec![second]);

    handle.unregister(&mut wm).expect("unregister failed");
}

#[test]
fn test_selection_order_is_preserved_in_new_collection() {
    let mut scene = Scene::new("Scene");
    let a = scene.add_object("A");
    let b = scene.add_object("B");
    let c = scene.add_object("C");
    scene.select([c, a, b]);

    let mut wm = WindowManager::new();
    let handle = addon::register(&mut wm).expect("register failed");
    wm.press_key(&mut scene, SpaceType::View3d, KeyChord::ctrl(Key::G))
        .expect("press failed");

    let coll = scene.find_collection("New Collection").unwrap();
    let members: Vec<ObjectId> = scene.collection(coll).unwrap().iter().collect();
    assert_eq!(members, vec![c, a, b]);

    handle.unregister(&mut wm).expect("unregister failed");
}
