use egui::{Color32, Pos2, Vec2};
use graphic_objects::object::GraphicObject;
use graphic_objects::{CodecError, Command, Direction, ObjectKind, Scene, SceneConfig};

fn circle_position(scene: &Scene) -> Pos2 {
    scene.selected().and_then(|o| o.as_circle()).map(|c| c.position()).unwrap()
}

#[test]
fn test_commands_on_empty_scene_are_noops() {
    let mut scene = Scene::new();
    for command in [
        Command::SelectNext,
        Command::Nudge(Direction::Up),
        Command::Recolor(Color32::RED),
        Command::Grow,
        Command::Shrink,
        Command::ToggleVisibility,
        Command::Clear,
    ] {
        assert!(!command.execute(&mut scene), "{command:?}");
    }
    assert!(scene.is_empty());
    assert_eq!(scene.selected_index(), None);
    assert_eq!(scene.scale(), 1.0);
}

#[test]
fn test_create_selects_the_new_object() {
    let mut scene = Scene::new();
    for kind in ObjectKind::ALL {
        assert!(Command::Create(kind).execute(&mut scene));
        assert_eq!(scene.selected().map(|o| o.kind()), Some(kind));
    }
    assert_eq!(scene.len(), 4);
    assert_eq!(scene.selected_index(), Some(3));
}

#[test]
fn test_select_next_wraps_around() {
    let mut scene = Scene::new();
    scene.create(ObjectKind::Circle);
    scene.create(ObjectKind::Rectangle);
    assert_eq!(scene.selected_index(), Some(1));

    Command::SelectNext.execute(&mut scene);
    assert_eq!(scene.selected_index(), Some(0));
    Command::SelectNext.execute(&mut scene);
    assert_eq!(scene.selected_index(), Some(1));
}

#[test]
fn test_nudges_use_the_configured_step() {
    let mut scene = Scene::new();
    scene.create(ObjectKind::Circle);

    Command::Nudge(Direction::Right).execute(&mut scene);
    Command::Nudge(Direction::Down).execute(&mut scene);
    assert_eq!(circle_position(&scene), Pos2::new(110.0, 110.0));

    Command::Nudge(Direction::Left).execute(&mut scene);
    Command::Nudge(Direction::Up).execute(&mut scene);
    Command::Nudge(Direction::Up).execute(&mut scene);
    assert_eq!(circle_position(&scene), Pos2::new(100.0, 90.0));

    let config = SceneConfig {
        move_step: 2.5,
        ..SceneConfig::default()
    };
    let mut scene = Scene::with_config(config);
    scene.create(ObjectKind::Circle);
    Command::Nudge(Direction::Left).execute(&mut scene);
    Command::Move { delta: Vec2::new(0.0, 4.0) }.execute(&mut scene);
    assert_eq!(circle_position(&scene), Pos2::new(97.5, 104.0));
}

#[test]
fn test_grow_and_shrink_track_the_scale() {
    let mut scene = Scene::new();
    scene.create(ObjectKind::Circle);

    Command::Grow.execute(&mut scene);
    assert!((scene.scale() - 1.1).abs() < 1e-6);
    let radius = scene.selected().and_then(|o| o.as_circle()).unwrap().radius();
    assert!((radius - 1.1).abs() < 1e-6);

    for _ in 0..30 {
        Command::Shrink.execute(&mut scene);
    }
    assert_eq!(scene.scale(), scene.config().min_scale);
    let radius = scene.selected().and_then(|o| o.as_circle()).unwrap().radius();
    assert!(radius > 0.0);
}

#[test]
fn test_recolor_and_toggle_visibility() {
    let mut scene = Scene::new();
    scene.create(ObjectKind::Triangle);

    Command::ToggleVisibility.execute(&mut scene);
    assert!(!scene.selected().unwrap().is_visible());

    Command::Recolor(Command::PALETTE[1]).execute(&mut scene);
    Command::ToggleVisibility.execute(&mut scene);

    let triangle = scene.selected().and_then(|o| o.as_triangle()).unwrap();
    assert!(triangle.is_visible());
    assert_eq!(triangle.fill().displayed(), Color32::GREEN);
}

#[test]
fn test_commands_deserialize_from_json() {
    let script = r#"[
        { "Create": "Rectangle" },
        { "Nudge": "Right" },
        "ToggleVisibility"
    ]"#;
    let commands: Vec<Command> = serde_json::from_str(script).unwrap();
    assert_eq!(commands[1], Command::Nudge(Direction::Right));

    let mut scene = Scene::new();
    for command in &commands {
        command.execute(&mut scene);
    }
    let rectangle = scene.selected().and_then(|o| o.as_rectangle()).unwrap();
    assert_eq!(rectangle.position(), Pos2::new(210.0, 100.0));
    assert!(!rectangle.is_visible());
}

#[test]
fn test_save_and_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.txt");

    let mut scene = Scene::new();
    scene.create(ObjectKind::Circle);
    scene.create(ObjectKind::Aggregate);
    scene.create(ObjectKind::Triangle);
    Command::Recolor(Color32::BLUE).execute(&mut scene);
    scene.save(&path).unwrap();

    let mut restored = Scene::new();
    let count = restored.load(&path).unwrap();
    assert_eq!(count, 3);
    assert_eq!(restored.objects(), scene.objects());
    assert_eq!(restored.selected_index(), Some(0));
}

#[test]
fn test_load_appends_to_existing_objects() {
    let mut source = Scene::new();
    source.create(ObjectKind::Rectangle);
    let mut bytes = Vec::new();
    source.save_to(&mut bytes).unwrap();

    let mut scene = Scene::new();
    scene.create(ObjectKind::Circle);
    scene.load_from(bytes.as_slice()).unwrap();
    assert_eq!(scene.len(), 2);
    assert!(scene.objects()[1].as_rectangle().is_some());
}

#[test]
fn test_missing_file_leaves_scene_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut scene = Scene::new();
    scene.create(ObjectKind::Circle);

    let err = scene.load(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, CodecError::IoUnavailable { .. }));
    assert!(!err.is_malformed());
    assert_eq!(scene.len(), 1);
}

#[test]
fn test_malformed_file_keeps_decoded_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.txt");
    std::fs::write(&path, "2\nCircle\n5 5\n1\n255\nSquare\n").unwrap();

    let mut scene = Scene::new();
    let err = scene.load(&path).unwrap_err();
    assert!(err.is_malformed());
    assert_eq!(scene.len(), 1);
}

#[test]
fn test_outline_marks_selection_and_nesting() {
    let mut scene = Scene::new();
    scene.create(ObjectKind::Circle);
    let mut group = graphic_objects::Aggregate::new();
    group.add_child(graphic_objects::Rectangle::default());
    scene.push(group);

    let outline = scene.outline();
    let lines: Vec<_> = outline.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with(" Circle at (100, 100)"));
    assert!(lines[1].starts_with(">Aggregate of 1"));
    assert!(lines[2].starts_with("   Rectangle"));
}
