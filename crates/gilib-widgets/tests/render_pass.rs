use gilib_core::{Event, GuiSettings};
use gilib_render::{DrawCommand, RecordingSurface};
use gilib_widgets::{Gui, RectWidget};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn full_render_pass_in_world_space() {
    init_logging();

    let mut gui = Gui::new(800.0, 600.0, GuiSettings::default()).unwrap();
    let mut grid = gui.new_grid();
    grid.set_size(10.0, 10.0, 110.0, 60.0);
    grid.set_back_clr(0.0, 0.5, 1.0, 1.0);
    let root = gui.add_widget(Box::new(grid));
    gui.set_root(root).unwrap();
    gui.set_view(0.0, 0.0, 800.0, 600.0, 2.0).unwrap();

    let mut surface = RecordingSurface::new(800.0, 600.0);
    gui.render(&mut surface).unwrap();

    let expected = vec![
        DrawCommand::Transform {
            matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        },
        DrawCommand::ClearRect {
            x1: 0.0,
            y1: 0.0,
            x2: 800.0,
            y2: 600.0,
        },
        DrawCommand::Transform {
            matrix: [2.0, 0.0, 0.0, 2.0, -400.0, -300.0],
        },
        DrawCommand::FillStyle {
            style: "rgba(0,127,255,1)".to_string(),
        },
        DrawCommand::FillRect {
            x1: 10.0,
            y1: 10.0,
            x2: 110.0,
            y2: 60.0,
        },
        DrawCommand::LineWidth { width: 1.0 },
        DrawCommand::StrokeStyle {
            style: "rgba(50,50,50,1)".to_string(),
        },
        DrawCommand::StrokeRect {
            x1: 10.0,
            y1: 10.0,
            x2: 110.0,
            y2: 60.0,
        },
    ];
    assert_eq!(surface.commands(), expected.as_slice());
}

#[test]
fn recorded_commands_serialize_for_host() {
    init_logging();

    let mut gui = Gui::new(400.0, 300.0, GuiSettings::default()).unwrap();
    let root = gui.add_widget(Box::new(gui.new_grid()));
    gui.set_root(root).unwrap();

    let mut surface = RecordingSurface::new(400.0, 300.0);
    gui.render(&mut surface).unwrap();

    let json: serde_json::Value = serde_json::from_str(&surface.to_json().unwrap()).unwrap();
    let ops: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["op"].as_str().unwrap())
        .collect();
    assert_eq!(
        ops,
        vec![
            "transform",
            "clear_rect",
            "transform",
            "fill_style",
            "fill_rect",
            "line_width",
            "stroke_style",
            "stroke_rect",
        ]
    );
    assert_eq!(json[4]["x2"], 400.0);
    assert_eq!(json[3]["style"], "rgba(200,200,200,1)");
}

#[test]
fn scroll_then_rerender_keeps_drawing_stable() {
    init_logging();

    let mut gui = Gui::new(800.0, 600.0, GuiSettings::default()).unwrap();
    let root = gui.add_widget(Box::new(RectWidget::new(800.0, 600.0)));
    gui.set_root(root).unwrap();

    let mut first = RecordingSurface::new(800.0, 600.0);
    gui.render(&mut first).unwrap();

    assert!(gui.dispatch(&Event::Scroll(42)));
    assert!(!gui.dispatch(&Event::Click { x: 3.0, y: 4.0 }));
    assert!(gui.is_dirty());

    let mut second = RecordingSurface::new(800.0, 600.0);
    gui.render(&mut second).unwrap();
    assert_eq!(first.commands(), second.commands());
    assert_eq!(
        gui.widgets().get_as::<RectWidget>(&root).unwrap().scroll_y(),
        42
    );
}

#[test]
fn settings_drive_new_grids() {
    init_logging();

    let settings = GuiSettings::from_json(
        r#"{
            "border_line_width": 3.0,
            "back_color": { "r": 10, "g": 20, "b": 30, "a": 0.5 }
        }"#,
    )
    .unwrap();
    let gui = Gui::new(200.0, 100.0, settings).unwrap();
    let grid = gui.new_grid();
    assert_eq!(grid.back_color().to_css(), "rgba(10,20,30,0.5)");

    let mut surface = RecordingSurface::new(200.0, 100.0);
    gilib_render::Drawable::draw(&grid, &mut surface);
    assert!(surface
        .commands()
        .contains(&DrawCommand::LineWidth { width: 3.0 }));
}
