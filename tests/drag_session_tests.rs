use draggable_chart::ChartError;
use draggable_chart::api::{
    ChartEngine, ChartEngineConfig, ChartKind, InputData, MoveOutcome, PointerDownOutcome,
    XySeries,
};
use draggable_chart::core::{Coordinate, PlotArea, PlotGeometry, Viewport};
use draggable_chart::interaction::{ControlPointRef, DragSession, InteractionMode};
use draggable_chart::render::NullRenderer;

fn scatter_engine(config: ChartEngineConfig) -> ChartEngine<NullRenderer> {
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_plot_geometry(
        PlotGeometry::new(PlotArea::new(0.0, 0.0, 400.0, 300.0))
            .with_x_range(0.0, 4.0)
            .with_y_range(0.0, 4.0),
    );
    let data = InputData::Xy(
        [
            (
                "editable".to_owned(),
                XySeries::from_pairs(&[(1.0, 1.0), (2.0, 2.0)]),
            ),
            (
                "reference".to_owned(),
                XySeries::from_pairs(&[(1.0, 3.0), (2.0, 3.0)]),
            ),
        ]
        .into_iter()
        .collect(),
    );
    engine.set_data(data).expect("set data");
    engine
}

fn default_config() -> ChartEngineConfig {
    ChartEngineConfig::new(Viewport::new(400, 300), ChartKind::Scatter)
        .with_fixed_series(["reference"])
}

#[test]
fn fixed_series_ignores_pointer_down() {
    let mut engine = scatter_engine(default_config());
    let outcome = engine
        .pointer_down(Some(ControlPointRef::new("reference", 0)))
        .expect("pointer down");
    assert_eq!(outcome, PointerDownOutcome::FixedSeries);
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
    assert!(engine.pan_enabled());
}

#[test]
fn second_pointer_down_keeps_the_first_target() {
    let mut engine = scatter_engine(default_config());
    engine
        .pointer_down(Some(ControlPointRef::new("editable", 0)))
        .expect("first pointer down");
    let outcome = engine
        .pointer_down(Some(ControlPointRef::new("editable", 1)))
        .expect("second pointer down");
    assert_eq!(outcome, PointerDownOutcome::AlreadyDragging);
    assert_eq!(
        engine.active_drag(),
        Some(&ControlPointRef::new("editable", 0))
    );
}

#[test]
fn drag_only_mutates_the_dragged_point() {
    let mut engine = scatter_engine(default_config());
    let before_reference = engine.series("reference").expect("series").clone();
    let before_other = engine
        .series("editable")
        .expect("series")
        .point(1)
        .expect("point")
        .clone();

    engine
        .pointer_down(Some(ControlPointRef::new("editable", 0)))
        .expect("pointer down");
    engine.pointer_move(50.0, 150.0).expect("move");
    engine.pointer_move(75.0, 120.0).expect("move");

    assert_eq!(engine.series("reference").expect("series"), &before_reference);
    assert_eq!(
        engine
            .series("editable")
            .expect("series")
            .point(1)
            .expect("point"),
        &before_other
    );
}

#[test]
fn degenerate_geometry_drops_the_move_and_keeps_dragging() {
    let mut engine = scatter_engine(default_config());
    engine
        .pointer_down(Some(ControlPointRef::new("editable", 0)))
        .expect("pointer down");
    let before = engine.series("editable").expect("series").clone();

    engine.set_plot_geometry(
        PlotGeometry::new(PlotArea::new(10.0, 0.0, 10.0, 300.0)).with_x_range(0.0, 4.0),
    );
    let outcome = engine.pointer_move(10.0, 50.0).expect("move is dropped, not failed");
    assert_eq!(outcome, MoveOutcome::Dropped);
    assert_eq!(engine.series("editable").expect("series"), &before);
    assert_eq!(engine.interaction_mode(), InteractionMode::Dragging);

    engine.set_plot_geometry(
        PlotGeometry::new(PlotArea::new(0.0, 0.0, 400.0, 300.0))
            .with_x_range(0.0, 4.0)
            .with_y_range(0.0, 4.0),
    );
    assert!(matches!(
        engine.pointer_move(200.0, 150.0).expect("move"),
        MoveOutcome::Applied { .. }
    ));
}

#[test]
fn collapsed_axis_range_drops_the_move() {
    let mut engine = scatter_engine(default_config());
    engine
        .pointer_down(Some(ControlPointRef::new("editable", 1)))
        .expect("pointer down");
    engine.set_plot_geometry(
        PlotGeometry::new(PlotArea::new(0.0, 0.0, 400.0, 300.0))
            .with_x_range(2.0, 2.0)
            .with_y_range(0.0, 4.0),
    );
    assert_eq!(
        engine.pointer_move(100.0, 100.0).expect("move"),
        MoveOutcome::Dropped
    );
}

#[test]
fn non_finite_pointer_drops_the_move_on_every_axis_kind() {
    let mut engine = scatter_engine(default_config());
    engine
        .pointer_down(Some(ControlPointRef::new("editable", 0)))
        .expect("pointer down");
    let before = engine.series("editable").expect("series").clone();
    assert_eq!(
        engine.pointer_move(f64::NAN, 50.0).expect("move"),
        MoveOutcome::Dropped
    );
    assert_eq!(engine.series("editable").expect("series"), &before);

    let mut labeled = ChartEngine::new(NullRenderer::default(), default_config())
        .expect("engine init");
    labeled.set_plot_geometry(
        PlotGeometry::new(PlotArea::new(0.0, 0.0, 400.0, 300.0)).with_y_range(0.0, 4.0),
    );
    labeled
        .set_data_json(r#"{"editable": {"x": ["lo", "hi"], "y": [1, 2]}}"#)
        .expect("set data");
    labeled
        .pointer_down(Some(ControlPointRef::new("editable", 1)))
        .expect("pointer down");
    assert_eq!(
        labeled.pointer_move(f64::INFINITY, 50.0).expect("move"),
        MoveOutcome::Dropped
    );
    assert_eq!(
        labeled.series("editable").expect("series").points()[1].x,
        Coordinate::from("hi")
    );
    assert_eq!(labeled.interaction_mode(), InteractionMode::Dragging);
}

#[test]
fn invalid_references_are_errors() {
    let mut engine = scatter_engine(default_config());
    let err = engine
        .pointer_down(Some(ControlPointRef::new("editable", 7)))
        .expect_err("index out of range");
    assert_eq!(
        err,
        ChartError::InvalidReference {
            series: "editable".to_owned(),
            index: 7,
            len: 2,
        }
    );

    let err = engine
        .pointer_down(Some(ControlPointRef::new("missing", 0)))
        .expect_err("unknown series");
    assert_eq!(err, ChartError::UnknownSeries("missing".to_owned()));
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn pan_is_disabled_exactly_while_dragging() {
    let mut engine = scatter_engine(default_config());
    assert!(engine.pan_enabled());
    engine
        .pointer_down(Some(ControlPointRef::new("editable", 0)))
        .expect("pointer down");
    assert!(!engine.pan_enabled());
    assert_eq!(engine.renderer().last_pan_enabled, Some(false));

    engine.pointer_move(120.0, 200.0).expect("move");
    assert!(!engine.pan_enabled());

    engine.pointer_up().expect("pointer up");
    assert!(engine.pan_enabled());
    assert_eq!(engine.renderer().last_pan_enabled, Some(true));
}

#[test]
fn hit_resolver_closure_drives_pointer_down() {
    let mut engine = scatter_engine(default_config());
    let resolver = |x: f64, _y: f64| (x < 150.0).then(|| ControlPointRef::new("editable", 0));

    assert_eq!(
        engine
            .pointer_down_at(300.0, 10.0, &resolver)
            .expect("miss"),
        PointerDownOutcome::NoHit
    );
    assert_eq!(
        engine
            .pointer_down_at(100.0, 225.0, &resolver)
            .expect("hit"),
        PointerDownOutcome::Started
    );
}

#[test]
fn engines_do_not_share_sessions() {
    let mut left = scatter_engine(default_config());
    let right = scatter_engine(default_config());
    left.pointer_down(Some(ControlPointRef::new("editable", 0)))
        .expect("pointer down");
    assert_eq!(left.interaction_mode(), InteractionMode::Dragging);
    assert_eq!(right.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn line_chart_drags_only_y() {
    let config = ChartEngineConfig::new(Viewport::new(400, 300), ChartKind::Line);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_data_json(r#"{"sales": {"Mon": 1.0, "Tue": 2.0, "Wed": 3.0}}"#)
        .expect("set data");
    engine.set_plot_geometry(
        PlotGeometry::new(PlotArea::new(0.0, 0.0, 400.0, 300.0)).with_y_range(0.0, 4.0),
    );

    engine
        .pointer_down(Some(ControlPointRef::new("sales", 1)))
        .expect("pointer down");
    // x=390px would map to `Wed` if x were draggable.
    engine.pointer_move(390.0, 0.0).expect("move");
    let point = engine
        .series("sales")
        .expect("series")
        .point(1)
        .expect("point");
    assert_eq!(point.x, Coordinate::from("Tue"));
    assert_eq!(point.y, Coordinate::Number(4.0));
}

#[test]
fn session_state_machine_in_isolation() {
    let mut session = DragSession::default();
    assert_eq!(session.mode(), InteractionMode::Idle);
    assert!(session.begin(ControlPointRef::new("a", 0)));
    assert!(!session.begin(ControlPointRef::new("a", 1)));
    assert_eq!(session.end(), Some(ControlPointRef::new("a", 0)));
    assert_eq!(session.end(), None);
    assert!(session.pan_enabled());
}
