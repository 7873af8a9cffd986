// File: crates/sheet-core/tests/engine.rs
// Purpose: Command ordering, determinism, color injection and sink error propagation.

use sheet_core::{
    Color, DrawCommand, FixedColor, LayoutEngine, LayoutError, LineStyle, Point, RandomColor,
    RecordingSink, RenderSink, SheetConfig, ShapeStyle, SinkError, Size, TextStyle,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn small() -> SheetConfig {
    SheetConfig {
        canvas_size_mm: Size::new(100.0, 100.0),
        padding_mm: 10.0,
        border_thickness_mm: 5.0,
        stroke_width_mm: 0.5,
        font_size_mm: 3.0,
        row_divisions: 2,
        column_divisions: 2,
        ..SheetConfig::default()
    }
}

#[test]
fn commands_follow_stacking_order() {
    init_logs();
    let cmds = LayoutEngine::new(small()).commands().unwrap();
    assert_eq!(cmds.len(), 3 + 16 + 16);

    let kinds: Vec<&str> = cmds.iter().map(DrawCommand::kind).collect();
    assert_eq!(&kinds[..3], ["rect", "rect", "rect"]);
    assert!(kinds[3..19].iter().all(|k| *k == "line"));
    assert!(kinds[19..].iter().all(|k| *k == "text"));

    match &cmds[0] {
        DrawCommand::Rectangle { position, size, style } => {
            assert_eq!(*position, Point::new(0.0, 0.0));
            assert_eq!(*size, Size::new(100.0, 100.0));
            assert_eq!(style.fill, Some(Color::WHITE));
            assert_eq!(style.stroke, None);
        }
        other => panic!("background expected, got {other}"),
    }
    match &cmds[2] {
        DrawCommand::Rectangle { position, size, style } => {
            assert_eq!((*position, *size), (Point::new(15.0, 15.0), Size::new(70.0, 70.0)));
            assert_eq!(style.fill, None);
        }
        other => panic!("inner box expected, got {other}"),
    }
}

#[test]
fn end_ticks_are_drawn_twice_as_wide() {
    let cmds = LayoutEngine::new(small()).commands().unwrap();
    let widths: Vec<f64> = cmds
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Line { style, .. } => Some(style.width_mm),
            _ => None,
        })
        .collect();
    // Columns first: 4 end ticks, 4 interior; then rows the same.
    assert_eq!(widths, [1.0, 1.0, 1.0, 1.0, 0.5, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0, 1.0, 0.5, 0.5, 0.5, 0.5]);
}

#[test]
fn identical_configs_give_identical_commands() {
    let a = LayoutEngine::new(SheetConfig::default()).commands().unwrap();
    let b = LayoutEngine::new(SheetConfig::default()).commands().unwrap();
    assert_eq!(a, b);
    let la: Vec<String> = a.iter().map(ToString::to_string).collect();
    let lb: Vec<String> = b.iter().map(ToString::to_string).collect();
    assert_eq!(la, lb);
}

#[test]
fn background_comes_from_the_injected_source() {
    let teal = Color::rgb(0x20, 0x80, 0x80);
    let cmds = LayoutEngine::with_background(small(), FixedColor(teal)).commands().unwrap();
    assert!(matches!(&cmds[0], DrawCommand::Rectangle { style, .. } if style.fill == Some(teal)));
}

#[test]
fn seeded_random_backgrounds_repeat() {
    let mut a = LayoutEngine::with_background(small(), RandomColor::seeded(7));
    let mut b = LayoutEngine::with_background(small(), RandomColor::seeded(7));
    for _ in 0..3 {
        let (ca, cb) = (a.commands().unwrap(), b.commands().unwrap());
        assert_eq!(ca, cb);
        if let DrawCommand::Rectangle { style, .. } = &ca[0] {
            let c = style.fill.unwrap();
            assert!(c.r >= RandomColor::MIN_CHANNEL && c.g >= RandomColor::MIN_CHANNEL && c.b >= RandomColor::MIN_CHANNEL);
        }
    }
}

#[test]
fn render_replays_everything_then_finalizes_once() {
    let mut sink = RecordingSink::new();
    LayoutEngine::new(small()).render(&mut sink).unwrap();
    assert_eq!(sink.lines.len(), 35);
    assert_eq!(sink.finalized, 1);
    assert!(sink.lines[0].starts_with("rect 0.00000,0.00000 100.00000x100.00000 fill=#ffffff"));
}

#[test]
fn invalid_config_touches_no_sink() {
    let mut sink = RecordingSink::new();
    let cfg = SheetConfig { row_divisions: 0, ..small() };
    let err = LayoutEngine::new(cfg).render(&mut sink).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidConfiguration(_)));
    assert!(sink.lines.is_empty());
    assert_eq!(sink.finalized, 0);
}

struct BrokenSink {
    draws: usize,
}

impl RenderSink for BrokenSink {
    fn draw_rectangle(&mut self, _: Point, _: Size, _: &ShapeStyle) { self.draws += 1; }
    fn draw_line(&mut self, _: Point, _: Point, _: &LineStyle) { self.draws += 1; }
    fn draw_text(&mut self, _: &str, _: Point, _: &TextStyle) { self.draws += 1; }
    fn finalize(&mut self) -> Result<(), SinkError> {
        Err(SinkError::Backend("disk full".into()))
    }
}

#[test]
fn sink_failures_surface_unchanged() {
    let mut sink = BrokenSink { draws: 0 };
    let err = LayoutEngine::new(small()).render(&mut sink).unwrap_err();
    match err {
        LayoutError::Sink(SinkError::Backend(msg)) => assert_eq!(msg, "disk full"),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(sink.draws, 35);
}
