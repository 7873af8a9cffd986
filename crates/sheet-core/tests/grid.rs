// File: crates/sheet-core/tests/grid.rs
// Purpose: Tick counts, tick placement and rotational symmetry of both axes.

use sheet_core::{compute_layout, Corridor, Point, SheetConfig, Size, Tick, TickKind};

fn small(rows: u32, columns: u32) -> SheetConfig {
    SheetConfig {
        canvas_size_mm: Size::new(100.0, 100.0),
        padding_mm: 10.0,
        border_thickness_mm: 5.0,
        row_divisions: rows,
        column_divisions: columns,
        ..SheetConfig::default()
    }
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn tick_count_per_axis() {
    for d in 1..=12u32 {
        let layout = compute_layout(&small(d, d + 1)).unwrap();
        assert_eq!(layout.rows.ticks.len(), 4 * (d as usize - 1) + 4, "rows d={d}");
        assert_eq!(layout.columns.ticks.len(), 4 * d as usize + 4, "columns d={}", d + 1);
        assert_eq!(layout.rows.interior_count(), 4 * (d as usize - 1));
    }
}

#[test]
fn single_division_has_only_end_ticks() {
    let layout = compute_layout(&small(1, 1)).unwrap();
    assert_eq!(layout.rows.ticks.len(), 4);
    assert!(layout.rows.ticks.iter().all(|t| t.kind == TickKind::End && t.width_multiplier == 2.0));
    // One labelled zone per half-axis, on each corridor.
    assert_eq!(layout.row_labels.len(), 4);
    assert!(layout.row_labels.iter().all(|l| l.zone == 1));
}

#[test]
fn row_ticks_span_the_side_corridors() {
    let layout = compute_layout(&small(2, 2)).unwrap();
    let near: Vec<&Tick> = layout.rows.on(Corridor::Near).collect();
    let far: Vec<&Tick> = layout.rows.on(Corridor::Far).collect();
    assert_eq!(near.len(), 4);
    assert_eq!(far.len(), 4);

    // End ticks close the half-axes at the inner box edges.
    assert_eq!((near[0].start, near[0].end), (Point::new(10.0, 15.0), Point::new(15.0, 15.0)));
    assert_eq!((far[0].start, far[0].end), (Point::new(90.0, 15.0), Point::new(85.0, 15.0)));
    assert_eq!((near[1].start, near[1].end), (Point::new(10.0, 85.0), Point::new(15.0, 85.0)));

    // Interior ticks at midline ± 17.5 (70 / 2 / 2).
    assert_eq!(near[2].start, Point::new(10.0, 67.5));
    assert_eq!(near[3].start, Point::new(10.0, 32.5));
    assert_eq!(far[2].end, Point::new(85.0, 67.5));
    assert!(near[2].width_multiplier == 1.0 && near[2].kind == TickKind::Interior);
}

#[test]
fn column_ticks_span_the_top_and_bottom_corridors() {
    let layout = compute_layout(&small(2, 2)).unwrap();
    let ticks = &layout.columns.ticks;
    assert_eq!((ticks[0].start, ticks[0].end), (Point::new(15.0, 10.0), Point::new(15.0, 15.0)));
    assert_eq!((ticks[1].start, ticks[1].end), (Point::new(15.0, 90.0), Point::new(15.0, 85.0)));
    assert_eq!(ticks[4].start, Point::new(67.5, 10.0));
    assert_eq!(ticks[5].start, Point::new(32.5, 10.0));
}

#[test]
fn grid_survives_half_turn() {
    let cfg = SheetConfig {
        canvas_size_mm: Size::new(420.0, 297.0),
        row_divisions: 4,
        column_divisions: 7,
        ..SheetConfig::default()
    };
    let layout = compute_layout(&cfg).unwrap();
    let rotate = |p: Point| Point::new(420.0 - p.x, 297.0 - p.y);
    for grid in [&layout.rows, &layout.columns] {
        for t in &grid.ticks {
            let (s, e) = (rotate(t.start), rotate(t.end));
            assert!(
                grid.ticks.iter().any(|u| close(u.start, s) && close(u.end, e) && u.kind == t.kind),
                "no rotated partner for {t:?}"
            );
        }
    }
}

#[test]
fn ticks_stay_inside_the_corridors() {
    let cfg = SheetConfig::default();
    let layout = compute_layout(&cfg).unwrap();
    let t = cfg.border_thickness_mm;
    for tick in layout.rows.ticks.iter().chain(&layout.columns.ticks) {
        let len = ((tick.end.x - tick.start.x).powi(2) + (tick.end.y - tick.start.y).powi(2)).sqrt();
        assert!((len - t).abs() < 1e-9);
        assert!(layout.outer.contains_box(&sheet_core::SheetBox { position: tick.start, size: Size::new(0.0, 0.0) }));
    }
}
