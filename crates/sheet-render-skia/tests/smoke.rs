// File: crates/sheet-render-skia/tests/smoke.rs
// Purpose: End-to-end raster render of a small sheet, in memory and to a file.

use sheet_core::{Color, LayoutEngine, RenderSink, SheetConfig, ShapeStyle, Point, Size, SinkError};
use sheet_render_skia::SkiaRasterSink;

fn small() -> SheetConfig {
    SheetConfig {
        canvas_size_mm: Size::new(100.0, 100.0),
        padding_mm: 10.0,
        border_thickness_mm: 5.0,
        stroke_width_mm: 0.5,
        font_size_mm: 3.0,
        row_divisions: 2,
        column_divisions: 2,
        background_color: Color::rgb(240, 230, 200),
        ..SheetConfig::default()
    }
}

#[test]
fn render_smoke_png_bytes() {
    let cfg = small();
    let mut sink = SkiaRasterSink::new(cfg.canvas_size_mm, 96.0).expect("surface");
    // 100 mm at 96 dpi
    assert_eq!(sink.pixel_size(), (378, 378));
    assert!(sink.png_bytes().is_none());

    LayoutEngine::new(cfg).render(&mut sink).expect("render should succeed");
    let bytes = sink.png_bytes().expect("png after finalize");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (378, 378));
    // Padding area holds only the background fill
    assert_eq!(img.get_pixel(2, 2).0, [240, 230, 200, 255]);
    assert_eq!(img.get_pixel(375, 375).0, [240, 230, 200, 255]);
}

#[test]
fn render_smoke_png_file() {
    let out = std::path::PathBuf::from("target/test_out/sheet_smoke.png");
    let _ = std::fs::remove_file(&out);

    let cfg = small();
    let mut sink = SkiaRasterSink::to_file(cfg.canvas_size_mm, 72.0, &out).expect("surface");
    LayoutEngine::new(cfg).render(&mut sink).expect("render should succeed");

    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
    let on_disk = std::fs::read(&out).unwrap();
    assert_eq!(Some(on_disk.as_slice()), sink.png_bytes());
}

#[test]
fn filled_rectangle_covers_its_pixels() {
    let mut sink = SkiaRasterSink::new(Size::new(25.4, 25.4), 100.0).expect("surface");
    sink.draw_rectangle(Point::new(0.0, 0.0), Size::new(25.4, 25.4), &ShapeStyle::filled(Color::rgb(10, 20, 30)));
    sink.finalize().expect("encode");
    let img = image::load_from_memory(sink.png_bytes().unwrap()).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (100, 100));
    assert_eq!(img.get_pixel(50, 50).0, [10, 20, 30, 255]);
}

#[test]
fn invalid_dpi_is_a_backend_error() {
    let err = SkiaRasterSink::new(Size::new(10.0, 10.0), 0.0).err().expect("should fail");
    assert!(matches!(err, SinkError::Backend(_)));
}
