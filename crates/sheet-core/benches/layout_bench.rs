use sheet_core::paper::{self, Orientation};
use sheet_core::{LayoutEngine, RecordingSink, SheetConfig};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet_layout");
    for &(rows, columns) in &[(3u32, 4u32), (13, 40)] {
        group.bench_function(format!("a0_{rows}x{columns}"), |b| {
            let cfg = SheetConfig {
                row_divisions: rows,
                column_divisions: columns,
                ..SheetConfig::for_paper(paper::A0, Orientation::Landscape)
            };
            let mut engine = LayoutEngine::new(cfg);
            b.iter(|| {
                let cmds = engine.commands().expect("layout");
                black_box(cmds);
            });
        });
    }
    group.bench_function("a3_render_recording", |b| {
        let mut engine = LayoutEngine::new(SheetConfig::default());
        b.iter(|| {
            let mut sink = RecordingSink::new();
            engine.render(&mut sink).expect("render");
            black_box(sink.lines.len());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
