use criterion::{Criterion, black_box, criterion_group, criterion_main};
use docscan_prep::models::bitmap::pack_argb;
use docscan_prep::{Bitmap, Processor};

fn checkerboard(width: usize, height: usize, cell: usize) -> Bitmap {
    let black = pack_argb(255, 0, 0, 0);
    let white = pack_argb(255, 255, 255, 255);
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            pixels.push(if (x / cell + y / cell) % 2 == 0 { black } else { white });
        }
    }
    Bitmap::from_pixels(width, height, pixels)
}

fn solid(width: usize, height: usize) -> Bitmap {
    Bitmap::from_pixels(width, height, vec![pack_argb(255, 128, 128, 128); width * height])
}

fn bench_process_small(c: &mut Criterion) {
    let processor = Processor::new(224, 224);
    let image = solid(100, 100);
    c.bench_function("process_100x100_solid", |b| {
        b.iter(|| processor.process(black_box(&image)))
    });
}

fn bench_process_medium(c: &mut Criterion) {
    let processor = Processor::new(224, 224);
    let image = checkerboard(640, 480, 8);
    c.bench_function("process_640x480_document", |b| {
        b.iter(|| processor.process(black_box(&image)))
    });
}

fn bench_process_large(c: &mut Criterion) {
    let processor = Processor::new(224, 224);
    let image = solid(1920, 1080);
    c.bench_function("process_1920x1080_solid", |b| {
        b.iter(|| processor.process(black_box(&image)))
    });
}

fn bench_process_batch(c: &mut Criterion) {
    let processor = Processor::new(224, 224);
    let images: Vec<Bitmap> = (0..8).map(|_| checkerboard(640, 480, 8)).collect();
    c.bench_function("process_batch_8x_640x480", |b| {
        b.iter(|| processor.process_batch(black_box(&images)))
    });
}

criterion_group!(
    benches,
    bench_process_small,
    bench_process_medium,
    bench_process_large,
    bench_process_batch
);
criterion_main!(benches);
