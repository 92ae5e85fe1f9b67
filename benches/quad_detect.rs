use criterion::{Criterion, black_box, criterion_group, criterion_main};
use docscan_prep::models::bitmap::pack_argb;
use docscan_prep::{Bitmap, detector, geometry};

fn textured_page(width: usize, height: usize) -> Bitmap {
    let white = pack_argb(255, 255, 255, 255);
    let black = pack_argb(255, 0, 0, 0);
    let mut bmp = Bitmap::from_pixels(width, height, vec![white; width * height]);
    let (x0, y0) = (width / 8, height / 8);
    let (x1, y1) = (width * 7 / 8, height * 7 / 8);
    for y in y0..y1 {
        for x in x0..x1 {
            if (x / 8 + y / 8) % 2 == 0 {
                bmp.set(x, y, black);
            }
        }
    }
    bmp
}

fn bench_detect_medium(c: &mut Criterion) {
    let image = textured_page(640, 480);
    c.bench_function("find_quad_640x480", |b| {
        b.iter(|| detector::find_document_quad(black_box(&image)))
    });
}

fn bench_detect_large(c: &mut Criterion) {
    let image = textured_page(1920, 1080);
    c.bench_function("find_quad_1920x1080", |b| {
        b.iter(|| detector::find_document_quad(black_box(&image)))
    });
}

fn bench_warp(c: &mut Criterion) {
    let image = textured_page(640, 480);
    let quad = detector::order_corners(
        detector::find_document_quad(&image).expect("synthetic page should detect"),
    );
    let (w, h) = detector::estimate_warp_size(&quad);
    c.bench_function("warp_640x480", |b| {
        b.iter(|| geometry::warp_perspective(black_box(&image), black_box(&quad), w, h))
    });
}

criterion_group!(benches, bench_detect_medium, bench_detect_large, bench_warp);
criterion_main!(benches);
