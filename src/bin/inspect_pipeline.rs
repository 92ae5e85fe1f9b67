// Diagnostic tool to trace the preprocessing pipeline stage by stage
use docscan_prep::tools::{load_bitmap, luma_stats};
use docscan_prep::{Bitmap, NormalizeSpec, Processor, SceneKind, detector, normalize};
use std::env;

fn main() {
    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("Usage: inspect_pipeline <image> [image...]");
        std::process::exit(1);
    }

    for path in &paths {
        println!("\n============================================================");
        println!("INSPECTING: {}", path);
        println!("============================================================\n");
        inspect_image(path);
    }
}

fn inspect_image(path: &str) {
    let bitmap = match load_bitmap(path) {
        Ok(bitmap) => bitmap,
        Err(e) => {
            println!("Failed to open image: {}", e);
            return;
        }
    };

    println!(
        "Step 1: Image loaded - {}x{} pixels",
        bitmap.width(),
        bitmap.height()
    );
    let stats = luma_stats(&bitmap);
    println!(
        "        luminance min={} max={} mean={:.1}",
        stats.min, stats.max, stats.mean
    );

    let processor = Processor::new(224, 224);

    let scene = processor.classify_scene(&bitmap);
    println!("Step 2: Scene classified as {:?}", scene);

    if scene == SceneKind::Document {
        let layout = processor.classify_layout(&bitmap);
        println!("Step 3: Layout classified as {:?}", layout);

        match detector::find_document_quad(&bitmap) {
            Some(points) => {
                let quad = detector::order_corners(points);
                println!("Step 4: Document quad found:");
                for (name, p) in ["TL", "TR", "BR", "BL"].iter().zip(quad.corners.iter()) {
                    println!("        {}: ({:.1}, {:.1})", name, p.x, p.y);
                }
                let (w, h) = detector::estimate_warp_size(&quad);
                println!("        warp target: {}x{}", w, h);
                report_warp(&bitmap, &quad, w, h);
            }
            None => println!("Step 4: No document quad found (pipeline keeps the input)"),
        }
    } else {
        println!("Step 3: Item photo - rectification and enhancement skipped");
    }

    let (tensor, tel) = processor.process_with_telemetry(&bitmap);
    let (mut lo, mut hi) = (f32::INFINITY, f32::NEG_INFINITY);
    for &v in &tensor {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    println!(
        "Step 5: Tensor ready - {} values in [{:.3}, {:.3}]",
        tensor.len(),
        lo,
        hi
    );
    println!(
        "        telemetry: quad={} warp={} enhance={}",
        tel.quad_detected, tel.warp_applied, tel.enhance_applied
    );

    let det = normalize::for_detector(&bitmap, 960, &NormalizeSpec::Fixed);
    println!(
        "Extra : detector input {}x{} (scale back {:.3}x{:.3})",
        det.width, det.height, det.scale_w, det.scale_h
    );
}

fn report_warp(bitmap: &Bitmap, quad: &docscan_prep::Quad, w: u32, h: u32) {
    match docscan_prep::geometry::warp_perspective(bitmap, quad, w, h) {
        Some(warped) => println!(
            "        warp succeeded: {}x{} buffer",
            warped.width(),
            warped.height()
        ),
        None => println!("        warp failed (degenerate quad) - pipeline keeps the input"),
    }
}
