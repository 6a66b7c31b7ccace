//! Walk through a few fences and print the report for each.
//!
//! Usage:
//!   cargo run -p fence --example scenarios
//!   cargo run -p fence --example scenarios -- random 200

use fence::prelude::*;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "fixed".to_string());
    match mode.as_str() {
        "fixed" => show_fixed(),
        "random" => {
            let n = std::env::args()
                .nth(2)
                .and_then(|s| s.parse().ok())
                .unwrap_or(50);
            show_random(n);
        }
        _ => eprintln!("usage: scenarios [fixed|random [obstacles]]"),
    }
}

fn show(name: &str, points: &[TaggedPoint]) {
    let a = analyze_with_cfg(points, GeomCfg::default());
    let verts: Vec<(f64, f64)> = a.hull.vertices.iter().map(|v| (v.x, v.y)).collect();
    println!(
        "{name}: fence={} viewing_outside={} hull={verts:?} classes={:?}",
        a.report.fence_vertex_count, a.report, a.classes
    );
}

fn show_fixed() {
    show(
        "square",
        &[
            TaggedPoint::obstacle(0.0, 0.0),
            TaggedPoint::obstacle(4.0, 0.0),
            TaggedPoint::obstacle(4.0, 4.0),
            TaggedPoint::obstacle(0.0, 4.0),
            TaggedPoint::sentry(2.0, 2.0),
            TaggedPoint::sentry(5.0, 5.0),
            TaggedPoint::sentry(0.0, 2.0),
        ],
    );
    show(
        "triangle",
        &[
            TaggedPoint::obstacle(0.0, 0.0),
            TaggedPoint::obstacle(10.0, 0.0),
            TaggedPoint::obstacle(5.0, 10.0),
            TaggedPoint::sentry(0.0, 0.0),
        ],
    );
    show(
        "collinear",
        &[
            TaggedPoint::obstacle(1.0, 1.0),
            TaggedPoint::obstacle(2.0, 2.0),
            TaggedPoint::obstacle(3.0, 3.0),
            TaggedPoint::sentry(2.0, 2.0),
        ],
    );
}

fn show_random(obstacles: usize) {
    let cfg = RandomPointsCfg {
        obstacles,
        sentries: 10,
        ..RandomPointsCfg::default()
    };
    for index in 0..3 {
        let points = draw_point_set(cfg, ReplayToken { seed: 2025, index });
        show(&format!("random#{index}"), &points);
    }
}
