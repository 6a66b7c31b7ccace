use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use fence::analyze::{Analysis, Session};
use fence::geom2::{GeomCfg, Role, TaggedPoint};
use fence::rand::{draw_point_set, Bounds2, RandomPointsCfg, ReplayToken};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "fence-cli")]
#[command(about = "Fence hull and sentry visibility over point tables")]
struct Cmd {
    /// Optional run label; propagated to logs and provenance sidecars
    #[arg(long)]
    label: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the fence and count sentries viewing outside
    Analyze {
        /// Point table (index,type,x,y)
        #[arg(long)]
        input: PathBuf,
        /// Write the JSON report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Re-export the table with a summary row
        #[arg(long)]
        export: Option<PathBuf>,
        /// Classification tolerance
        #[arg(long, default_value_t = GeomCfg::default().eps)]
        eps: f64,
    },
    /// Write a random point table
    Sample {
        #[arg(long, default_value_t = 12)]
        obstacles: usize,
        #[arg(long, default_value_t = 8)]
        sentries: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Analyze {
            input,
            out,
            export,
            eps,
        } => analyze(&input, out.as_deref(), export.as_deref(), eps, cmd.label),
        Action::Sample {
            obstacles,
            sentries,
            seed,
            index,
            out,
        } => sample(obstacles, sentries, ReplayToken { seed, index }, &out, cmd.label),
        Action::Report => report(cmd.label),
    }
}

#[derive(Serialize)]
struct SentryDoc {
    /// 1-based row index in the point table.
    index: usize,
    x: f64,
    y: f64,
    class: &'static str,
}

#[derive(Serialize)]
struct ReportDoc {
    fence_vertex_count: usize,
    sentries_outside: usize,
    total_sentries: usize,
    viewing_outside: String,
    hull: Vec<[f64; 2]>,
    sentries: Vec<SentryDoc>,
}

impl ReportDoc {
    fn new(points: &[TaggedPoint], a: &Analysis) -> Self {
        let sentries = points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.role() == Role::Sentry)
            .zip(&a.classes)
            .map(|((i, p), class)| SentryDoc {
                index: i + 1,
                x: p.point().x,
                y: p.point().y,
                class: class.as_str(),
            })
            .collect();
        Self {
            fence_vertex_count: a.report.fence_vertex_count,
            sentries_outside: a.report.sentries_outside,
            total_sentries: a.report.total_sentries,
            viewing_outside: a.report.to_string(),
            hull: a.hull.vertices.iter().map(|v| [v.x, v.y]).collect(),
            sentries,
        }
    }
}

fn analyze(
    input: &Path,
    out: Option<&Path>,
    export: Option<&Path>,
    eps: f64,
    label: Option<String>,
) -> Result<()> {
    ensure!(eps.is_finite() && eps >= 0.0, "eps must be finite and non-negative, got {eps}");
    tracing::info!(input = %input.display(), eps, label = ?label, "analyze");

    let loaded = table::load_points(input)?;
    if loaded.skipped > 0 {
        tracing::warn!(skipped = loaded.skipped, "skipped malformed rows");
    }
    if loaded.points.is_empty() {
        tracing::warn!(input = %input.display(), "no valid points found");
    }

    let mut session = Session::from_points(loaded.points, GeomCfg { eps });
    tracing::info!(
        points = session.points().len(),
        obstacles = session.obstacle_count(),
        "loaded"
    );
    let analysis = session.analysis().clone();
    let doc = ReportDoc::new(session.points(), &analysis);
    tracing::info!(
        fence_vertices = doc.fence_vertex_count,
        sentries_outside = doc.sentries_outside,
        total_sentries = doc.total_sentries,
        "fence"
    );

    let params = json!({
        "input": input.to_string_lossy(),
        "eps": eps,
        "loaded": session.points().len(),
        "skipped": loaded.skipped
    });
    match out {
        Some(path) => {
            write_output(path, &serde_json::to_vec_pretty(&doc)?)?;
            write_sidecar(path, Payload::new("analyze", params.clone(), label.clone()))?;
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }

    if let Some(path) = export {
        let summary = session.summary_line();
        table::save_points(path, session.points(), summary.as_deref())?;
        tracing::info!(export = %path.display(), summary = summary.is_some(), "exported");
        write_sidecar(path, Payload::new("analyze", params, label))?;
    }
    Ok(())
}

fn sample(
    obstacles: usize,
    sentries: usize,
    tok: ReplayToken,
    out: &Path,
    label: Option<String>,
) -> Result<()> {
    tracing::info!(obstacles, sentries, seed = tok.seed, index = tok.index, "sample");
    let cfg = RandomPointsCfg {
        obstacles,
        sentries,
        bounds: Bounds2::default(),
    };
    let points = draw_point_set(cfg, tok);
    table::save_points(out, &points, None)?;
    let params = json!({
        "obstacles": obstacles,
        "sentries": sentries,
        "seed": tok.seed,
        "index": tok.index
    });
    write_sidecar(out, Payload::new("sample", params, label))?;
    Ok(())
}

fn report(label: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "engine_version": fence::VERSION,
        "label": label,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
