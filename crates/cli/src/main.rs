use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use planar::{GeomCfg, Polygon, Vec2};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "planar-cli")]
#[command(about = "Classify polygons and compute hulls from JSON point lists")]
struct Cmd {
    /// Tolerance for approximate comparisons
    #[arg(long, default_value_t = planar::EPSILON)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify every polygon in a JSON array of `[[x, y], ...]` rings
    Classify {
        #[arg(long)]
        input: PathBuf,
        /// Write the report here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Convex hull of a JSON array of `[x, y]` points
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print version and provenance info
    Report,
}

/// Per-polygon classification record.
#[derive(Debug, Serialize, PartialEq)]
struct PolygonReport {
    index: usize,
    vertices: usize,
    convex: bool,
    simple: bool,
    degenerate: bool,
    duplicate_vertices: bool,
    signed_area: f64,
    centroid: Option<[f64; 2]>,
    radius2: Option<[f64; 2]>,
    bbox: [[f64; 2]; 2],
}

fn xy(p: Vec2) -> [f64; 2] {
    [p.x, p.y]
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = GeomCfg::new(cmd.eps);
    match cmd.action {
        Action::Classify { input, out } => classify(&input, out.as_deref(), cfg),
        Action::Hull { input, out } => hull(&input, out.as_deref(), cfg),
        Action::Report => report(),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

fn emit<T: Serialize>(value: &T, out: Option<&Path>, params: serde_json::Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match out {
        None => println!("{text}"),
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            let sidecar = provenance::write_sidecar(path, provenance::Payload::new(params))?;
            tracing::info!(out = %path.display(), sidecar = %sidecar.display(), "wrote");
        }
    }
    Ok(())
}

fn classify_rings(rings: &[Vec<[f64; 2]>], cfg: GeomCfg) -> Result<Vec<PolygonReport>> {
    rings
        .iter()
        .enumerate()
        .map(|(index, ring)| {
            let poly = Polygon::with_cfg(ring.iter().copied(), cfg)
                .with_context(|| format!("polygon {index}"))?;
            let bbox = poly.bounding_box();
            Ok(PolygonReport {
                index,
                vertices: poly.len(),
                convex: poly.is_convex(),
                simple: poly.is_simple(),
                degenerate: poly.is_degenerate(),
                duplicate_vertices: poly.has_duplicate_vertices(),
                signed_area: poly.signed_area(),
                centroid: poly.centroid().map(xy),
                radius2: poly.radius2().map(|(lo, hi)| [lo, hi]),
                bbox: [xy(bbox.min()), xy(bbox.max())],
            })
        })
        .collect()
}

fn classify(input: &Path, out: Option<&Path>, cfg: GeomCfg) -> Result<()> {
    let rings: Vec<Vec<[f64; 2]>> = read_json(input)?;
    tracing::info!(input = %input.display(), polygons = rings.len(), eps = cfg.eps, "classify");
    let reports = classify_rings(&rings, cfg)?;
    let convex = reports.iter().filter(|r| r.convex).count();
    let simple = reports.iter().filter(|r| r.simple).count();
    tracing::info!(convex, simple, "classified");
    emit(
        &reports,
        out,
        serde_json::json!({ "command": "classify", "input": input.to_string_lossy(), "eps": cfg.eps }),
    )
}

fn hull_of(points: &[[f64; 2]], cfg: GeomCfg) -> Result<Vec<[f64; 2]>> {
    let hull = Polygon::convex_hull_with_cfg(points.iter().copied(), cfg).context("convex hull")?;
    Ok(hull.iter().map(xy).collect())
}

fn hull(input: &Path, out: Option<&Path>, cfg: GeomCfg) -> Result<()> {
    let points: Vec<[f64; 2]> = read_json(input)?;
    tracing::info!(input = %input.display(), points = points.len(), eps = cfg.eps, "hull");
    let hull = hull_of(&points, cfg)?;
    tracing::info!(vertices = hull.len(), "hull computed");
    emit(
        &hull,
        out,
        serde_json::json!({ "command": "hull", "input": input.to_string_lossy(), "eps": cfg.eps }),
    )
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "version": planar::VERSION,
        "code_rev": provenance::current_git_rev(),
        "epsilon": planar::EPSILON,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
