use anyhow::{Context, Result};
use clap::Parser;
use mapcolor::geom2::COORD_LIMIT;
use mapcolor::render::RenderCfg;
use mapcolor::{colorize, find_neighbors, load, AdjacencyCfg, Layout};
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

#[derive(Parser, Debug)]
#[command(name = "mapcolor")]
#[command(about = "Find neighboring polygons in a layout and color them with four colors")]
struct Cmd {
    /// Layout description (YAML)
    input: PathBuf,

    /// Seed for color selection; a random seed is drawn and logged if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Wiggle distance used for neighbor detection
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(0..=COORD_LIMIT))]
    amount: i64,

    /// Record every neighbor hit in both directions
    #[arg(long)]
    symmetric: bool,

    /// Pixels per coordinate unit
    #[arg(long, default_value_t = 2)]
    scale: u32,

    #[arg(long, default_value_t = 100)]
    width: u32,

    #[arg(long, default_value_t = 100)]
    height: u32,

    /// Output image (PNG)
    #[arg(long, default_value = "layout.png")]
    out: PathBuf,

    /// Optional JSON run report
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    run(cmd)
}

fn run(cmd: Cmd) -> Result<()> {
    tracing::info!(input = %cmd.input.display(), out = %cmd.out.display(), "run");
    let mut layout = load::from_yaml_file(&cmd.input)
        .with_context(|| format!("loading {}", cmd.input.display()))?;

    let adjacency = AdjacencyCfg {
        amount: cmd.amount,
        symmetric: cmd.symmetric,
    };
    find_neighbors(&mut layout, adjacency);
    show_neighbors(&layout);

    let seed = cmd.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "coloring");
    let mut rng = StdRng::seed_from_u64(seed);
    colorize(&mut layout, &mut rng).context("coloring layout")?;
    for (p, q) in layout.conflicts() {
        let label = |id| layout.region(id).map_or("?", |r| r.label());
        tracing::warn!(
            region = label(p),
            neighbor = label(q),
            "neighbors share a color (one-directional adjacency)"
        );
    }
    show_colors(&layout);

    let render = RenderCfg {
        width: cmd.width,
        height: cmd.height,
        scale: cmd.scale,
        ..Default::default()
    };
    mapcolor::render::save_png(&layout, render, &cmd.out)
        .with_context(|| format!("rendering {}", cmd.out.display()))?;

    if let Some(path) = &cmd.report {
        let params = report::RunParams {
            input: cmd.input.display().to_string(),
            seed,
            amount: cmd.amount,
            symmetric: cmd.symmetric,
        };
        let doc = report::build(&layout, &params, &[cmd.out.as_path()]);
        report::write(path, &doc)?;
    }
    Ok(())
}

fn show_neighbors(layout: &Layout) {
    for r in layout.regions() {
        println!(
            "Polygon {} has the neighbors: {}",
            r.label(),
            label_list(&layout.neighbor_labels(r.id()))
        );
    }
}

/// `['A', 'B']`, labels single-quoted.
fn label_list(labels: &[&str]) -> String {
    let quoted: Vec<String> = labels.iter().map(|l| format!("'{l}'")).collect();
    format!("[{}]", quoted.join(", "))
}

fn show_colors(layout: &Layout) {
    for r in layout.regions() {
        if let Some(color) = r.color() {
            println!("Polygon {} is {}", r.label(), color);
        }
    }
}
