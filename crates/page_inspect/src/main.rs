//! Command-line inspector for saved page documents

use anyhow::Context;
use block_model::{Breakpoint, EditorSettings, EditorState, PageTree};
use clap::Parser;
use std::fmt::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "page_inspect")]
#[command(about = "Print the block outline of a saved page")]
struct Cli {
    /// Saved page JSON
    input: PathBuf,

    /// Breakpoint to resolve styles for (base, tablet, mobile)
    #[arg(short, long)]
    breakpoint: Option<String>,

    /// Canvas width in pixels; picks the breakpoint from settings
    #[arg(short, long, conflicts_with = "breakpoint")]
    width: Option<u32>,

    /// Style property to resolve for every block (repeatable)
    #[arg(short, long = "style")]
    styles: Vec<String>,

    /// Editor data directory holding settings.json
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(dir) => EditorSettings::load(dir)
            .with_context(|| format!("Failed to load settings from {}", dir.display()))?,
        None => EditorSettings::default(),
    };

    let mut state = EditorState::from_settings(&settings);
    if let Some(name) = &cli.breakpoint {
        state.set_active_breakpoint(Breakpoint::from(name.as_str()));
    } else if let Some(width) = cli.width {
        state.set_active_breakpoint(settings.breakpoint_for_width(width));
    }

    let json = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let tree = PageTree::from_json(&json)
        .with_context(|| format!("Failed to load page {}", cli.input.display()))?;

    print!("{}", render_outline(&tree, &state, &cli.styles)?);
    Ok(())
}

/// One line per block: indent, icon, tag, id, then each requested style
fn render_outline(
    tree: &PageTree,
    state: &EditorState,
    styles: &[String],
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "breakpoint: {}", state.active_breakpoint())?;

    for (depth, block) in tree.iter() {
        write!(
            out,
            "{}{} <{}> #{}",
            "  ".repeat(depth),
            block.get_icon(),
            block.get_tag(),
            block.id()
        )?;
        for name in styles {
            match block.get_style(state, name) {
                Some(value) => write!(out, " {}={}", name, value)?,
                None => write!(out, " {}=-", name)?,
            }
        }
        writeln!(out)?;
    }
    Ok(out)
}
