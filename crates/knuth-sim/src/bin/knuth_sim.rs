//! `knuth-sim`: build a data structure from a dataset.
//!
//! Usage:
//!   knuth-sim [kind] [--frames | --play]
//!
//! A dataset document is read from stdin:
//!
//! ```json
//! { "label": "Conjunto 05", "data": [33, 18, 14, 21, 30], "tipo": "avl",
//!   "config": { "btree_degree": 2 } }
//! ```
//!
//! `kind` overrides the dataset's own `tipo`. The final snapshot is written as
//! JSON; `--frames` writes one line per prefix, and `--play` does the same
//! paced by `config.frame_delay_ms`. Logs go to stderr, filtered by
//! `RUST_LOG`.

use std::io::{self, Read, Write};

use knuth_sim::{Dataset, Feed, SimConfig, SimError, Simulator, Snapshot, StructureKind};
use serde::Deserialize;
use tokio_stream::StreamExt;
use tracing_subscriber::EnvFilter;

#[derive(Deserialize)]
struct Input {
    #[serde(flatten)]
    dataset: Dataset,
    #[serde(default)]
    config: SimConfig,
}

enum Mode {
    Final,
    Frames,
    Play,
}

fn write_line(out: &mut impl Write, snapshot: &Snapshot) -> Result<(), SimError> {
    let line = serde_json::to_string(snapshot)?;
    writeln!(out, "{line}")?;
    Ok(())
}

async fn run(kind: Option<String>, mode: Mode, doc: &str) -> Result<(), SimError> {
    let Input { dataset, config } = serde_json::from_str(doc)?;
    let kind = match kind {
        Some(k) => k.parse::<StructureKind>()?,
        None => dataset.kind.ok_or(SimError::MissingKind)?,
    };
    tracing::info!(%kind, label = %dataset.label, len = dataset.data.len(), "simulating");

    let delay = config.frame_delay();
    let sim = Simulator::new(kind, config, dataset.data.len());
    let mut out = io::stdout().lock();
    match mode {
        Mode::Final => write_line(&mut out, &sim.frame(&dataset.data)?)?,
        Mode::Frames => {
            for frame in sim.frames(&dataset.data)? {
                write_line(&mut out, &frame)?;
            }
        }
        Mode::Play => {
            let frames = sim.play(Feed::start(dataset.data, delay));
            tokio::pin!(frames);
            while let Some(frame) = frames.next().await {
                write_line(&mut out, &frame?)?;
                out.flush()?;
            }
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut kind = None;
    let mut mode = Mode::Final;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--frames" => mode = Mode::Frames,
            "--play" => mode = Mode::Play,
            _ if kind.is_none() => kind = Some(arg),
            _ => {
                eprintln!("Usage: knuth-sim [kind] [--frames | --play]");
                std::process::exit(1);
            }
        }
    }

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(kind, mode, buf.trim()).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
