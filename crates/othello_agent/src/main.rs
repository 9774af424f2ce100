mod session;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use classical_engine::{ClassicalEngine, HeuristicWeights, LeafEval};
use othello_core::AGENT_NAME;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LeafArg {
    /// Weighted material, mobility and corner heuristic
    Heuristic,
    /// Disk difference only
    Material,
}

impl From<LeafArg> for LeafEval {
    fn from(arg: LeafArg) -> Self {
        match arg {
            LeafArg::Heuristic => LeafEval::Heuristic,
            LeafArg::Material => LeafEval::Material,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name announced to the controller
    #[arg(long, default_value = AGENT_NAME)]
    name: String,

    /// TOML weight profile (keys: material, mobility, corner)
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Leaf evaluator used by the search
    #[arg(long, value_enum, default_value = "heuristic")]
    leaf: LeafArg,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    // stdout belongs to the controller protocol
    .target(env_logger::Target::Stderr)
    .init();
}

fn run(args: Args) -> Result<()> {
    let weights = match &args.weights {
        Some(path) => HeuristicWeights::load(path)
            .with_context(|| format!("loading weights from {}", path.display()))?,
        None => HeuristicWeights::default(),
    };
    log::debug!("heuristic weights {weights:?}, leaf {:?}", args.leaf);

    let mut engine = ClassicalEngine::with_weights(weights).with_leaf_eval(args.leaf.into());

    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run_session(stdin.lock(), stdout.lock(), &mut engine, &args.name)
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    if let Err(e) = run(args) {
        log::error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}
