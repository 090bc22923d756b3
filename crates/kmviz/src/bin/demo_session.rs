use clap::Parser;
use kmviz::{dataset, rng, InitMethod, Session, StepOutcome};
use std::path::PathBuf;

/// Generate a blob dataset, run a clustering session to convergence, and
/// dump every snapshot as a PNG.
#[derive(Parser)]
struct Args {
    /// Number of clusters
    #[arg(long, default_value_t = 4)]
    k: usize,

    /// Initialization method: random, farthest_first, kmeans++
    #[arg(long, default_value = "kmeans++")]
    method: String,

    /// RNG seed; omit for the default fixed seed
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory for frame_NNN.png files
    #[arg(long, default_value = "snapshots")]
    out: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let method: InitMethod = args.method.parse()?;
    let mut rng = match args.seed {
        Some(seed) => rng::with_seed(seed),
        None => rng::new(),
    };

    let data = dataset::random_blobs(&mut rng);
    let mut session = Session::with_rng(data, args.k, rng)?;

    session.initialize(method)?;
    let mut steps = 0;
    while session.step()? == StepOutcome::Progressed {
        steps += 1;
    }

    std::fs::create_dir_all(&args.out)?;
    for (i, frame) in session.snapshots().iter().enumerate() {
        frame.to_image().save(args.out.join(format!("frame_{i:03}.png")))?;
    }

    println!(
        "k={} {method:?}: converged after {steps} steps, wrote {} frames to {}",
        session.k(),
        session.snapshots().len(),
        args.out.display(),
    );
    Ok(())
}
