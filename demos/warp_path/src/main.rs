use argh::FromArgs;
use std::path::PathBuf;

use dndwarp::image::ops;
use dndwarp::imgproc::{
    animate::{Path, PathAnimator},
    parallel::ExecutionStrategy,
    warp::WarpEngine,
};
use dndwarp::io::{functional as F, naming};

#[derive(FromArgs)]
/// Warp an image around an observer, or animate the observer along a path
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image: PathBuf,

    /// transformation to apply: "dnd" for the Chebyshev (DnD) warp
    #[argh(option, short = 't', default = "String::from(\"dnd\")")]
    transformation: String,

    /// observer position as a fraction of the width (0 left, 1 right), repeat for a path
    #[argh(option)]
    x0: Vec<f64>,

    /// observer position as a fraction of the height (0 bottom, 1 top), repeat for a path
    #[argh(option)]
    y0: Vec<f64>,

    /// number of worker threads, all cores if not set
    #[argh(option)]
    threads: Option<usize>,

    /// where to write the result, derived from the input path if not set
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let xs = if args.x0.is_empty() { vec![0.0] } else { args.x0 };
    let ys = if args.y0.is_empty() { vec![0.0] } else { args.y0 };
    if xs.len() != ys.len() {
        log::warn!(
            "got {} x0 and {} y0 values, using the first {} pairs",
            xs.len(),
            ys.len(),
            xs.len().min(ys.len())
        );
    }
    let path = Path::from_axes(&xs, &ys)?;

    // read the image and drop alpha if present
    let image = F::read_image_any(&args.image)?.into_rgb8()?;
    let image_f32 = image.cast::<f32>()?;

    let strategy = match args.threads {
        Some(n) => ExecutionStrategy::Fixed(n),
        None => ExecutionStrategy::Parallel,
    };

    let engine = WarpEngine::new(&args.transformation)?;
    let animator = PathAnimator::new(engine).with_strategy(strategy);
    let frames = animator
        .animate(&image_f32, &path)?
        .iter()
        .map(ops::convert::<u8, 3>)
        .collect::<Result<Vec<_>, _>>()?;

    let output = args
        .output
        .unwrap_or_else(|| naming::output_path_for(&args.image, frames.len()));

    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    match frames.as_slice() {
        [still] => F::write_image_any(&output, still)?,
        _ => F::write_gif_animation(&output, &frames, F::FrameTiming::default())?,
    }

    log::info!("wrote {} frame(s) to {}", frames.len(), output.display());

    Ok(())
}
