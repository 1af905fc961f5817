use pinrelax::image::Image1D;
use pinrelax::initial_conditions::*;
use pinrelax::smooth_example::Args;
use pinrelax::solver::*;
use pinrelax::SmoothError;

use std::time::Instant;

fn main() -> Result<(), SmoothError> {
    let args = Args::cli_parse("pinrelax");

    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = pinrelax::smooth_example::start_puffin_server()?;

    let n = args.size;
    let m = args.iterations;
    let pins = args.pins()?;
    let smoother = Smoother::new(n, pins)?;

    let ic_type = args.ic_type()?;
    let initial = generate_ic(n, ic_type)?;
    println!("n = {n}");
    println!("m = {m}");
    println!("N = {}", args.secondary);
    tracing::debug!(ic = ?ic_type, "generated initial condition");

    if args.output_result {
        println!("Initial vector: {initial}");
    }
    println!("Fixed elements (index, value): {}", smoother.pins());

    let mut history = args
        .image
        .as_ref()
        .map(|_| Image1D::new(n, m, args.lines));

    let start_time = Instant::now();
    let result = match history.as_mut() {
        Some(img) => smoother.smooth_with(initial, m, |t, s| img.observe(t, s)),
        None => smoother.smooth(initial, m),
    }?;
    let elapsed_time = start_time.elapsed();
    profiling::finish_frame!();

    if args.output_result {
        println!("Result: {result}");
    }
    println!("Time taken: {}s.", elapsed_time.as_secs_f64());

    if let Some(path) = &args.csv {
        pinrelax::csv::write_csv(&result, path)?;
    }
    if let (Some(img), Some(path)) = (history, &args.image) {
        img.write(path)?;
    }

    Ok(())
}
