use parametric::plot::{plot_curve, plot_spread, sample_curve};
use parametric::registry::{self, Arg, Args as CallArgs, Call};
use parametric::spread::{sunflower_spread_with_rng, OrderBy, Point, SpreadParams};
use parametric::verifier::verify_all;

use anyhow::{anyhow, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fs::create_dir_all;

#[derive(Parser, Debug)]
#[command(
    name = "parametric",
    version,
    about = "Shared easing / spread operators: list, evaluate, sample, verify"
)]
struct Args {
    /// list | eval | sample | spread | verify
    #[arg(long, default_value = "list")]
    mode: String,
    /// Registry id, e.g. `ease-out-bounce` or `round-trip-switch`
    #[arg(long)]
    function: Option<String>,
    /// Comma-separated arguments; `name=value` binds by parameter name.
    /// In sample mode these follow the sampled `t`.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    args: String,
    #[arg(long, default_value_t = 200)]
    samples: usize,

    // Spread parameters
    #[arg(long, default_value_t = 0.0)]
    n: f64,
    #[arg(long, default_value_t = 1.0)]
    distance: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    x_offset: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    y_offset: f64,
    #[arg(long, default_value = "none")]
    order_by: String,
    #[arg(long, allow_hyphen_values = true)]
    farthest_angle_deg: Option<f64>,
    /// Seed for the free rotation when no farthest angle is given
    #[arg(long)]
    seed: Option<u64>,
    /// Spread parameters as a JSON object; overrides the individual flags
    #[arg(long)]
    params_json: Option<String>,

    #[arg(long, default_value = "out")]
    out_dir: String,
    #[arg(long = "no-draw", action = clap::ArgAction::SetFalse, default_value_t = true)]
    draw: bool,
    #[arg(long, action = clap::ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Serialize)]
struct SampleRow {
    t: f64,
    value: f64,
}

#[derive(Serialize)]
struct PointRow {
    index: usize,
    x: f64,
    y: f64,
}

fn validate_inputs(args: &Args) -> Result<()> {
    if args.samples < 1 {
        return Err(anyhow!("samples must be ≥ 1 (got {})", args.samples));
    }
    if args.n.is_nan() || args.n < 0.0 {
        return Err(anyhow!("n must be ≥ 0 (got {})", args.n));
    }
    if !args.distance.is_finite() {
        return Err(anyhow!("distance must be finite (got {})", args.distance));
    }
    if OrderBy::from_name(&args.order_by).is_none() {
        return Err(anyhow!("unknown order-by: {}", args.order_by));
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    validate_inputs(&args)?;

    match args.mode.as_str() {
        "list" => run_list(&args),
        "eval" => run_eval(&args),
        "sample" => run_sample(&args),
        "spread" => run_spread(&args),
        "verify" => run_verify(&args),
        m => Err(anyhow!("unknown mode: {}", m)),
    }
}

/// `a,b,name=value` → positional `[a, b]`, named `{name: value}`
fn parse_call_args(raw: &str) -> CallArgs {
    let mut call = CallArgs::default();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token.split_once('=') {
            Some((name, value)) => {
                call.named.insert(name.trim().to_string(), Arg::parse(value));
            }
            None => call.positional.push(Arg::parse(token)),
        }
    }
    call
}

fn function_id(args: &Args) -> Result<&str> {
    args.function
        .as_deref()
        .ok_or_else(|| anyhow!("{}: need --function", args.mode))
}

/// Registry ids may contain operator symbols; keep file names portable
fn file_stem(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}

fn run_list(args: &Args) -> Result<()> {
    for entry in registry::table() {
        if args.verbose {
            let kind = match entry.call { Call::Unary(_) => "unary", Call::Variadic(_) => "variadic" };
            println!("{:<32} {}", entry.id, kind);
        } else {
            println!("{}", entry.id);
        }
    }
    Ok(())
}

fn run_eval(args: &Args) -> Result<()> {
    let id = function_id(args)?;
    let value = registry::call(id, &parse_call_args(&args.args))?;
    println!("{}", serde_json::to_string(&value)?);
    Ok(())
}

fn run_sample(args: &Args) -> Result<()> {
    let id = function_id(args)?;
    let entry = registry::lookup(id).ok_or_else(|| anyhow!("unknown function: {}", id))?;
    let extra = parse_call_args(&args.args);

    let samples = sample_curve(
        |t| {
            let mut call = extra.clone();
            call.positional.insert(0, Arg::Number(t));
            entry
                .invoke(&call)?
                .as_number()
                .ok_or_else(|| anyhow!("{} does not return a number", id))
        },
        args.samples,
    )?;

    create_dir_all(&args.out_dir)?;
    let stem = file_stem(id);
    let mut wtr = csv::Writer::from_path(format!("{}/{}.csv", args.out_dir, stem))?;
    for &(t, value) in &samples {
        wtr.serialize(SampleRow { t, value })?;
    }
    wtr.flush()?;

    if args.verbose {
        let (lo, hi) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, v)| (lo.min(v), hi.max(v)));
        println!("[{}] samples={} min={:.6} max={:.6}", id, samples.len(), lo, hi);
    }
    if args.draw {
        plot_curve(id, &samples, &format!("{}/{}.png", args.out_dir, stem))?;
    }
    Ok(())
}

fn spread_params(args: &Args) -> Result<SpreadParams> {
    if let Some(json) = &args.params_json {
        return Ok(serde_json::from_str(json)?);
    }
    Ok(SpreadParams {
        n: args.n,
        distance: args.distance,
        x_offset: args.x_offset,
        y_offset: args.y_offset,
        order_by: OrderBy::from_name(&args.order_by).unwrap_or_default(),
        farthest_angle_deg: args.farthest_angle_deg,
    })
}

fn run_spread(args: &Args) -> Result<()> {
    let params = spread_params(args)?;
    let points: Vec<Point> = match args.seed {
        Some(seed) => sunflower_spread_with_rng(&params, &mut StdRng::seed_from_u64(seed)),
        None => sunflower_spread_with_rng(&params, &mut rand::rng()),
    };

    create_dir_all(&args.out_dir)?;
    let mut wtr = csv::Writer::from_path(format!("{}/spread.csv", args.out_dir))?;
    for (index, p) in points.iter().enumerate() {
        wtr.serialize(PointRow { index, x: p.x, y: p.y })?;
    }
    wtr.flush()?;

    if args.verbose {
        println!(
            "[sunflower-spread] n={} distance={} offset=({}, {}) order-by={:?}",
            points.len(),
            params.distance,
            params.x_offset,
            params.y_offset,
            params.order_by
        );
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            println!("  first=({:.6}, {:.6}) last=({:.6}, {:.6})", first.x, first.y, last.x, last.y);
        }
    }
    if args.draw {
        plot_spread(&points, &format!("{}/spread.png", args.out_dir))?;
    }
    Ok(())
}

fn run_verify(args: &Args) -> Result<()> {
    let reports = verify_all()?;
    let mut failed = 0;
    for rep in &reports {
        if args.verbose || !rep.ok() {
            println!(
                "[{}] f(0)={:.3e} f(1)={:.3e} endpoints={} max_gap={:.3e} at t={:.6} continuous={}",
                rep.id, rep.start, rep.end, rep.endpoints_ok, rep.max_gap, rep.worst_boundary, rep.continuous
            );
        }
        if !rep.ok() { failed += 1; }
    }
    println!("verified {} curves, {} failed", reports.len(), failed);
    if failed > 0 {
        return Err(anyhow!("{} curve(s) failed verification", failed));
    }
    Ok(())
}
