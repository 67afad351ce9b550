use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tj_core::ticks::format_value;
use tj_models::{ParamSet, ParamSpec, SimOptions, TrajectoryModel, default_model, lookup, models};
use tj_stats::aggregate;

/// Practical cap on step count: the engine itself is unbounded, interactive
/// latency is the caller's problem.
const MAX_STEPS: usize = 12_000;

#[derive(Parser)]
#[command(name = "tj-cli")]
#[command(about = "trajkit CLI - trajectory shape tuning engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered trajectory models
    Models,
    /// Show the parameter schema of a model
    Params {
        /// Model id (falls back to the default model if unknown)
        model_id: String,
        /// Emit the raw schema as JSON instead of a formatted listing
        #[arg(long)]
        json: bool,
    },
    /// Simulate a model and export samples (CSV) or statistics (JSON)
    Simulate {
        /// Model id (falls back to the default model if unknown)
        model_id: String,
        /// Time step in seconds
        #[arg(long, default_value_t = 0.05)]
        dt: f64,
        /// Number of realizations
        #[arg(long, default_value_t = 1)]
        samples: usize,
        /// Base seed for stochastic models (entropy-seeded if omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Parameter overrides, repeatable: --set name=value
        #[arg(long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
        /// Emit aggregated per-timestep statistics as JSON instead of CSV
        #[arg(long)]
        stats: bool,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the control command line for a parameter set
    Command {
        /// Model id (falls back to the default model if unknown)
        model_id: String,
        /// Parameter overrides, repeatable: --set name=value
        #[arg(long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Models => cmd_models(),
        Commands::Params { model_id, json } => cmd_params(&model_id, json),
        Commands::Simulate {
            model_id,
            dt,
            samples,
            seed,
            set,
            stats,
            output,
        } => cmd_simulate(&model_id, dt, samples, seed, &set, stats, output.as_deref()),
        Commands::Command { model_id, set } => cmd_command(&model_id, &set),
    }
}

/// Resolve an id, falling back to the default model on unknown ids.
///
/// The registry only reports "not found"; the fallback policy lives here at
/// the UI layer.
fn resolve_model(id: &str) -> &'static dyn TrajectoryModel {
    match lookup(id) {
        Some(model) => model,
        None => {
            let fallback = default_model();
            tracing::warn!(id, fallback = fallback.id(), "unknown model id, using default");
            fallback
        }
    }
}

/// Defaults overlaid with `--set name=value` overrides.
fn build_params(model: &dyn TrajectoryModel, overrides: &[String]) -> CliResult<ParamSet> {
    let mut params = model.default_params();
    for pair in overrides {
        let Some((name, value)) = pair.split_once('=') else {
            return Err(CliError::InvalidArg {
                what: format!("expected NAME=VALUE, got '{pair}'"),
            });
        };
        let value: f64 = value.parse().map_err(|_| CliError::InvalidArg {
            what: format!("'{value}' is not a number"),
        })?;
        if !params.contains(name) {
            tracing::warn!(name, model = model.id(), "parameter not in model schema");
        }
        params.set(name, value);
    }
    Ok(params)
}

fn cmd_models() -> CliResult<()> {
    println!("Registered models:");
    for model in models() {
        println!(
            "  {} - {} ({})",
            model.id(),
            model.name(),
            if model.is_stochastic() {
                "stochastic"
            } else {
                "deterministic"
            }
        );
    }
    Ok(())
}

/// One schema entry, values rendered at the granularity of its slider step.
fn spec_summary(spec: &ParamSpec) -> String {
    format!(
        "{} - {} (default {}, range [{}, {}], step {})",
        spec.name,
        spec.label,
        format_value(spec.default, spec.step),
        format_value(spec.min, spec.step),
        format_value(spec.max, spec.step),
        spec.step,
    )
}

fn cmd_params(model_id: &str, json: bool) -> CliResult<()> {
    let model = resolve_model(model_id);
    if json {
        let schema = serde_json::to_string_pretty(model.param_specs())?;
        println!("{schema}");
    } else {
        println!("Parameters for {}:", model.id());
        for spec in model.param_specs() {
            println!("  {}", spec_summary(spec));
        }
    }
    Ok(())
}

fn cmd_simulate(
    model_id: &str,
    dt: f64,
    samples: usize,
    seed: Option<u64>,
    overrides: &[String],
    stats: bool,
    output: Option<&Path>,
) -> CliResult<()> {
    if !(dt > 0.0) {
        return Err(CliError::InvalidArg {
            what: "dt must be positive".to_string(),
        });
    }
    let model = resolve_model(model_id);
    let params = build_params(model, overrides)?;

    let plot_time = model.plot_time(&params);
    let steps = (plot_time / dt).floor() as usize;
    if steps > MAX_STEPS {
        return Err(CliError::InvalidArg {
            what: format!("{steps} steps exceeds the cap of {MAX_STEPS}; increase --dt"),
        });
    }
    if model.has_singularity(&params) {
        tracing::warn!(model = model.id(), "parameter set has a velocity jump at t=0");
    }

    let opts = SimOptions {
        dt,
        n_samples: samples,
        seed,
    };
    let batch = model.simulate(&params, &opts);

    let mut out: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    if stats {
        let records = aggregate(&batch);
        serde_json::to_writer_pretty(&mut out, &records)?;
        writeln!(out)?;
    } else {
        writeln!(out, "sample,t,x,y,z,vx,vy,vz,speed,ax,ay,az,acc")?;
        for (k, traj) in batch.iter().enumerate() {
            for s in traj {
                let acc = s.acc.unwrap_or([0.0; 3]);
                writeln!(
                    out,
                    "{k},{},{},{},{},{},{},{},{},{},{},{},{}",
                    s.t,
                    s.pos[0],
                    s.pos[1],
                    s.pos[2],
                    s.vel[0],
                    s.vel[1],
                    s.vel[2],
                    s.speed,
                    acc[0],
                    acc[1],
                    acc[2],
                    s.acc_mag.unwrap_or(0.0),
                )?;
            }
        }
    }
    Ok(())
}

fn cmd_command(model_id: &str, overrides: &[String]) -> CliResult<()> {
    let model = resolve_model(model_id);
    let params = build_params(model, overrides)?;
    println!("{}", model.command(&params));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_falls_back_to_default() {
        assert_eq!(resolve_model("no-such-model").id(), default_model().id());
        assert_eq!(resolve_model("langevin").id(), "langevin");
    }

    #[test]
    fn build_params_applies_overrides() {
        let model = default_model();
        let params = build_params(model, &["duration=20".to_string()]).unwrap();
        assert_eq!(params.get("duration"), 20.0);
    }

    #[test]
    fn build_params_rejects_malformed_pairs() {
        let model = default_model();
        assert!(build_params(model, &["duration".to_string()]).is_err());
        assert!(build_params(model, &["duration=abc".to_string()]).is_err());
    }

    #[test]
    fn param_summary_formats_by_step() {
        // step 0.5 => one decimal place on default and bounds
        let spec = default_model().param_specs()[0];
        let line = spec_summary(&spec);
        assert!(line.starts_with("duration - Duration [s]"), "{line}");
        assert!(line.contains("default 10.0"), "{line}");
        assert!(line.contains("range [1.0, 60.0]"), "{line}");
    }
}
