//! predecir - Iris classifier demo CLI.
//!
//! Loads a pre-trained forest artifact and predicts the iris species for
//! four bounded feature inputs.
//!
//! Usage:
//!   predecir predict                          # defaults, bundled model
//!   predecir predict --petal-length 4.7 --petal-width 1.4
//!   predecir repl                             # interactive form
//!   predecir inspect -m models/iris_forest.json

use clap::{Parser, Subcommand};
use colored::Colorize;
use predecir::error::PredecirError;
use predecir::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "predecir")]
#[command(about = "Iris classifier demo: load a model artifact, predict the species")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// One-shot prediction from command-line feature values
    Predict {
        /// Path to the model artifact (.json, or bincode otherwise)
        #[arg(short, long, default_value = "models/iris_forest.json")]
        model: PathBuf,

        /// Sepal length in cm (clamped to 4.0..=8.0, default 5.1)
        #[arg(long)]
        sepal_length: Option<f32>,

        /// Sepal width in cm (clamped to 2.0..=4.5, default 3.5)
        #[arg(long)]
        sepal_width: Option<f32>,

        /// Petal length in cm (clamped to 1.0..=7.0, default 1.4)
        #[arg(long)]
        petal_length: Option<f32>,

        /// Petal width in cm (clamped to 0.1..=2.5, default 0.2)
        #[arg(long)]
        petal_width: Option<f32>,
    },

    /// Interactive form: re-renders the report after every change
    Repl {
        /// Path to the model artifact
        #[arg(short, long, default_value = "models/iris_forest.json")]
        model: PathBuf,
    },

    /// Show artifact metadata (version, schema, forest shape)
    Inspect {
        /// Path to the model artifact
        #[arg(short, long, default_value = "models/iris_forest.json")]
        model: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let use_colors = !cli.no_color;

    let result = match cli.command {
        Commands::Predict {
            model,
            sepal_length,
            sepal_width,
            petal_length,
            petal_width,
        } => run_predict(
            &model,
            [
                ("sepal-length", sepal_length),
                ("sepal-width", sepal_width),
                ("petal-length", petal_length),
                ("petal-width", petal_width),
            ],
            use_colors,
        ),
        Commands::Repl { model } => run_repl(&model, use_colors),
        Commands::Inspect { model } => run_inspect(&model),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if use_colors {
                eprintln!("{} {e}", "error:".red().bold());
            } else {
                eprintln!("error: {e}");
            }
            exit_code(&e)
        }
    }
}

/// Map error classes to distinct exit codes.
fn exit_code(err: &PredecirError) -> ExitCode {
    match err {
        PredecirError::UnknownSlider { .. } => ExitCode::from(2),
        PredecirError::Io(_) => ExitCode::from(3),
        PredecirError::Serialization(_)
        | PredecirError::FormatError { .. }
        | PredecirError::UnsupportedVersion { .. } => ExitCode::from(4),
        PredecirError::DimensionMismatch { .. } | PredecirError::SchemaMismatch { .. } => {
            ExitCode::from(5)
        }
        PredecirError::Other(_) => ExitCode::FAILURE,
    }
}

fn run_predict(
    model: &Path,
    overrides: [(&str, Option<f32>); 4],
    use_colors: bool,
) -> Result<()> {
    let artifact = ModelArtifact::load(model)?;
    let mut form = FeatureForm::new();
    for (key, value) in overrides {
        if let Some(v) = value {
            form.set(key, v)?;
        }
    }

    let report = PredictionReport::build(&artifact, &form)?;
    print!("{}", report.render(use_colors));
    Ok(())
}

fn run_repl(model: &Path, use_colors: bool) -> Result<()> {
    let artifact = ModelArtifact::load(model)?;
    let mut form = FeatureForm::new();

    println!("Iris classifier demo. Type 'help' for commands.");
    print!("{}", PredictionReport::build(&artifact, &form)?.render(use_colors));

    loop {
        if use_colors {
            print!("{} ", "predecir>".green().bold());
        } else {
            print!("predecir> ");
        }
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            // EOF (Ctrl+D)
            println!();
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        match parts.next() {
            Some("quit") | Some("exit") => break,
            Some("help") => print_help(&form),
            Some("show") => {
                print!("{}", PredictionReport::build(&artifact, &form)?.render(use_colors));
            }
            Some("set") => {
                let key = parts.next();
                let value = parts.next().and_then(|v| v.parse::<f32>().ok());
                match (key, value) {
                    (Some(key), Some(value)) => match form.set(key, value) {
                        Ok(stored) => {
                            println!("{key} = {stored:.2}");
                            // Every change triggers a fresh compute-and-render pass.
                            print!(
                                "{}",
                                PredictionReport::build(&artifact, &form)?.render(use_colors)
                            );
                        }
                        Err(e) => println!("{e}"),
                    },
                    _ => println!("usage: set <slider> <value>"),
                }
            }
            Some(other) => println!("unknown command: {other} (try 'help')"),
            None => {}
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn print_help(form: &FeatureForm) {
    println!("Commands:");
    println!("  set <slider> <value>   change one input and re-predict");
    println!("  show                   re-render the current report");
    println!("  quit                   exit");
    println!("Sliders:");
    for spec in form.sliders() {
        println!(
            "  {:<13} {} [{} .. {}], default {}",
            spec.key, spec.name, spec.min, spec.max, spec.default
        );
    }
}

fn run_inspect(model: &Path) -> Result<()> {
    let artifact = ModelArtifact::load(model)?;
    let forest = artifact.forest();

    println!("Artifact: {}", model.display());
    println!(
        "Format version: {}.{}",
        artifact.format_version.0, artifact.format_version.1
    );
    println!(
        "Forest: {} trees, max depth {}, {} features, {} classes",
        forest.n_trees(),
        forest.max_depth(),
        forest.n_features(),
        forest.n_classes()
    );
    println!("Classes: {}", artifact.class_names().join(", "));
    println!("Feature importances (descending):");
    for (name, score) in artifact.sorted_importances() {
        println!("  {name:<20} {score:.3}");
    }
    Ok(())
}
