use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hepascore::batch;
use hepascore::batch::{impute, template};
use hepascore::cli::{BatchArgs, Cli, Commands, ModeArg, PredictArgs, TemplateArgs, ValidateArgs};
use hepascore::error::PredictError;
use hepascore::io::{csv, json_writer, summary};
use hepascore::model::loader;
use hepascore::model::Classifier;
use hepascore::predict::Predictor;
use hepascore::record::{InputMode, RawRecord};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Predict(args) => run_predict(args),
        Commands::Batch(args) => run_batch(args),
        Commands::Template(args) => run_template(args),
        Commands::Validate(args) => run_validate(args),
    }
}

fn run_predict(args: PredictArgs) -> Result<()> {
    let record = match (&args.score, &args.kcnq1, &args.linc01785) {
        (Some(score), None, None) => RawRecord::Score {
            score: score.clone(),
            age: args.age.clone(),
            afp: args.afp.clone(),
            alb: args.alb.clone(),
            ggt: args.ggt.clone(),
        },
        (None, Some(kcnq1), Some(linc01785)) => RawRecord::Form {
            kcnq1: kcnq1.clone(),
            linc01785: linc01785.clone(),
            age: args.age.clone(),
            afp: args.afp.clone(),
            alb: args.alb.clone(),
            ggt: args.ggt.clone(),
        },
        _ => anyhow::bail!("provide either --score, or both --kcnq1 and --linc01785"),
    };

    let classifier = load_classifier(&args.model, args.load_timeout)?;
    let predictor = Predictor::new(classifier);

    match predictor.predict(&record) {
        Ok(result) => {
            if args.json {
                let report = json_writer::build_prediction(&result);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", summary::format_prediction(&result));
            }
            Ok(())
        }
        Err(PredictError::Validation(errors)) => {
            eprintln!("validation errors:");
            for (field, err) in &errors {
                eprintln!("- {}: {}", field, err);
            }
            anyhow::bail!("validation failed for {} field(s)", errors.len());
        }
        Err(err) => Err(anyhow::Error::new(err).context("prediction failed, try again")),
    }
}

fn run_batch(args: BatchArgs) -> Result<()> {
    let mode = input_mode(args.mode);
    let csv_text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let classifier = load_classifier(&args.model, args.load_timeout)?;
    let ctx = batch::run_batch(mode, &csv_text, classifier)?;

    std::fs::write(&args.out, ctx.output_csv()?)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    if let Some(json_path) = &args.json {
        let report = json_writer::build_batch_report(&ctx);
        json_writer::write_json(json_path, &report)?;
    }

    print!("{}", summary::format_batch_summary(&ctx));
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn run_template(args: TemplateArgs) -> Result<()> {
    let content = template::template(input_mode(args.mode));
    match &args.out {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", content),
    }
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<()> {
    let mode = input_mode(args.mode);
    let csv_text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let table = csv::parse_csv(&csv_text)?;

    println!("hepascore validate ok");
    println!("rows: {}", table.rows.len());
    for &field in mode.fields() {
        let col = table.column(field.name());
        let would_impute = table
            .rows
            .iter()
            .filter(|row| {
                let raw = col.and_then(|i| row.get(i)).map(String::as_str);
                impute::resolve_field(field, raw).1
            })
            .count();
        println!(
            "{}\t{} row(s) would impute (default {})",
            field,
            would_impute,
            impute::default_for(field)
        );
    }
    Ok(())
}

fn load_classifier(
    model: &std::path::Path,
    load_timeout_secs: u64,
) -> Result<Arc<dyn Classifier>> {
    let classifier =
        loader::load_with_timeout(model, Duration::from_secs(load_timeout_secs))?;
    Ok(Arc::new(classifier))
}

fn input_mode(arg: ModeArg) -> InputMode {
    match arg {
        ModeArg::Form => InputMode::Form,
        ModeArg::Score => InputMode::Score,
    }
}
