use clap::Parser;

use asr_scorecard::cli::{AlignArgs, Cli, Command, ScoreArgs};
use asr_scorecard::model::ReportFormat;
use asr_scorecard::{ScError, ScResult, batch, ingest, metrics, report};

fn main() {
    asr_scorecard::logging::init();

    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run() -> ScResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Score(args) => run_score(&args),
        Command::Align(args) => run_align(&args),
    }
}

fn run_score(args: &ScoreArgs) -> ScResult<()> {
    let pairs = ingest::read_pairs(&args.input, &args.column_spec())?;
    tracing::info!(pairs = pairs.len(), input = %args.input.display(), "loaded transcript pairs");

    let records = if args.fail_fast {
        batch::compute_metrics_strict(&pairs)?
    } else {
        batch::compute_metrics(&pairs)
    };

    let mut out = report::render(&records, args.format)?;
    if args.summary {
        let summary = batch::summarize(&records);
        match args.format {
            ReportFormat::Table | ReportFormat::Csv => {
                out.push('\n');
                out.push_str(&report::render_summary(&summary));
            }
            ReportFormat::Json => {
                out.push_str(&serde_json::to_string_pretty(&summary)?);
                out.push('\n');
            }
            ReportFormat::Ndjson => {
                out.push_str(&serde_json::to_string(&summary)?);
                out.push('\n');
            }
        }
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, out)?;
            tracing::info!(output = %path.display(), "report written");
        }
        None => print!("{out}"),
    }
    Ok(())
}

fn run_align(args: &AlignArgs) -> ScResult<()> {
    let word = metrics::word_alignment(&args.reference, &args.hypothesis);
    let chars = metrics::char_alignment(&args.reference, &args.hypothesis);
    let scores = metrics::score_texts(&args.reference, &args.hypothesis)
        .map_err(|failure| ScError::InvalidRequest(failure.detail().to_owned()))?;

    if args.json {
        let payload = serde_json::json!({
            "word_alignment": word,
            "char_alignment": chars,
            "scores": scores,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!(
            "words: hits={} substitutions={} deletions={} insertions={} (N={}, M={})",
            word.hits,
            word.substitutions,
            word.deletions,
            word.insertions,
            word.reference_len(),
            word.hypothesis_len()
        );
        println!(
            "chars: hits={} substitutions={} deletions={} insertions={} (N={}, M={})",
            chars.hits,
            chars.substitutions,
            chars.deletions,
            chars.insertions,
            chars.reference_len(),
            chars.hypothesis_len()
        );
        println!("wer: {:.6}", scores.wer);
        println!("mer: {:.6}", scores.mer);
        println!("wil: {:.6}", scores.wil);
        println!("wip: {:.6}", scores.wip);
        println!("cer: {:.6}", scores.cer);
    }
    Ok(())
}
