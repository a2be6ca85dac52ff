use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bert_sentiment_classifier::{Classifier, DeviceKind, LabelMap};

/// Batched sentiment prediction over a fine-tuned BERT checkpoint.
#[derive(Debug, Parser)]
#[command(name = "bert-sentiment-classifier", about, version)]
struct Args {
    /// Path to the model architecture description (config.json).
    #[arg(long)]
    model_file: PathBuf,

    /// Path to the model parameters (model.safetensors).
    #[arg(long)]
    params_file: PathBuf,

    /// Path to the serialized tokenizer (tokenizer.json).
    #[arg(long)]
    tokenizer_file: PathBuf,

    /// Maximum input sequence length after tokenization; longer inputs
    /// are truncated.
    #[arg(long, default_value_t = 128)]
    max_seq_length: usize,

    /// Number of examples per forward pass.
    #[arg(long, default_value_t = 2)]
    batch_size: usize,

    /// Device to run inference on.
    #[arg(long, value_enum, default_value_t = DeviceKind::Gpu)]
    device: DeviceKind,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let device = args.device.acquire()?;
    info!(device = ?args.device, "loading classifier");
    let classifier = Classifier::load(
        &args.model_file,
        &args.params_file,
        &args.tokenizer_file,
        device,
        args.max_seq_length,
    )?;

    let data = [
        "The room was spotless and the staff could not have been more helpful.",
        "The battery died within a week and support never answered my emails.",
        "A predictable plot, but the soundtrack almost makes up for it.",
    ];
    let label_map = classifier.label_map().unwrap_or_else(|| {
        LabelMap::from([(0, "negative".to_string()), (1, "positive".to_string())])
    });

    let results = classifier.predict(&data, &label_map, args.batch_size)?;
    for (text, prediction) in data.iter().zip(&results) {
        println!("Data: {} \t Label: {}", text, prediction.label);
    }
    Ok(())
}
