use std::{collections::HashMap, fs, path::Path};

use candle_core::{Device, Tensor, D};
use candle_nn::{ops::softmax, VarBuilder};
use candle_transformers::models::bert::{Config as BertConfig, DTYPE};
use tokenizers::{Tokenizer, TruncationParams};
use tracing::{debug, info};

use crate::{
    batch::batches,
    encode::encode,
    error::{Error, Result},
    model::{BertForSequenceClassification, ModelConfig},
};

/// Maps a class index to its human-readable label.
pub type LabelMap = HashMap<usize, String>;

/// A predicted label together with its softmax probability.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub score: f32,
}

/// A ready-to-run classification session.
///
/// Holds the model bound to its device and the tokenizer used to encode
/// raw text, so repeated [`predict`](Classifier::predict) calls reuse the
/// loaded artifacts.
pub struct Classifier {
    model: BertForSequenceClassification,
    tokenizer: Tokenizer,
    device: Device,
    pad_id: u32,
    labels: LabelMap,
}

impl Classifier {
    /// Loads the architecture config, weights and tokenizer.
    ///
    /// `model_file` is the checkpoint's `config.json`, `params_file` its
    /// `model.safetensors`, `tokenizer_file` the serialized
    /// `tokenizer.json`. The tokenizer is configured to truncate inputs
    /// to `max_seq_length`. Any missing or malformed artifact is fatal.
    pub fn load(
        model_file: impl AsRef<Path>,
        params_file: impl AsRef<Path>,
        tokenizer_file: impl AsRef<Path>,
        device: Device,
        max_seq_length: usize,
    ) -> Result<Self> {
        let raw = fs::read_to_string(model_file)?;
        let bert_config: BertConfig = serde_json::from_str(&raw)?;
        let config: ModelConfig = serde_json::from_str(&raw)?;

        let mut tokenizer = Tokenizer::from_file(tokenizer_file)?;
        tokenizer.with_truncation(Some(TruncationParams {
            max_length: max_seq_length,
            ..Default::default()
        }))?;

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[params_file.as_ref()], DTYPE, &device)?
        };
        let model = BertForSequenceClassification::load(vb, &bert_config, &config)?;
        info!(
            labels = config.num_labels(),
            max_seq_length, "classifier loaded"
        );

        Ok(Self {
            model,
            tokenizer,
            device,
            pad_id: config.pad_token_id,
            labels: config.label_map(),
        })
    }

    /// The index-to-label table recorded in the checkpoint's config, if
    /// it carries one.
    pub fn label_map(&self) -> Option<LabelMap> {
        (!self.labels.is_empty()).then(|| self.labels.clone())
    }

    /// Predicts a label for every text, in input order.
    ///
    /// Texts are encoded, grouped into batches of `batch_size`, padded to
    /// each batch's longest sequence, and run through one forward pass
    /// per batch. Logits are softmaxed row-wise and the most probable
    /// class is looked up in `label_map`.
    pub fn predict(
        &self,
        texts: &[impl AsRef<str>],
        label_map: &LabelMap,
        batch_size: usize,
    ) -> Result<Vec<Prediction>> {
        let examples = texts
            .iter()
            .map(|text| encode(&self.tokenizer, text.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let mut predictions = Vec::with_capacity(examples.len());
        for batch in batches(&examples, batch_size, self.pad_id) {
            debug!(rows = batch.len(), seq = batch.seq_len(), "running batch");
            let input_ids = stack_rows(&batch.input_ids, &self.device)?;
            let segment_ids = stack_rows(&batch.segment_ids, &self.device)?;
            // The engine has no implicit notion of padding; rebuild the
            // mask from the pad positions.
            let attention_mask = input_ids.ne(self.pad_id)?;
            let logits = self.model.forward(&input_ids, &segment_ids, &attention_mask)?;
            predictions.extend(decode_logits(&logits, label_map)?);
        }
        Ok(predictions)
    }
}

/// Converts raw per-class scores into labeled predictions.
///
/// Each row of `logits` is normalized with softmax; the most probable
/// class index (ties to the lowest index) is mapped through `label_map`.
pub fn decode_logits(logits: &Tensor, label_map: &LabelMap) -> Result<Vec<Prediction>> {
    let probs: Vec<Vec<f32>> = softmax(logits, D::Minus1)?.to_vec2()?;
    probs
        .into_iter()
        .map(|row| {
            let (index, score) = argmax(&row);
            let label = label_map
                .get(&index)
                .ok_or(Error::MissingLabel(index))?
                .clone();
            Ok(Prediction { label, score })
        })
        .collect()
}

/// Index and value of the row maximum; ties go to the lowest index.
fn argmax(row: &[f32]) -> (usize, f32) {
    row.iter().enumerate().fold(
        (0, f32::NEG_INFINITY),
        |(best_index, best), (index, &value)| {
            if value > best {
                (index, value)
            } else {
                (best_index, best)
            }
        },
    )
}

fn stack_rows(rows: &[Vec<u32>], device: &Device) -> candle_core::Result<Tensor> {
    let rows = rows
        .iter()
        .map(|row| Tensor::new(row.as_slice(), device))
        .collect::<candle_core::Result<Vec<_>>>()?;
    Tensor::stack(&rows, 0)
}
