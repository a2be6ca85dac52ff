use std::collections::HashMap;

use serde::Deserialize;

use crate::classifier::LabelMap;

/// Classification metadata read from `config.json`.
///
/// The encoder's architecture fields are deserialized separately by
/// `candle_transformers`; this struct picks up the handful of values the
/// surrounding pipeline needs from the same file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModelConfig {
    pub hidden_size: usize,
    #[serde(default)]
    pub pad_token_id: u32,
    pub num_labels: Option<usize>,
    #[serde(default)]
    pub id2label: HashMap<String, String>,
    #[serde(default)]
    pub label2id: HashMap<String, usize>,
}

impl ModelConfig {
    /// Number of output classes.
    ///
    /// Prefers an explicit `num_labels`, then the size of `id2label`, and
    /// assumes a binary head when the checkpoint records neither.
    pub fn num_labels(&self) -> usize {
        self.num_labels.unwrap_or(match self.id2label.len() {
            0 => 2,
            n => n,
        })
    }

    /// Index-to-label table recorded by the fine-tune.
    ///
    /// `config.json` keys class indices as strings; entries that don't
    /// parse as indices are skipped.
    pub fn label_map(&self) -> LabelMap {
        self.id2label
            .iter()
            .filter_map(|(index, label)| index.parse().ok().map(|index| (index, label.clone())))
            .collect()
    }
}
