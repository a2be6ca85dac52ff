//! The classification model: a stock BERT encoder plus the fine-tuned
//! sequence-classification head.

use candle_core::{Result, Tensor};
use candle_nn::{linear, Linear, Module, VarBuilder};
use candle_transformers::models::bert::{BertModel, Config as BertConfig};

pub mod config;

pub use config::ModelConfig;

/// A BERT encoder with a sequence-classification head.
///
/// Expects the usual fine-tuned checkpoint layout: encoder weights under
/// `bert.*` (including `bert.pooler.dense`), the head under
/// `classifier.*`.
pub struct BertForSequenceClassification {
    bert: BertModel,
    pooler: Linear,
    classifier: Linear,
}

impl BertForSequenceClassification {
    pub fn load(vb: VarBuilder, bert_config: &BertConfig, config: &ModelConfig) -> Result<Self> {
        let bert = BertModel::load(vb.pp("bert"), bert_config)?;
        let pooler = linear(
            config.hidden_size,
            config.hidden_size,
            vb.pp("bert").pp("pooler").pp("dense"),
        )?;
        let classifier = linear(config.hidden_size, config.num_labels(), vb.pp("classifier"))?;
        Ok(Self {
            bert,
            pooler,
            classifier,
        })
    }

    /// Runs one forward pass.
    ///
    /// All three tensors are `(batch, seq)`; the result is the raw
    /// per-class logits of shape `(batch, labels)`.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        segment_ids: &Tensor,
        attention_mask: &Tensor,
    ) -> Result<Tensor> {
        let hidden = self.bert.forward(input_ids, segment_ids, Some(attention_mask))?;
        // The head was trained on the pooled first token.
        let first = hidden.narrow(1, 0, 1)?.squeeze(1)?;
        let pooled = self.pooler.forward(&first)?.tanh()?;
        self.classifier.forward(&pooled)
    }
}

#[cfg(test)]
mod tests {
    use candle_core::{Device, Tensor};

    use super::*;
    use crate::test_utils::{zeroed_model, TINY_CONFIG};

    #[test]
    fn forward_produces_one_logit_row_per_example() {
        let (model, config) = zeroed_model();
        let device = Device::Cpu;

        let input_ids = Tensor::new(&[[2u32, 4, 5, 3], [2, 8, 3, 0]], &device).unwrap();
        let segment_ids = input_ids.zeros_like().unwrap();
        let attention_mask = input_ids.ne(config.pad_token_id).unwrap();

        let logits = model
            .forward(&input_ids, &segment_ids, &attention_mask)
            .unwrap();
        assert_eq!(logits.dims(), [2, config.num_labels()]);
    }

    #[test]
    fn tiny_config_parses_for_both_views() {
        let _: BertConfig = serde_json::from_str(TINY_CONFIG).unwrap();
        let config: ModelConfig = serde_json::from_str(TINY_CONFIG).unwrap();
        assert_eq!(config.hidden_size, 8);
        assert_eq!(config.num_labels(), 2);
    }
}
