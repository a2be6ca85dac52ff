//! In-memory stand-ins for the model artifacts, so tests need no files.

use candle_core::Device;
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{Config as BertConfig, DTYPE};
use tokenizers::{
    models::wordlevel::WordLevel, pre_tokenizers::whitespace::Whitespace,
    processors::template::TemplateProcessing, Tokenizer,
};

use crate::model::{BertForSequenceClassification, ModelConfig};

/// A minimal but complete `config.json` for a two-label checkpoint.
pub(crate) const TINY_CONFIG: &str = r#"{
    "architectures": ["BertForSequenceClassification"],
    "attention_probs_dropout_prob": 0.0,
    "hidden_act": "gelu",
    "hidden_dropout_prob": 0.0,
    "hidden_size": 8,
    "id2label": { "0": "negative", "1": "positive" },
    "initializer_range": 0.02,
    "intermediate_size": 16,
    "label2id": { "negative": 0, "positive": 1 },
    "layer_norm_eps": 1e-12,
    "max_position_embeddings": 32,
    "model_type": "bert",
    "num_attention_heads": 2,
    "num_hidden_layers": 1,
    "pad_token_id": 0,
    "position_embedding_type": "absolute",
    "type_vocab_size": 2,
    "vocab_size": 16
}"#;

/// Word-level tokenizer over a ten-token vocabulary, with the usual
/// `[CLS] … [SEP]` template.
pub(crate) fn tiny_tokenizer() -> Tokenizer {
    let vocab = [
        ("[PAD]", 0),
        ("[UNK]", 1),
        ("[CLS]", 2),
        ("[SEP]", 3),
        ("the", 4),
        ("movie", 5),
        ("was", 6),
        ("great", 7),
        ("terrible", 8),
        ("fine", 9),
    ]
    .into_iter()
    .map(|(token, id)| (token.to_string(), id))
    .collect();
    let model = WordLevel::builder()
        .vocab(vocab)
        .unk_token("[UNK]".to_string())
        .build()
        .unwrap();

    let mut tokenizer = Tokenizer::new(model);
    tokenizer.with_pre_tokenizer(Some(Whitespace {}));
    tokenizer.with_post_processor(Some(
        TemplateProcessing::builder()
            .try_single("[CLS] $A [SEP]")
            .unwrap()
            .try_pair("[CLS] $A [SEP] $B:1 [SEP]:1")
            .unwrap()
            .special_tokens(vec![("[CLS]", 2), ("[SEP]", 3)])
            .build()
            .unwrap(),
    ));
    tokenizer
}

/// A zero-initialized model matching [`TINY_CONFIG`]. Every logit comes
/// out zero, so predictions are uniform and deterministic.
pub(crate) fn zeroed_model() -> (BertForSequenceClassification, ModelConfig) {
    let bert_config: BertConfig = serde_json::from_str(TINY_CONFIG).unwrap();
    let config: ModelConfig = serde_json::from_str(TINY_CONFIG).unwrap();
    let vb = VarBuilder::zeros(DTYPE, &Device::Cpu);
    let model = BertForSequenceClassification::load(vb, &bert_config, &config).unwrap();
    (model, config)
}
