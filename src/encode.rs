use tokenizers::Tokenizer;

use crate::error::{Error, Result};

/// A tokenized example, ready for batching.
///
/// `input_ids` and `segment_ids` always have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedExample {
    pub input_ids: Vec<u32>,
    pub segment_ids: Vec<u32>,
}

/// Encodes a raw text into token ids and segment ids.
///
/// Special tokens are added and truncation is applied according to the
/// tokenizer's own configuration.
pub fn encode(tokenizer: &Tokenizer, text: &str) -> Result<EncodedExample> {
    let encoding = tokenizer.encode(text, true)?;
    let input_ids = encoding.get_ids().to_vec();
    let segment_ids = encoding.get_type_ids().to_vec();
    debug_assert_eq!(input_ids.len(), segment_ids.len());
    Ok(EncodedExample {
        input_ids,
        segment_ids,
    })
}

/// Encodes a labeled example for evaluation.
///
/// The returned class index is the label's position within `labels`.
/// Prediction itself never needs this; scoring labeled data does.
///
/// # Errors
///
/// [`Error::UnknownLabel`] if `label` does not occur in `labels`.
pub fn encode_labeled(
    tokenizer: &Tokenizer,
    text: &str,
    label: &str,
    labels: &[&str],
) -> Result<(EncodedExample, i64)> {
    let index = labels
        .iter()
        .position(|known| *known == label)
        .ok_or_else(|| Error::UnknownLabel(label.to_string()))?;
    let example = encode(tokenizer, text)?;
    Ok((example, index as i64))
}
