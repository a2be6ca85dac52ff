//! Fixed-size batching with per-batch padding.
//!
//! Examples are grouped into contiguous chunks in their original order;
//! within each chunk, token ids and segment ids are padded independently
//! to the chunk's longest sequence. Nothing is shuffled or dropped, so
//! result index `i` always corresponds to input index `i`.

use crate::encode::EncodedExample;

/// One batch of encoded examples, padded to a common length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedBatch {
    pub input_ids: Vec<Vec<u32>>,
    pub segment_ids: Vec<Vec<u32>>,
}

impl PaddedBatch {
    /// Number of examples in the batch.
    pub fn len(&self) -> usize {
        self.input_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input_ids.is_empty()
    }

    /// The common sequence length all rows were padded to.
    pub fn seq_len(&self) -> usize {
        self.input_ids.first().map_or(0, Vec::len)
    }
}

/// Splits `examples` into contiguous chunks of at most `batch_size` and
/// pads each chunk with `pad_id`. The last chunk may be shorter; a
/// `batch_size` of zero is treated as one.
pub fn batches(
    examples: &[EncodedExample],
    batch_size: usize,
    pad_id: u32,
) -> impl Iterator<Item = PaddedBatch> + '_ {
    examples
        .chunks(batch_size.max(1))
        .map(move |chunk| pad_chunk(chunk, pad_id))
}

/// Pads every sequence in `chunk` to the chunk's longest length.
///
/// Both id and segment rows are filled with `pad_id`.
pub fn pad_chunk(chunk: &[EncodedExample], pad_id: u32) -> PaddedBatch {
    let longest = chunk
        .iter()
        .map(|example| example.input_ids.len())
        .max()
        .unwrap_or(0);
    let pad = |seq: &[u32]| {
        let mut padded = seq.to_vec();
        padded.resize(longest, pad_id);
        padded
    };
    PaddedBatch {
        input_ids: chunk.iter().map(|example| pad(&example.input_ids)).collect(),
        segment_ids: chunk
            .iter()
            .map(|example| pad(&example.segment_ids))
            .collect(),
    }
}
