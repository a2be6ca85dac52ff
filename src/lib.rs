//! Batched sentiment classification over a fine-tuned BERT checkpoint.
//!
//! The crate loads three artifacts — the architecture description
//! (`config.json`), the weights (`model.safetensors`) and the serialized
//! tokenizer (`tokenizer.json`) — and exposes a [`Classifier`] that turns
//! raw sentences into human-readable labels: texts are encoded into token
//! and segment ids, grouped into fixed-size batches padded to each batch's
//! longest sequence, pushed through one forward pass per batch, and the
//! resulting logits are softmaxed and argmaxed into labels.

pub mod batch;
pub mod classifier;
pub mod device;
pub mod encode;
pub mod error;
pub mod model;

#[cfg(test)]
pub(crate) mod test_utils;

pub use classifier::{Classifier, LabelMap, Prediction};
pub use device::DeviceKind;
pub use error::{Error, Result};
