//! NLI-based zero-shot classification (Candle)
//!
//! Zero-shot classification via natural language inference: the input text is
//! the premise, and each candidate label is turned into a hypothesis through
//! a template ("This example is {}."). The entailment logit per label is then
//! soft-maxed across labels (single-label mode, scores sum to 1) or against
//! the contradiction logit per label (multi-label mode, independent
//! probabilities).

use crate::model_loader::DeviceType;
use triagescore_core::{Error, Result};

/// Hypothesis template matching the Hugging Face zero-shot pipeline default.
pub const DEFAULT_HYPOTHESIS_TEMPLATE: &str = "This example is {}.";

/// Options controlling NLI zero-shot inference.
#[derive(Debug, Clone)]
pub struct NliOptions {
    /// Classifier name (typically the model repo id)
    pub name: String,

    /// Device to run inference on
    pub device: DeviceType,

    /// Template with a `{}` placeholder for the candidate label
    pub hypothesis_template: String,

    /// Score labels independently instead of normalizing across the set
    pub multi_label: bool,
}

impl Default for NliOptions {
    fn default() -> Self {
        Self {
            name: "nli-zero-shot".to_string(),
            device: DeviceType::Cpu,
            hypothesis_template: DEFAULT_HYPOTHESIS_TEMPLATE.to_string(),
            multi_label: false,
        }
    }
}

/// Reject checkpoints the BERT loader cannot read.
///
/// The loader only implements the plain BERT encoder. Checkpoints with other
/// architectures (mobilebert, bart, deberta, ...) store their tensors under
/// different prefixes and layouts, so a mismatched `model_type` would
/// otherwise surface as an opaque weight-loading failure.
fn validate_model_type(model_type: Option<&str>) -> Result<()> {
    match model_type {
        None | Some("bert") => Ok(()),
        Some(other) => Err(Error::model(format!(
            "model_type '{other}' is not supported; use a bert-family MNLI \
             checkpoint (model_type \"bert\") or the lexicon backend"
        ))),
    }
}

/// Numerically stable softmax over a logit slice.
fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|l| (l - max).exp()).collect();
    let total: f32 = exps.iter().sum();
    exps.iter().map(|e| e / total).collect()
}

#[cfg(feature = "ml-models")]
pub use ml::NliZeroShotClassifier;

#[cfg(feature = "ml-models")]
mod ml {
    use super::{softmax, validate_model_type, NliOptions};
    use crate::classifier::{LabelDistribution, ZeroShotClassifier};
    use crate::model_loader::{DeviceType, ModelFiles};
    use candle_core::{Device, IndexOp, Tensor};
    use candle_nn::{Linear, Module, VarBuilder};
    use candle_transformers::models::bert::{BertModel, Config as BertConfig};
    use std::collections::HashMap;
    use std::time::Instant;
    use tokenizers::{Tokenizer, TruncationParams};
    use triagescore_core::{Error, Result};

    /// Checkpoint metadata we need beyond what the Bert config carries.
    #[derive(serde::Deserialize)]
    struct HubConfig {
        #[serde(default)]
        model_type: Option<String>,
        #[serde(default)]
        id2label: Option<HashMap<String, String>>,
        hidden_size: usize,
    }

    /// Zero-shot classifier backed by a BERT-family MNLI checkpoint.
    pub struct NliZeroShotClassifier {
        name: String,
        tokenizer: Tokenizer,
        model: BertModel,
        pooler: Linear,
        head: Linear,
        device: Device,
        entailment_idx: usize,
        contradiction_idx: usize,
        hypothesis_template: String,
        multi_label: bool,
    }

    impl NliZeroShotClassifier {
        /// Load the classifier from resolved checkpoint files.
        pub fn load(files: &ModelFiles, options: NliOptions) -> Result<Self> {
            let config_json = std::fs::read_to_string(&files.config)?;
            let bert_config: BertConfig = serde_json::from_str(&config_json)
                .map_err(|e| Error::model(format!("Failed to parse model config: {e}")))?;
            let hub_config: HubConfig = serde_json::from_str(&config_json)
                .map_err(|e| Error::model(format!("Failed to parse model config: {e}")))?;
            validate_model_type(hub_config.model_type.as_deref())?;

            let (entailment_idx, contradiction_idx, num_nli_labels) =
                nli_label_indices(&hub_config);

            let mut tokenizer = Tokenizer::from_file(&files.tokenizer)
                .map_err(|e| Error::model(format!("Failed to load tokenizer: {e}")))?;
            tokenizer
                .with_truncation(Some(TruncationParams {
                    max_length: 512,
                    ..Default::default()
                }))
                .map_err(|e| {
                    Error::model(format!("Failed to configure tokenizer truncation: {e}"))
                })?;

            let device = create_device(options.device)?;

            let vb = unsafe {
                VarBuilder::from_mmaped_safetensors(
                    &[files.weights.clone()],
                    candle_core::DType::F32,
                    &device,
                )
                .map_err(|e| Error::model(format!("Failed to load weights: {e}")))?
            };

            // MNLI checkpoints usually prefix encoder weights with "bert.".
            let model = BertModel::load(vb.pp("bert"), &bert_config)
                .or_else(|_| BertModel::load(vb.clone(), &bert_config))
                .map_err(|e| Error::model(format!("Failed to load BERT encoder: {e}")))?;

            let hidden = hub_config.hidden_size;
            let pooler = candle_nn::linear(hidden, hidden, vb.pp("bert.pooler.dense"))
                .or_else(|_| candle_nn::linear(hidden, hidden, vb.pp("pooler.dense")))
                .map_err(|e| Error::model(format!("Failed to load pooler: {e}")))?;
            let head = candle_nn::linear(hidden, num_nli_labels, vb.pp("classifier"))
                .map_err(|e| Error::model(format!("Failed to load NLI head: {e}")))?;

            Ok(Self {
                name: options.name,
                tokenizer,
                model,
                pooler,
                head,
                device,
                entailment_idx,
                contradiction_idx,
                hypothesis_template: options.hypothesis_template,
                multi_label: options.multi_label,
            })
        }

        /// Run one premise/hypothesis pair through the NLI head.
        fn nli_logits(&self, premise: &str, hypothesis: &str) -> Result<Vec<f32>> {
            let encoding = self
                .tokenizer
                .encode((premise.to_string(), hypothesis.to_string()), true)
                .map_err(|e| Error::classifier(format!("Tokenization failed: {e}")))?;

            let input_ids = Tensor::new(encoding.get_ids(), &self.device)
                .and_then(|t| t.unsqueeze(0))
                .map_err(|e| Error::classifier(format!("Failed to build input tensor: {e}")))?;
            let token_type_ids = Tensor::new(encoding.get_type_ids(), &self.device)
                .and_then(|t| t.unsqueeze(0))
                .map_err(|e| Error::classifier(format!("Failed to build type tensor: {e}")))?;

            let hidden = self
                .model
                .forward(&input_ids, &token_type_ids, None)
                .map_err(|e| Error::classifier(format!("Model forward pass failed: {e}")))?;

            // [CLS] hidden state -> pooler (dense + tanh) -> NLI head.
            let cls = hidden
                .i((.., 0))
                .map_err(|e| Error::classifier(format!("Failed to select CLS state: {e}")))?;
            let pooled = self
                .pooler
                .forward(&cls)
                .and_then(|t| t.tanh())
                .map_err(|e| Error::classifier(format!("Pooler failed: {e}")))?;
            let logits = self
                .head
                .forward(&pooled)
                .and_then(|t| t.squeeze(0))
                .map_err(|e| Error::classifier(format!("NLI head failed: {e}")))?;

            logits
                .to_vec1::<f32>()
                .map_err(|e| Error::classifier(format!("Failed to read logits: {e}")))
        }
    }

    #[async_trait::async_trait]
    impl ZeroShotClassifier for NliZeroShotClassifier {
        async fn classify(
            &self,
            text: &str,
            candidate_labels: &[String],
        ) -> Result<LabelDistribution> {
            if candidate_labels.is_empty() {
                return Err(Error::classifier("no candidate labels supplied"));
            }

            let start = Instant::now();

            let mut entailment = Vec::with_capacity(candidate_labels.len());
            let mut contradiction = Vec::with_capacity(candidate_labels.len());
            for label in candidate_labels {
                let hypothesis = self.hypothesis_template.replace("{}", label);
                let logits = self.nli_logits(text, &hypothesis)?;
                entailment.push(
                    logits
                        .get(self.entailment_idx)
                        .copied()
                        .ok_or_else(|| Error::classifier("entailment logit missing"))?,
                );
                contradiction.push(
                    logits
                        .get(self.contradiction_idx)
                        .copied()
                        .ok_or_else(|| Error::classifier("contradiction logit missing"))?,
                );
            }

            let scores = if self.multi_label {
                // Per-label entailment vs contradiction: independent
                // probabilities, no normalization across labels.
                entailment
                    .iter()
                    .zip(&contradiction)
                    .map(|(e, c)| softmax(&[*c, *e])[1])
                    .collect()
            } else {
                softmax(&entailment)
            };

            Ok(
                LabelDistribution::new(candidate_labels.to_vec(), scores)
                    .with_model(&self.name)
                    .with_latency_us(start.elapsed().as_micros() as u64),
            )
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    /// Locate entailment/contradiction positions in the checkpoint's NLI
    /// head. Falls back to the common MNLI layout when the config carries no
    /// label map.
    fn nli_label_indices(config: &HubConfig) -> (usize, usize, usize) {
        let mut entailment = 2;
        let mut contradiction = 0;
        let mut num_labels = 3;

        if let Some(id2label) = &config.id2label {
            num_labels = id2label.len().max(2);
            for (id, label) in id2label {
                let Ok(idx) = id.parse::<usize>() else {
                    continue;
                };
                let label = label.to_lowercase();
                if label.contains("entail") {
                    entailment = idx;
                } else if label.contains("contradict") {
                    contradiction = idx;
                }
            }
        }

        (entailment, contradiction, num_labels)
    }

    fn create_device(device_type: DeviceType) -> Result<Device> {
        match device_type {
            DeviceType::Cpu => Ok(Device::Cpu),
            DeviceType::Cuda(idx) => Device::new_cuda(idx)
                .map_err(|e| Error::model(format!("Failed to create CUDA device: {e}"))),
            DeviceType::Metal(idx) => Device::new_metal(idx)
                .map_err(|e| Error::model(format!("Failed to create Metal device: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{softmax, validate_model_type};

    #[test]
    fn test_softmax_sums_to_one() {
        let probs = softmax(&[1.0, 2.0, 3.0]);
        let total: f32 = probs.iter().sum();
        assert!((total - 1.0).abs() < 1e-6);
        assert!(probs[2] > probs[1] && probs[1] > probs[0]);
    }

    #[test]
    fn test_softmax_is_shift_invariant() {
        let a = softmax(&[1.0, 2.0]);
        let b = softmax(&[101.0, 102.0]);
        assert!((a[0] - b[0]).abs() < 1e-6);
    }

    #[test]
    fn test_bert_model_type_is_accepted() {
        assert!(validate_model_type(Some("bert")).is_ok());
        assert!(validate_model_type(None).is_ok());
    }

    #[test]
    fn test_unsupported_model_type_is_rejected_with_clear_error() {
        let err = validate_model_type(Some("mobilebert")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("mobilebert"));
        assert!(message.contains("lexicon"));
    }
}
