// ============================================================
// Forward-Step Context
// ============================================================
// The record a training harness threads through one forward
// step. Named fields instead of a string-keyed mutable map make
// the contract explicit — a model reads `x` and writes `pred_y`,
// nothing else.

use burn::prelude::*;

/// Carries one batch through a forward step.
///
/// `x` is the input spectrogram batch, shape `[batch, freq_bin, time]`.
/// `pred_y` is `None` until a model's `step` fills it with the
/// prediction, shape `[batch, freq_bin]`. The context is owned by the
/// caller; models never persist it across calls.
#[derive(Debug, Clone)]
pub struct StepContext<B: Backend> {
    /// Input frames — shape: [batch, freq_bin, time]
    pub x: Tensor<B, 3>,

    /// Model prediction — shape: [batch, freq_bin]
    pub pred_y: Option<Tensor<B, 2>>,
}

impl<B: Backend> StepContext<B> {
    /// Wrap an input batch; the prediction slot starts empty.
    pub fn new(x: Tensor<B, 3>) -> Self {
        Self { x, pred_y: None }
    }
}
