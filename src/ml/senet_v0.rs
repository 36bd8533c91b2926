// ============================================================
// SeNetV0 — fixed 10-stage pipeline
// ============================================================
// The hand-dimensioned variant: every kernel and pool stride is
// chosen so that exactly 128 input frames collapse to a single
// step at the end of the stack. Channel counts run
// 257 → 256 → 128 → 128 → 128 → 96 → 257.
//
// Nothing validates the input length: feeding anything other
// than 128 frames silently changes the output length instead of
// failing (see `output_len`). Avoiding that is the caller's
// responsibility.

use burn::{
    nn::{
        conv::{Conv1d, Conv1dConfig},
        pool::{MaxPool1d, MaxPool1dConfig},
        BatchNorm, BatchNormConfig, PaddingConfig1d, Relu,
    },
    prelude::*,
};

use crate::domain::shape::{pipeline_out_len, LenOp};
use crate::ml::context::StepContext;

/// Number of frequency bins consumed and produced.
pub const FREQ_BIN: usize = 257;

/// Input frame count the stack is dimensioned for.
pub const EXPECTED_FRAMES: usize = 128;

/// Fixed convolutional stack regressing one feature per frequency bin.
///
/// Forward shape: `[batch, 257, 128]` → `[batch, 257]`.
#[derive(Module, Debug)]
pub struct SeNetV0<B: Backend> {
    conv1: Conv1d<B>,
    pool1: MaxPool1d,
    conv2: Conv1d<B>,
    norm2: BatchNorm<B, 1>,
    conv3: Conv1d<B>,
    norm3: BatchNorm<B, 1>,
    conv4: Conv1d<B>,
    norm4: BatchNorm<B, 1>,
    pool2: MaxPool1d,
    conv5: Conv1d<B>,
    norm5: BatchNorm<B, 1>,
    pool3: MaxPool1d,
    conv6: Conv1d<B>,
    relu:  Relu,
}

impl<B: Backend> SeNetV0<B> {
    pub fn new(device: &B::Device) -> Self {
        let model = Self {
            conv1: Conv1dConfig::new(257, 256, 9).init(device), // 257×128 → 256×120
            pool1: MaxPool1dConfig::new(2).with_stride(2).init(), // 256×120 → 256×60
            conv2: Conv1dConfig::new(256, 128, 9).init(device), // 256×60 → 128×52
            norm2: BatchNormConfig::new(128).init(device),
            conv3: Conv1dConfig::new(128, 128, 9)
                .with_padding(PaddingConfig1d::Explicit(4))
                .init(device), // 128×52 → 128×52
            norm3: BatchNormConfig::new(128).init(device),
            conv4: Conv1dConfig::new(128, 128, 9)
                .with_padding(PaddingConfig1d::Explicit(4))
                .init(device), // 128×52 → 128×52
            norm4: BatchNormConfig::new(128).init(device),
            pool2: MaxPool1dConfig::new(2).with_stride(2).init(), // 128×52 → 128×26
            conv5: Conv1dConfig::new(128, 96, 9).init(device), // 128×26 → 96×18
            norm5: BatchNormConfig::new(96).init(device),
            pool3: MaxPool1dConfig::new(2).with_stride(2).init(), // 96×18 → 96×9
            conv6: Conv1dConfig::new(96, 257, 9).init(device), // 96×9 → 257×1
            relu:  Relu::new(),
        };
        tracing::debug!("SeNetV0 ready: {} parameters", model.num_params());
        model
    }

    /// Run the stack and squeeze the collapsed time axis.
    ///
    /// `x` must be `[batch, 257, L]` with `L` such that the stack ends
    /// at a single step (`output_len(L) == 1`); 128 frames by
    /// construction. Other lengths abort in the final squeeze.
    pub fn forward(&self, x: Tensor<B, 3>) -> Tensor<B, 2> {
        let x = self.relu.forward(self.conv1.forward(x));
        let x = self.pool1.forward(x);
        let x = self.norm2.forward(self.relu.forward(self.conv2.forward(x)));
        let x = self.norm3.forward(self.relu.forward(self.conv3.forward(x)));
        let x = self.norm4.forward(self.relu.forward(self.conv4.forward(x)));
        let x = self.pool2.forward(x);
        let x = self.norm5.forward(self.relu.forward(self.conv5.forward(x)));
        let x = self.pool3.forward(x);
        let x = self.relu.forward(self.conv6.forward(x)); // [batch, 257, 1]
        x.squeeze(2) // [batch, 257]
    }

    /// Context protocol: read `x`, write `pred_y`.
    pub fn step(&self, ctx: &mut StepContext<B>) {
        ctx.pred_y = Some(self.forward(ctx.x.clone()));
    }
}

/// The stack's length transformations, in order.
pub fn len_ops() -> Vec<LenOp> {
    vec![
        LenOp::Conv { kernel: 9, stride: 1, padding: 0, dilation: 1 },
        LenOp::Pool { kernel: 2, stride: 2, padding: 0 },
        LenOp::Conv { kernel: 9, stride: 1, padding: 0, dilation: 1 },
        LenOp::Conv { kernel: 9, stride: 1, padding: 4, dilation: 1 },
        LenOp::Conv { kernel: 9, stride: 1, padding: 4, dilation: 1 },
        LenOp::Pool { kernel: 2, stride: 2, padding: 0 },
        LenOp::Conv { kernel: 9, stride: 1, padding: 0, dilation: 1 },
        LenOp::Pool { kernel: 2, stride: 2, padding: 0 },
        LenOp::Conv { kernel: 9, stride: 1, padding: 0, dilation: 1 },
    ]
}

/// Time steps left after the stack, given `input_len` frames.
/// `EXPECTED_FRAMES` is the only length that reaches exactly 1.
pub fn output_len(input_len: usize) -> usize {
    pipeline_out_len(&len_ops(), input_len)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::ndarray::NdArrayDevice;
    use burn::backend::NdArray;
    use burn::tensor::Distribution;

    #[test]
    fn test_length_walk_collapses_128_frames() {
        // 128 → 120 → 60 → 52 → 52 → 52 → 26 → 18 → 9 → 1
        assert_eq!(output_len(EXPECTED_FRAMES), 1);
    }

    #[test]
    fn test_other_lengths_do_not_collapse() {
        // No validation exists; a longer input just leaves more steps
        assert_eq!(output_len(136), 2);
    }

    #[test]
    fn test_forward_shape() {
        let device = NdArrayDevice::default();
        let model  = SeNetV0::<NdArray>::new(&device);
        let x = Tensor::<NdArray, 3>::random([4, FREQ_BIN, EXPECTED_FRAMES], Distribution::Default, &device);
        let y = model.forward(x);
        assert_eq!(y.dims(), [4, FREQ_BIN]);
    }

    #[test]
    fn test_squeeze_keeps_batch_and_channel_axes() {
        // batch of 1: only the time axis is squeezed, never channels
        let device = NdArrayDevice::default();
        let model  = SeNetV0::<NdArray>::new(&device);
        let x = Tensor::<NdArray, 3>::random([1, FREQ_BIN, EXPECTED_FRAMES], Distribution::Default, &device);
        let y = model.forward(x);
        assert_eq!(y.dims(), [1, FREQ_BIN]);
    }

    #[test]
    fn test_step_writes_prediction() {
        let device = NdArrayDevice::default();
        let model  = SeNetV0::<NdArray>::new(&device);
        let x = Tensor::<NdArray, 3>::random([2, FREQ_BIN, EXPECTED_FRAMES], Distribution::Default, &device);
        let mut ctx = StepContext::new(x);
        model.step(&mut ctx);
        assert_eq!(ctx.pred_y.expect("prediction written").dims(), [2, FREQ_BIN]);
    }
}
