// ============================================================
// SeNetV1 — parametrised encoder, point-wise input
// ============================================================
// A 1×1 convolution lifts the frequency bins into the hidden
// width without mixing neighbouring frames, then `num_layer`
// DownStages roughly halve the time axis each, and a final
// CnnBlock projects back to `freq_bin` channels.
//
// With the defaults (257 bins, hidden 768, 7 stages, kernel 3)
// the time axis runs 128 → 64 → 32 → 16 → 8 → 4 → 2 → 1.

use burn::prelude::*;

use crate::domain::shape::{pipeline_out_len, LenOp};
use crate::ml::block::{down_stage_len_ops, CnnBlock, CnnBlockConfig, DownStage};
use crate::ml::context::StepContext;

#[derive(Config, Debug)]
pub struct SeNetV1Config {
    /// Frequency bins in and out
    #[config(default = 257)]
    pub freq_bin: usize,
    /// Channel width of the encoder stages
    #[config(default = 768)]
    pub hidden_dim: usize,
    /// Number of downsampling stages
    #[config(default = 7)]
    pub num_layer: usize,
    /// Kernel size of every non-input layer
    #[config(default = 3)]
    pub kernel_size: usize,
}

impl SeNetV1Config {
    pub fn init<B: Backend>(&self, device: &B::Device) -> SeNetV1<B> {
        // Point-wise channel expansion, length-preserving
        let input_layer = CnnBlockConfig::new(self.freq_bin, self.hidden_dim)
            .with_kernel_size(1)
            .init(device);

        let down_stages = (0..self.num_layer)
            .map(|_| DownStage::new(self.hidden_dim, self.kernel_size, device))
            .collect();

        let output_layer = CnnBlockConfig::new(self.hidden_dim, self.freq_bin)
            .with_kernel_size(self.kernel_size)
            .with_padding(self.kernel_size / 2)
            .init(device);

        let model = SeNetV1 { input_layer, down_stages, output_layer };
        tracing::debug!(
            "SeNetV1 ready: {} down stages, hidden_dim={}, {} parameters",
            self.num_layer,
            self.hidden_dim,
            model.num_params(),
        );
        model
    }

    /// The encoder's length transformations, in order.
    pub fn len_ops(&self) -> Vec<LenOp> {
        let mut ops = vec![LenOp::Conv { kernel: 1, stride: 1, padding: 0, dilation: 1 }];
        for _ in 0..self.num_layer {
            ops.extend(down_stage_len_ops(self.kernel_size));
        }
        ops.push(LenOp::Conv {
            kernel:   self.kernel_size,
            stride:   1,
            padding:  self.kernel_size / 2,
            dilation: 1,
        });
        ops
    }

    /// Time steps left after the encoder, given `input_len` frames.
    pub fn output_len(&self, input_len: usize) -> usize {
        pipeline_out_len(&self.len_ops(), input_len)
    }
}

/// Parametrised downsampling encoder.
///
/// Forward shape: `[batch, freq_bin, L]` → `[batch, freq_bin]`, for
/// `L` that the stages collapse to a single step (128 with defaults).
#[derive(Module, Debug)]
pub struct SeNetV1<B: Backend> {
    pub input_layer:  CnnBlock<B>,
    pub down_stages:  Vec<DownStage<B>>,
    pub output_layer: CnnBlock<B>,
}

impl<B: Backend> SeNetV1<B> {
    pub fn forward(&self, x: Tensor<B, 3>) -> Tensor<B, 2> {
        let mut x = self.input_layer.forward(x);
        for stage in &self.down_stages {
            x = stage.forward(x);
        }
        let x = self.output_layer.forward(x); // [batch, freq_bin, 1]
        x.squeeze(2) // [batch, freq_bin]
    }

    /// Context protocol: read `x`, write `pred_y`.
    pub fn step(&self, ctx: &mut StepContext<B>) {
        ctx.pred_y = Some(self.forward(ctx.x.clone()));
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::ndarray::NdArrayDevice;
    use burn::backend::NdArray;
    use burn::tensor::Distribution;

    #[test]
    fn test_default_length_walk() {
        let cfg = SeNetV1Config::new();
        assert_eq!(cfg.freq_bin, 257);
        assert_eq!(cfg.hidden_dim, 768);
        assert_eq!(cfg.num_layer, 7);
        assert_eq!(cfg.kernel_size, 3);
        // 128 halves seven times to 1
        assert_eq!(cfg.output_len(128), 1);
    }

    #[test]
    fn test_default_forward_shape() {
        let device = NdArrayDevice::default();
        let model  = SeNetV1Config::new().init::<NdArray>(&device);
        let x = Tensor::<NdArray, 3>::random([4, 257, 128], Distribution::Default, &device);
        let y = model.forward(x);
        assert_eq!(y.dims(), [4, 257]);
    }

    #[test]
    fn test_num_layer_scales_stages_not_channels() {
        // Fewer stages, smaller hidden width: channels still end at freq_bin
        let device = NdArrayDevice::default();
        let cfg = SeNetV1Config::new()
            .with_freq_bin(13)
            .with_hidden_dim(16)
            .with_num_layer(2);
        let model = cfg.init::<NdArray>(&device);
        assert_eq!(model.down_stages.len(), 2);
        // 4 halves twice to 1
        assert_eq!(cfg.output_len(4), 1);
        let x = Tensor::<NdArray, 3>::random([3, 13, 4], Distribution::Default, &device);
        assert_eq!(model.forward(x).dims(), [3, 13]);
    }

    #[test]
    fn test_eval_forward_is_deterministic() {
        // Non-autodiff backend: batch norm reads running statistics and
        // updates nothing, so two passes over one input must agree.
        let device = NdArrayDevice::default();
        let model  = SeNetV1Config::new()
            .with_freq_bin(9)
            .with_hidden_dim(12)
            .with_num_layer(3)
            .init::<NdArray>(&device);
        let x = Tensor::<NdArray, 3>::random([2, 9, 8], Distribution::Default, &device);
        let a = model.forward(x.clone());
        let b = model.forward(x);
        assert_eq!(a.into_data(), b.into_data());
    }

    #[test]
    fn test_step_writes_prediction() {
        let device = NdArrayDevice::default();
        let model  = SeNetV1Config::new()
            .with_freq_bin(5)
            .with_hidden_dim(8)
            .with_num_layer(1)
            .init::<NdArray>(&device);
        let x = Tensor::<NdArray, 3>::random([2, 5, 2], Distribution::Default, &device);
        let mut ctx = StepContext::new(x);
        model.step(&mut ctx);
        assert_eq!(ctx.pred_y.expect("prediction written").dims(), [2, 5]);
    }
}
