// ============================================================
// SeNetV2 — parametrised encoder, full-kernel input
// ============================================================
// Identical to SeNetV1 except the input layer: the channel
// expansion uses the full kernel with symmetric padding, so the
// very first layer already mixes neighbouring frames instead of
// acting per frame. Everything after it is the same.

use burn::prelude::*;

use crate::domain::shape::{pipeline_out_len, LenOp};
use crate::ml::block::{down_stage_len_ops, CnnBlock, CnnBlockConfig, DownStage};
use crate::ml::context::StepContext;

#[derive(Config, Debug)]
pub struct SeNetV2Config {
    /// Frequency bins in and out
    #[config(default = 257)]
    pub freq_bin: usize,
    /// Channel width of the encoder stages
    #[config(default = 768)]
    pub hidden_dim: usize,
    /// Number of downsampling stages
    #[config(default = 7)]
    pub num_layer: usize,
    /// Kernel size of every layer, input included
    #[config(default = 3)]
    pub kernel_size: usize,
}

impl SeNetV2Config {
    pub fn init<B: Backend>(&self, device: &B::Device) -> SeNetV2<B> {
        // Full-kernel channel expansion, length-preserving via padding
        let input_layer = CnnBlockConfig::new(self.freq_bin, self.hidden_dim)
            .with_kernel_size(self.kernel_size)
            .with_padding(self.kernel_size / 2)
            .init(device);

        let down_stages = (0..self.num_layer)
            .map(|_| DownStage::new(self.hidden_dim, self.kernel_size, device))
            .collect();

        let output_layer = CnnBlockConfig::new(self.hidden_dim, self.freq_bin)
            .with_kernel_size(self.kernel_size)
            .with_padding(self.kernel_size / 2)
            .init(device);

        let model = SeNetV2 { input_layer, down_stages, output_layer };
        tracing::debug!(
            "SeNetV2 ready: {} down stages, hidden_dim={}, {} parameters",
            self.num_layer,
            self.hidden_dim,
            model.num_params(),
        );
        model
    }

    /// The encoder's length transformations, in order.
    pub fn len_ops(&self) -> Vec<LenOp> {
        let mut ops = vec![LenOp::Conv {
            kernel:   self.kernel_size,
            stride:   1,
            padding:  self.kernel_size / 2,
            dilation: 1,
        }];
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

/// SeNetV1 with frame mixing from the first layer on.
///
/// Forward shape: `[batch, freq_bin, L]` → `[batch, freq_bin]`.
#[derive(Module, Debug)]
pub struct SeNetV2<B: Backend> {
    pub input_layer:  CnnBlock<B>,
    pub down_stages:  Vec<DownStage<B>>,
    pub output_layer: CnnBlock<B>,
}

impl<B: Backend> SeNetV2<B> {
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
