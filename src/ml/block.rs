// ============================================================
// Building Blocks
// ============================================================
// CnnBlock is the unit the parametrised variants are assembled
// from: Conv1d → BatchNorm → LeakyReLU(0.1). DownStage pairs a
// length-preserving CnnBlock with a stride-2 MaxPool, the
// repeated downsampling step of SeNetV1/SeNetV2.
//
// Reference: Ioffe & Szegedy (2015) Batch Normalization
//            Maas et al. (2013) Rectifier Nonlinearities

use burn::{
    nn::{
        conv::{Conv1d, Conv1dConfig},
        pool::{MaxPool1d, MaxPool1dConfig},
        BatchNorm, BatchNormConfig, LeakyRelu, LeakyReluConfig, PaddingConfig1d,
    },
    prelude::*,
};

use crate::domain::shape::LenOp;

// ─── CnnBlock ─────────────────────────────────────────────────────────────────
#[derive(Config, Debug)]
pub struct CnnBlockConfig {
    /// Input channel count
    pub channel_in: usize,
    /// Output channel count
    pub channel_out: usize,
    #[config(default = 3)]
    pub kernel_size: usize,
    #[config(default = 1)]
    pub dilation: usize,
    #[config(default = 1)]
    pub stride: usize,
    #[config(default = 0)]
    pub padding: usize,
}

impl CnnBlockConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> CnnBlock<B> {
        let conv = Conv1dConfig::new(self.channel_in, self.channel_out, self.kernel_size)
            .with_stride(self.stride)
            .with_padding(PaddingConfig1d::Explicit(self.padding))
            .with_dilation(self.dilation)
            .init(device);
        let norm       = BatchNormConfig::new(self.channel_out).init(device);
        let activation = LeakyReluConfig::new().with_negative_slope(0.1).init();
        CnnBlock { conv, norm, activation }
    }

    /// The length transformation this block applies.
    pub fn len_op(&self) -> LenOp {
        LenOp::Conv {
            kernel:   self.kernel_size,
            stride:   self.stride,
            padding:  self.padding,
            dilation: self.dilation,
        }
    }
}

/// Conv1d → BatchNorm → LeakyReLU(negative slope 0.1).
///
/// Shape: `[B, channel_in, L]` → `[B, channel_out, L']` with
/// `L' = (L + 2·padding − dilation·(kernel−1) − 1) / stride + 1`.
/// Deterministic given fixed parameters; train/eval mode only
/// affects which batch-norm statistics are used.
#[derive(Module, Debug)]
pub struct CnnBlock<B: Backend> {
    pub conv:       Conv1d<B>,
    pub norm:       BatchNorm<B, 1>,
    pub activation: LeakyRelu,
}

impl<B: Backend> CnnBlock<B> {
    pub fn forward(&self, x: Tensor<B, 3>) -> Tensor<B, 3> {
        let x = self.conv.forward(x);
        let x = self.norm.forward(x);
        self.activation.forward(x)
    }
}

// ─── DownStage ────────────────────────────────────────────────────────────────
/// One downsampling step of the parametrised encoders:
/// a length-preserving CnnBlock followed by a stride-2 MaxPool.
#[derive(Module, Debug)]
pub struct DownStage<B: Backend> {
    pub block: CnnBlock<B>,
    pub pool:  MaxPool1d,
}

impl<B: Backend> DownStage<B> {
    /// Build a stage for `hidden_dim` channels. The conv keeps the
    /// length (padding kernel/2); the pool roughly halves it.
    pub fn new(hidden_dim: usize, kernel_size: usize, device: &B::Device) -> Self {
        let block = CnnBlockConfig::new(hidden_dim, hidden_dim)
            .with_kernel_size(kernel_size)
            .with_padding(kernel_size / 2)
            .init(device);
        let pool = MaxPool1dConfig::new(kernel_size)
            .with_stride(2)
            .with_padding(PaddingConfig1d::Explicit(kernel_size / 2))
            .init();
        Self { block, pool }
    }

    pub fn forward(&self, x: Tensor<B, 3>) -> Tensor<B, 3> {
        self.pool.forward(self.block.forward(x))
    }
}

/// Length transformation of one DownStage, for the shape walk.
pub fn down_stage_len_ops(kernel: usize) -> [LenOp; 2] {
    [
        LenOp::Conv { kernel, stride: 1, padding: kernel / 2, dilation: 1 },
        LenOp::Pool { kernel, stride: 2, padding: kernel / 2 },
    ]
}
