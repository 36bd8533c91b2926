// ============================================================
// Variant Registry
// ============================================================
// The set of architectures is closed and known ahead of time,
// so variant selection is an enum, not trait objects. A harness
// deserialises a NetworkConfig, calls `init`, and drives the
// resulting Network through `step` without caring which variant
// it holds.

use burn::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ml::context::StepContext;
use crate::ml::senet_v0::SeNetV0;
use crate::ml::senet_v1::{SeNetV1, SeNetV1Config};
use crate::ml::senet_v2::{SeNetV2, SeNetV2Config};

/// Selects and dimensions one architecture.
///
/// Serialises as externally tagged JSON, e.g. `"V0"` or
/// `{"V1": {"freq_bin": 257, ...}}`. V0 carries no fields because its
/// stack is fixed by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NetworkConfig {
    V0,
    V1(SeNetV1Config),
    V2(SeNetV2Config),
}

impl NetworkConfig {
    /// Build the selected architecture on `device`.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Network<B> {
        match self {
            Self::V0      => Network::V0(SeNetV0::new(device)),
            Self::V1(cfg) => Network::V1(cfg.init(device)),
            Self::V2(cfg) => Network::V2(cfg.init(device)),
        }
    }
}

/// Any of the three architectures behind one forward surface.
#[derive(Module, Debug)]
pub enum Network<B: Backend> {
    V0(SeNetV0<B>),
    V1(SeNetV1<B>),
    V2(SeNetV2<B>),
}

impl<B: Backend> Network<B> {
    /// Forward shape: `[batch, freq_bin, time]` → `[batch, freq_bin]`.
    pub fn forward(&self, x: Tensor<B, 3>) -> Tensor<B, 2> {
        match self {
            Self::V0(m) => m.forward(x),
            Self::V1(m) => m.forward(x),
            Self::V2(m) => m.forward(x),
        }
    }

    /// Context protocol: read `x`, write `pred_y`.
    pub fn step(&self, ctx: &mut StepContext<B>) {
        ctx.pred_y = Some(self.forward(ctx.x.clone()));
    }
}
