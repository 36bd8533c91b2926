// ============================================================
// senet — spectral feature regression architectures
// ============================================================
// CNN model definitions that map a sequence of spectral frames
// (batch, freq_bin, time) to one feature vector per item
// (batch, freq_bin). Three variants share one building block:
//
//   CnnBlock — Conv1d → BatchNorm → LeakyReLU
//   SeNetV0  — fixed, hand-unrolled 10-stage pipeline
//   SeNetV1  — parametrised encoder, point-wise input layer
//   SeNetV2  — as V1, full-kernel input layer
//
// Layer map (outer layers depend on inner, never the reverse):
//
//   domain — pure shape arithmetic, no framework types
//   ml     — all Burn-specific code: context, blocks, models
//   infra  — architecture-config persistence (JSON)
//
// Training, data loading, and weight checkpointing live in an
// external harness; this crate is the forward graph only.

/// Pure 1-D convolution / pooling shape arithmetic
pub mod domain;

/// Burn model definitions — context, conv block, the three variants
pub mod ml;

/// Architecture-config persistence
pub mod infra;

pub use infra::config_store::ConfigStore;
pub use ml::block::{CnnBlock, CnnBlockConfig};
pub use ml::context::StepContext;
pub use ml::registry::{Network, NetworkConfig};
pub use ml::senet_v0::SeNetV0;
pub use ml::senet_v1::{SeNetV1, SeNetV1Config};
pub use ml::senet_v2::{SeNetV2, SeNetV2Config};
