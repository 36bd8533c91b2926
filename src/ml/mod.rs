// ============================================================
// ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code.
// No other layer imports from burn directly — only this one.
//
// What's in this layer:
//
//   context.rs  — StepContext: the record passed through a
//                 forward step (`x` in, `pred_y` out)
//
//   block.rs    — CnnBlock (Conv1d → BatchNorm → LeakyReLU)
//                 and DownStage (CnnBlock → MaxPool), the
//                 building blocks of the parametrised variants
//
//   senet_v0.rs — SeNetV0, the fixed hand-unrolled pipeline
//   senet_v1.rs — SeNetV1, parametrised encoder (1×1 input)
//   senet_v2.rs — SeNetV2, as V1 with a full-kernel input
//
//   registry.rs — closed enum over the three variants plus the
//                 serialisable config that selects one
//
// All models are generic over `B: Backend`; parameters are only
// ever mutated by an external training loop (batch-norm running
// statistics update during autodiff-backend forward passes).
//
// Reference: Burn Book §3 (Building Blocks)
//            Ioffe & Szegedy (2015) Batch Normalization

/// Forward-step context record
pub mod context;

/// Conv + norm + activation building blocks
pub mod block;

/// Fixed 10-stage pipeline variant
pub mod senet_v0;

/// Parametrised encoder, point-wise input layer
pub mod senet_v1;

/// Parametrised encoder, full-kernel input layer
pub mod senet_v2;

/// Variant selection and construction
pub mod registry;
