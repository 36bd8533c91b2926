// ============================================================
// Domain Layer
// ============================================================
// Pure Rust only — no Burn types, no file I/O. Holds the shape
// arithmetic the model layer is dimensioned by, so the numbers
// in the architecture docs can be checked without a tensor
// backend.

// 1-D convolution / pooling output-length arithmetic
pub mod shape;
