// ============================================================
// 1-D Shape Arithmetic
// ============================================================
// The length a Conv1d or MaxPool1d produces from a given input
// length. Every channel/kernel choice in the model layer is
// dimensioned with these formulas; keeping them here means the
// stage-by-stage length walks in the model docs are checkable
// with plain unit tests.
//
// Convolution (and max pooling, which follows the same
// arithmetic with dilation 1):
//
//   out = floor((len + 2·padding − dilation·(kernel−1) − 1) / stride) + 1

/// One length-changing operation in a sequential 1-D pipeline.
///
/// The set of operation kinds is closed: spectral pipelines here
/// are built from convolutions and max pooling only. Activations
/// and batch norm never change the length, so they don't appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LenOp {
    /// 1-D convolution
    Conv {
        kernel: usize,
        stride: usize,
        padding: usize,
        dilation: usize,
    },
    /// 1-D max pooling
    Pool {
        kernel: usize,
        stride: usize,
        padding: usize,
    },
}

impl LenOp {
    /// Output length this operation produces from `len` input steps.
    pub fn out_len(&self, len: usize) -> usize {
        match *self {
            Self::Conv { kernel, stride, padding, dilation } => {
                conv1d_out_len(len, kernel, stride, padding, dilation)
            }
            Self::Pool { kernel, stride, padding } => {
                conv1d_out_len(len, kernel, stride, padding, 1)
            }
        }
    }
}

/// Output length of a 1-D convolution.
pub fn conv1d_out_len(
    len: usize,
    kernel: usize,
    stride: usize,
    padding: usize,
    dilation: usize,
) -> usize {
    (len + 2 * padding - dilation * (kernel - 1) - 1) / stride + 1
}

/// Fold a pipeline of length operations over an input length.
pub fn pipeline_out_len(ops: &[LenOp], input_len: usize) -> usize {
    ops.iter().fold(input_len, |len, op| op.out_len(len))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpadded_conv_shrinks_by_kernel_minus_one() {
        // 128 steps through a kernel-9 conv leave 120
        assert_eq!(conv1d_out_len(128, 9, 1, 0, 1), 120);
    }

    #[test]
    fn test_symmetric_padding_preserves_length() {
        // kernel 9 with padding 4 is length-preserving
        assert_eq!(conv1d_out_len(52, 9, 1, 4, 1), 52);
        // kernel 3 with padding 1 likewise
        assert_eq!(conv1d_out_len(64, 3, 1, 1, 1), 64);
    }

    #[test]
    fn test_pointwise_conv_is_identity_on_length() {
        assert_eq!(conv1d_out_len(128, 1, 1, 0, 1), 128);
        assert_eq!(conv1d_out_len(1, 1, 1, 0, 1), 1);
    }

    #[test]
    fn test_stride_two_pooling_halves() {
        // kernel 2, stride 2 — plain halving
        assert_eq!(LenOp::Pool { kernel: 2, stride: 2, padding: 0 }.out_len(120), 60);
        // kernel 3, stride 2, padding 1 — halves even lengths too
        let pool = LenOp::Pool { kernel: 3, stride: 2, padding: 1 };
        assert_eq!(pool.out_len(128), 64);
        assert_eq!(pool.out_len(2), 1);
    }

    #[test]
    fn test_dilation_widens_receptive_field() {
        // dilation 2 over kernel 3 spans 5 steps
        assert_eq!(conv1d_out_len(10, 3, 1, 0, 2), 6);
    }

    #[test]
    fn test_pipeline_fold() {
        let ops = [
            LenOp::Conv { kernel: 9, stride: 1, padding: 0, dilation: 1 },
            LenOp::Pool { kernel: 2, stride: 2, padding: 0 },
        ];
        assert_eq!(pipeline_out_len(&ops, 128), 60);
        assert_eq!(pipeline_out_len(&[], 128), 128);
    }
}
