//! Index-to-digit-path decomposition.
//!
//! An index is routed through the tree as a sequence of base-`B` digits.
//! The divmod loop naturally produces digits least-significant-first, while
//! traversal consumes them most-significant-first, so the encoder reverses
//! them once up front.

use crate::error::IndexError;

/// Number of addressable indices in a tree with branching factor `b` and
/// maximum depth `d`, i.e. `b^d` saturating at `usize::MAX`.
pub(crate) const fn tree_capacity(b: usize, d: usize) -> usize {
    let mut cap = 1usize;
    let mut level = 0;
    while level < d {
        cap = cap.saturating_mul(b);
        level += 1;
    }
    cap
}

/// An index decomposed into at most `D` base-`B` digits.
#[derive(Debug)]
pub(crate) struct DigitPath<const B: usize, const D: usize> {
    digits: [u8; D],
    len: usize,
}

impl<const B: usize, const D: usize> DigitPath<B, D> {
    /// Decompose `index` by repeated divmod by `B`.
    ///
    /// An index requiring more than `D` digits is a range error, never a
    /// silent truncation.
    pub(crate) fn encode(index: usize) -> Result<Self, IndexError> {
        let mut digits = [0u8; D];
        let mut len = 0;
        let mut rem = index;
        loop {
            if len == D {
                return Err(IndexError::Unrepresentable {
                    index,
                    max: tree_capacity(B, D) - 1,
                });
            }
            digits[len] = (rem % B) as u8;
            rem /= B;
            len += 1;
            if rem == 0 {
                break;
            }
        }
        digits[..len].reverse();
        Ok(Self { digits, len })
    }

    /// Digits in most-significant-first (consumption) order.
    pub(crate) fn digits(&self) -> &[u8] {
        &self.digits[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity() {
        assert_eq!(tree_capacity(3, 10), 59049);
        assert_eq!(tree_capacity(2, 3), 8);
        // saturates instead of wrapping for oversized parameters
        assert_eq!(tree_capacity(256, 64), usize::MAX);
    }

    #[test]
    fn small_indices() {
        let path = DigitPath::<3, 10>::encode(0).unwrap();
        assert_eq!(path.digits(), &[0]);

        let path = DigitPath::<3, 10>::encode(2).unwrap();
        assert_eq!(path.digits(), &[2]);

        // 5 = 1*3 + 2
        let path = DigitPath::<3, 10>::encode(5).unwrap();
        assert_eq!(path.digits(), &[1, 2]);
    }

    #[test]
    fn deep_index() {
        // 103 = 1*81 + 0*27 + 2*9 + 1*3 + 1
        let path = DigitPath::<3, 10>::encode(103).unwrap();
        assert_eq!(path.digits(), &[1, 0, 2, 1, 1]);
    }

    #[test]
    fn bound_rejection() {
        // 3^10 - 1 is the last encodable index
        assert!(DigitPath::<3, 10>::encode(59048).is_ok());
        assert_eq!(
            DigitPath::<3, 10>::encode(59049).unwrap_err(),
            IndexError::Unrepresentable {
                index: 59049,
                max: 59048
            }
        );
    }

    #[test]
    fn paths_are_debug_printable() {
        let rendered = format!("{:?}", DigitPath::<3, 10>::encode(103).unwrap());
        assert!(rendered.contains("DigitPath"));
    }
}
