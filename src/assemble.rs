//! Assembly of four circulant blocks into the Williamson array.
//!
//! Four `K×K` blocks `A, B, C, D` are tiled into a `4K×4K` matrix using the
//! fixed quaternionic sign/placement pattern:
//!
//! ```text
//!  A  B  C  D
//! -B  A -D  C
//! -C  D  A -B
//! -D -C  B  A
//! ```
//!
//! The pattern is independent of `K`. Assembly is pure arithmetic placement.

use ndarray::Array2;

use crate::block::CirculantBlock;
use crate::hadamard::Hadamard;

/// The Williamson array layout: `LAYOUT[block_row][block_col]` gives the
/// block index (0 = A .. 3 = D) and the sign applied to its entries.
const LAYOUT: [[(usize, i32); 4]; 4] = [
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    [(1, -1), (0, 1), (3, -1), (2, 1)],
    [(2, -1), (3, 1), (0, 1), (1, -1)],
    [(3, -1), (2, -1), (1, 1), (0, 1)],
];

/// Tile four blocks into the `4K×4K` Williamson array.
///
/// The blocks must be the raw (un-squared) blocks of a winning quadruple,
/// in the order found.
///
/// # Panics
///
/// Panics if the blocks do not all have the same order.
#[must_use]
pub fn assemble(blocks: [&CirculantBlock; 4]) -> Hadamard {
    let k = blocks[0].order();
    for block in &blocks[1..] {
        assert_eq!(block.order(), k, "all blocks must have the same order");
    }

    let order = 4 * k;
    let mut data = Array2::zeros((order, order));

    for (block_row, row_layout) in LAYOUT.iter().enumerate() {
        for (block_col, &(idx, sign)) in row_layout.iter().enumerate() {
            let block = blocks[idx].data();
            for r in 0..k {
                for c in 0..k {
                    data[[block_row * k + r, block_col * k + c]] = sign * block[[r, c]];
                }
            }
        }
    }

    Hadamard::new(data)
}
