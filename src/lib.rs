//! Iteration and static-dispatch core for N-dimensional array
//! expressions.
//!
//! Higher-level array operations (element-wise maps, reductions,
//! elementwise math functions) need to walk array-like values without
//! caring, at the call site, whether the data is contiguous, strided, or
//! loaded lane-wise for vector hardware. This crate provides that layer:
//!
//! - A uniform [`Expression`] contract: a flat index range `[0, N)`, a
//!   per-element accessor, and optional lane and fast-traversal
//!   capabilities.
//! - A family of random-access cursors ([`ElemIter`], [`ElemIterMut`],
//!   [`DenseIter`], [`DenseIterMut`], [`LaneIter`]) over that contract.
//! - A dispatcher ([`make_cursor`], [`make_cursor_mut`], [`cursor_pair`])
//!   that resolves, per expression type and at compile time, to either a
//!   direct span cursor or the generic element cursor.
//! - A fast-range adapter ([`FastRange`], [`make_fast_range`]) that
//!   prefers an expression's specialized traversal when it declares one,
//!   and passes scalars through untouched.
//!
//! All selection happens through marker types fixed at expression
//! definition time ([`Contiguous`] / [`Strided`], [`FastOrder`] /
//! [`ElementOrder`]); monomorphized traversal loops contain no layout
//! branches.
//!
//! # Example
//!
//! ```rust
//! use ndexpr_iter::{cursor_pair, make_cursor, DenseExpr, StridedExpr};
//!
//! // Contiguous data: the dispatcher hands out a span cursor.
//! let data = [1.0, 5.0, 3.0, 2.0, 4.0];
//! let dense = DenseExpr::new(&data);
//! let (begin, end) = cursor_pair(&dense);
//! assert_eq!(end - begin, 5);
//! assert_eq!(begin.collect::<Vec<_>>(), vec![1.0, 5.0, 3.0, 2.0, 4.0]);
//!
//! // The same values stored at stride 2: the generic element cursor
//! // produces the identical sequence.
//! let buffer = [1.0, 0.0, 5.0, 0.0, 3.0, 0.0, 2.0, 0.0, 4.0];
//! let strided = StridedExpr::new(&buffer, [5], [2], 0).unwrap();
//! let elems: Vec<f64> = make_cursor(&strided, 0).collect();
//! assert_eq!(elems, vec![1.0, 5.0, 3.0, 2.0, 4.0]);
//! ```
//!
//! Cursors never own expression data; an expression must outlive every
//! cursor or range built over it, which the borrow checker enforces for
//! the types in this crate.

mod cursor;
mod dispatch;
mod expr;
mod fast_range;
mod view;

// ============================================================================
// Expression contract
// ============================================================================
pub use expr::{
    Contiguous, DenseExpression, DenseExpressionMut, Expression, ExpressionMut, LaneExpr, Layout,
    Strided,
};

// ============================================================================
// Cursors
// ============================================================================
pub use cursor::{DenseIter, DenseIterMut, ElemIter, ElemIterMut, LaneIter};

// ============================================================================
// Cursor dispatch
// ============================================================================
pub use dispatch::{cursor_pair, make_cursor, make_cursor_mut, SelectCursor, SelectCursorMut};

// ============================================================================
// Fast traversal
// ============================================================================
pub use fast_range::{
    make_fast_range, ElementOrder, FastOrder, FastRange, FastTraversal, IntoFastRange,
    SelectTraversal, TraversalOrder,
};

// ============================================================================
// Reference views
// ============================================================================
pub use view::{DenseExpr, DenseExprMut, StridedExpr, StridedExprMut};

// ============================================================================
// Error types
// ============================================================================

/// Errors reported when constructing a view over backing storage.
#[derive(Debug, thiserror::Error)]
pub enum ExprError {
    /// A reachable element position falls outside the backing slice.
    #[error("position {position} outside buffer of length {len}")]
    OutOfBounds { position: isize, len: usize },

    /// Integer overflow while computing an element position.
    #[error("offset overflow while computing element position")]
    OffsetOverflow,
}

/// Result type for view construction.
pub type Result<T> = std::result::Result<T, ExprError>;
