//! Compile-time cursor selection.
//!
//! Every kernel in an array runtime wants the same thing: the fastest
//! cursor that is still correct for the expression at hand. Contiguous
//! expressions get a span cursor with direct storage access; everything
//! else gets the generic element cursor. The choice is made entirely by
//! the expression's [`Layout`] marker, so a monomorphized kernel contains
//! no layout branch at all.

use crate::cursor::{DenseIter, DenseIterMut, ElemIter, ElemIterMut};
use crate::expr::{
    Contiguous, DenseExpression, DenseExpressionMut, Expression, ExpressionMut, Layout, Strided,
};

/// Cursor selection for read-only traversal, implemented on the layout
/// markers.
pub trait SelectCursor<'a, E: Expression + 'a>: Layout {
    /// Cursor type this layout resolves to.
    type Cursor;

    /// Cursor over `expr` positioned at flat index `at`.
    fn cursor(expr: &'a E, at: usize) -> Self::Cursor;
}

/// Cursor selection for mutable traversal.
pub trait SelectCursorMut<'a, E: ExpressionMut + 'a>: Layout {
    type CursorMut;

    fn cursor_mut(expr: &'a mut E, at: usize) -> Self::CursorMut;
}

impl<'a, E: Expression + 'a> SelectCursor<'a, E> for Strided {
    type Cursor = ElemIter<'a, E>;

    #[inline]
    fn cursor(expr: &'a E, at: usize) -> Self::Cursor {
        ElemIter::new(expr, at)
    }
}

impl<'a, E> SelectCursor<'a, E> for Contiguous
where
    E: DenseExpression + 'a,
{
    type Cursor = DenseIter<'a, E::Elem>;

    #[inline]
    fn cursor(expr: &'a E, at: usize) -> Self::Cursor {
        DenseIter::new(expr.as_slice(), at)
    }
}

impl<'a, E: ExpressionMut + 'a> SelectCursorMut<'a, E> for Strided {
    type CursorMut = ElemIterMut<'a, E>;

    #[inline]
    fn cursor_mut(expr: &'a mut E, at: usize) -> Self::CursorMut {
        ElemIterMut::new(expr, at)
    }
}

impl<'a, E> SelectCursorMut<'a, E> for Contiguous
where
    E: DenseExpressionMut + 'a,
{
    type CursorMut = DenseIterMut<'a, E::Elem>;

    #[inline]
    fn cursor_mut(expr: &'a mut E, at: usize) -> Self::CursorMut {
        DenseIterMut::new(E::as_mut_slice(expr), at)
    }
}

/// Read-only cursor over `expr` at flat index `at`, with the cursor type
/// resolved by `E::Layout`.
#[inline]
pub fn make_cursor<'a, E>(expr: &'a E, at: usize) -> <E::Layout as SelectCursor<'a, E>>::Cursor
where
    E: Expression + 'a,
    E::Layout: SelectCursor<'a, E>,
{
    <E::Layout as SelectCursor<'a, E>>::cursor(expr, at)
}

/// Mutable cursor over `expr` at flat index `at`.
///
/// Unlike the read-only side there is no mutable begin/end pair: the
/// cursor holds the unique borrow, and its end bound travels with it.
#[inline]
pub fn make_cursor_mut<'a, E>(
    expr: &'a mut E,
    at: usize,
) -> <E::Layout as SelectCursorMut<'a, E>>::CursorMut
where
    E: ExpressionMut + 'a,
    E::Layout: SelectCursorMut<'a, E>,
{
    <E::Layout as SelectCursorMut<'a, E>>::cursor_mut(expr, at)
}

/// Begin/end cursor pair over `expr`; the end cursor sits at index
/// `len()` and must only be compared against, never dereferenced.
#[inline]
pub fn cursor_pair<'a, E>(
    expr: &'a E,
) -> (
    <E::Layout as SelectCursor<'a, E>>::Cursor,
    <E::Layout as SelectCursor<'a, E>>::Cursor,
)
where
    E: Expression + 'a,
    E::Layout: SelectCursor<'a, E>,
{
    (make_cursor(expr, 0), make_cursor(expr, expr.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{DenseExpr, DenseExprMut, StridedExpr, StridedExprMut};

    #[test]
    fn test_contiguous_resolves_to_span_cursor() {
        let data = [1.0, 5.0, 3.0, 2.0, 4.0];
        let expr = DenseExpr::new(&data);
        // The returned type is DenseIter; element order is flat order.
        let cursor: DenseIter<'_, f64> = make_cursor(&expr, 0);
        assert_eq!(cursor.collect::<Vec<_>>(), vec![1.0, 5.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_strided_resolves_to_elem_cursor() {
        let buffer = [1.0, 0.0, 5.0, 0.0, 3.0, 0.0, 2.0, 0.0, 4.0];
        let expr = StridedExpr::new(&buffer, [5], [2], 0).unwrap();
        let cursor: ElemIter<'_, _> = make_cursor(&expr, 0);
        assert_eq!(cursor.collect::<Vec<_>>(), vec![1.0, 5.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_cursor_pair_difference_is_len() {
        let data = [7u32, 8, 9];
        let expr = DenseExpr::new(&data);
        let (begin, end) = cursor_pair(&expr);
        assert_eq!(end - begin, 3);
        assert_eq!(begin + 3, end);
    }

    #[test]
    fn test_mutable_dispatch_contiguous() {
        let mut data = [1, 2, 3, 4];
        let mut expr = DenseExprMut::new(&mut data);
        let mut cursor = make_cursor_mut(&mut expr, 0);
        while let Some(x) = cursor.next_mut() {
            *x = -*x;
        }
        assert_eq!(data, [-1, -2, -3, -4]);
    }

    #[test]
    fn test_mutable_dispatch_strided() {
        let mut buffer = [1, 9, 2, 9, 3];
        let mut expr = StridedExprMut::new(&mut buffer, [3], [2], 0).unwrap();
        let mut cursor = make_cursor_mut(&mut expr, 0);
        while let Some(x) = cursor.next_mut() {
            *x *= 100;
        }
        assert_eq!(buffer, [100, 9, 200, 9, 300]);
    }
}
