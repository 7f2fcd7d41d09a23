//! Fast-traversal capability and the fast-range adapter.
//!
//! Some expressions can traverse themselves faster than the generic
//! element cursor can, typically by walking their storage directly
//! instead of going through the per-element accessor. The adapter here
//! presents a uniform iterable view that prefers that traversal when the
//! expression declares it, with the selection resolved entirely at
//! compile time through the expression's [`Order`](Expression::Order)
//! marker.

use std::ops::Deref;

use crate::cursor::ElemIter;
use crate::expr::Expression;

/// Specialized fast traversal, distinct from the ordinary element
/// traversal.
///
/// A fast traversal must visit the same logical elements in the same
/// logical order as [`Expression::iter`]; it is only allowed to bypass
/// the accessor indirection, not to change the sequence. An expression
/// whose storage order differs from its logical order must not implement
/// this trait.
pub trait FastTraversal: Expression {
    /// Iterator type of the specialized traversal.
    type FastIter<'a>: Iterator<Item = Self::Elem>
    where
        Self: 'a;

    /// Specialized traversal over all elements.
    fn fast_iter(&self) -> Self::FastIter<'_>;
}

// ============================================================================
// Capability probe
// ============================================================================

/// Compile-time traversal capability attached to an expression type.
///
/// Never inspected at runtime; `HAS_FAST_PATH` exists so generic code can
/// make other compile-time decisions off the same marker.
pub trait TraversalOrder {
    const HAS_FAST_PATH: bool;
}

/// The expression provides a [`FastTraversal`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FastOrder;

/// The expression only offers ordinary element traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementOrder;

impl TraversalOrder for FastOrder {
    const HAS_FAST_PATH: bool = true;
}

impl TraversalOrder for ElementOrder {
    const HAS_FAST_PATH: bool = false;
}

/// Traversal selection implemented on the capability markers: the fast
/// variant forwards to [`FastTraversal::fast_iter`], the plain variant to
/// the generic element cursor.
pub trait SelectTraversal<'a, E: Expression + 'a>: TraversalOrder {
    type Iter: Iterator<Item = E::Elem>;

    fn begin(expr: &'a E) -> Self::Iter;
}

impl<'a, E: Expression + 'a> SelectTraversal<'a, E> for ElementOrder {
    type Iter = ElemIter<'a, E>;

    #[inline]
    fn begin(expr: &'a E) -> Self::Iter {
        ElemIter::new(expr, 0)
    }
}

impl<'a, E: FastTraversal + 'a> SelectTraversal<'a, E> for FastOrder {
    type Iter = E::FastIter<'a>;

    #[inline]
    fn begin(expr: &'a E) -> Self::Iter {
        expr.fast_iter()
    }
}

// ============================================================================
// Fast-range adapter
// ============================================================================

/// Non-owning iterable view over an expression, preferring its fast
/// traversal when one is declared.
///
/// Constructed, iterated and discarded within a single traversal; derefs
/// back to the expression so callers can keep treating it as the original
/// value.
#[derive(Debug)]
pub struct FastRange<'a, E: ?Sized> {
    expr: &'a E,
}

impl<'a, E: Expression> FastRange<'a, E> {
    #[inline]
    pub fn new(expr: &'a E) -> Self {
        Self { expr }
    }

    /// Traversal selected by `E::Order`.
    #[inline]
    pub fn iter(&self) -> <E::Order as SelectTraversal<'a, E>>::Iter
    where
        E::Order: SelectTraversal<'a, E>,
    {
        <E::Order as SelectTraversal<'a, E>>::begin(self.expr)
    }
}

impl<E: ?Sized> Clone for FastRange<'_, E> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ?Sized> Copy for FastRange<'_, E> {}

impl<E: ?Sized> Deref for FastRange<'_, E> {
    type Target = E;

    #[inline]
    fn deref(&self) -> &E {
        self.expr
    }
}

impl<E: ?Sized> AsRef<E> for FastRange<'_, E> {
    #[inline]
    fn as_ref(&self) -> &E {
        self.expr
    }
}

impl<'a, E: Expression> IntoIterator for FastRange<'a, E>
where
    E::Order: SelectTraversal<'a, E>,
{
    type Item = E::Elem;
    type IntoIter = <E::Order as SelectTraversal<'a, E>>::Iter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        <E::Order as SelectTraversal<'a, E>>::begin(self.expr)
    }
}

impl<'r, 'a, E: Expression> IntoIterator for &'r FastRange<'a, E>
where
    E::Order: SelectTraversal<'a, E>,
{
    type Item = E::Elem;
    type IntoIter = <E::Order as SelectTraversal<'a, E>>::Iter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// make_fast_range
// ============================================================================

/// Conversion used by [`make_fast_range`]: expression references become
/// [`FastRange`] views, scalars pass through unchanged.
pub trait IntoFastRange {
    type Output;

    fn into_fast_range(self) -> Self::Output;
}

impl<'a, E: Expression> IntoFastRange for &'a E {
    type Output = FastRange<'a, E>;

    #[inline]
    fn into_fast_range(self) -> FastRange<'a, E> {
        FastRange::new(self)
    }
}

macro_rules! impl_scalar_passthrough {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoFastRange for $t {
                type Output = $t;

                #[inline]
                fn into_fast_range(self) -> $t {
                    self
                }
            }
        )*
    };
}

impl_scalar_passthrough!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl<T: Copy> IntoFastRange for num_complex::Complex<T> {
    type Output = Self;

    #[inline]
    fn into_fast_range(self) -> Self {
        self
    }
}

/// Preferred iterable view of `value`.
///
/// Expression references come back wrapped in a [`FastRange`]; scalar
/// inputs come back unchanged, so callers with broadcast semantics can
/// treat array and scalar arguments uniformly.
#[inline]
pub fn make_fast_range<V: IntoFastRange>(value: V) -> V::Output {
    value.into_fast_range()
}
