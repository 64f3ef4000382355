//! Commitment group capability
//!
//! An opaque algebraic group with a bilinear pairing, the only interface the
//! scheme core has to the curve backend. The adaptor is symmetric: every
//! value is simultaneously representable on both pairing sides, so one
//! commitment can be paired on whichever side a verification equation needs.

use core::fmt::Debug;

use num_bigint::BigUint;

use crate::field::FieldElement;

/// An element of the commitment group.
///
/// Required laws: the usual abelian group axioms, scalar multiplication
/// linear in the field (`(a + b)·P == a·P + b·P`), and bilinearity of the
/// pairing (`pair(a·P, b·Q) == pair(P, Q)^(a·b)` in the target group).
pub trait CommitmentGroup: Clone + PartialEq + Eq + Debug + Sized {
    /// The target group the pairing maps into.
    type Target: TargetGroup;

    /// Order of the scalar field acting on the group. One scheme instance
    /// builds its [`Field`](crate::field::Field) from this, tying field and
    /// group together explicitly instead of through curated singletons.
    fn scalar_order() -> BigUint;

    /// The fixed generator, usable on either pairing side.
    fn generator() -> Self;

    /// The group identity.
    fn identity() -> Self;

    fn add(&self, rhs: &Self) -> Self;

    fn neg(&self) -> Self;

    /// Scalar multiplication by a field element.
    fn scale(&self, scalar: &FieldElement) -> Self;

    /// The bilinear pairing `e(lhs, rhs)`.
    fn pair(lhs: &Self, rhs: &Self) -> Self::Target;
}

/// A value in the pairing's target group.
///
/// Verification equations only ever compare target values and multiply them
/// together, so equality and the group operation are all that is required.
pub trait TargetGroup: Clone + PartialEq + Eq + Debug {
    /// The target group operation (written multiplicatively in the pairing
    /// equations).
    fn combine(&self, rhs: &Self) -> Self;
}
