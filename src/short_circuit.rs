//! # Short-Circuit Module
//!
//! The early-return mechanism: a scope probes a container and either keeps
//! its payload or immediately returns the propagated absence/failure to its
//! own caller.
//!
//! The construct is structural. [`probe!`] expands to an ordinary
//! conditional `return`, and [`attempt!`] establishes the escape point as a
//! closure boundary, so a short circuit is plain control flow: values with
//! destructors that live between the probe site and the scope entry are
//! dropped normally on every exit path.
//!
//! ## Example
//!
//! ```rust
//! use peel::{probe, Maybe};
//!
//! fn first_even(a: Maybe<i32>, b: Maybe<i32>) -> Maybe<i32> {
//!     let a = probe!(a); // returns Maybe::None to the caller on absence
//!     let b = probe!(b);
//!     if a % 2 == 0 {
//!         Maybe::Some(a)
//!     } else {
//!         Maybe::Some(b)
//!     }
//! }
//!
//! assert_eq!(first_even(Maybe::Some(3), Maybe::None), Maybe::None);
//! assert_eq!(first_even(Maybe::Some(4), Maybe::Some(5)), Maybe::Some(4));
//! ```
//!
//! Probing stays inside one container family: a `Maybe` probe needs a scope
//! that yields `Maybe`, an `Outcome` probe a scope that yields `Outcome`
//! (with `From`-widening of the error type). `ok_or` and the projections
//! are the explicit bridges between the families.

use core::convert::Infallible;
use core::ops::ControlFlow;

use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// A container that can be probed for early return.
///
/// `probe` splits the container into a two-way branch: `Continue` carries
/// the extracted payload, `Break` carries the residual — the container with
/// its payload type narrowed to [`Infallible`], so a residual can only ever
/// hold the absence/failure side.
pub trait ShortCircuit {
    /// What a successful probe yields.
    type Payload;
    /// What an unsuccessful probe propagates.
    type Residual;

    /// Extracts the payload or produces the residual to propagate.
    fn probe(self) -> ControlFlow<Self::Residual, Self::Payload>;
}

/// A scope return type that can absorb a propagated residual.
pub trait Escape<R> {
    /// Rebuilds the scope's return value from a residual.
    fn escape(residual: R) -> Self;
}

impl<T> ShortCircuit for Maybe<T> {
    type Payload = T;
    type Residual = Maybe<Infallible>;

    fn probe(self) -> ControlFlow<Maybe<Infallible>, T> {
        match self {
            Maybe::Some(value) => ControlFlow::Continue(value),
            Maybe::None => ControlFlow::Break(Maybe::None),
        }
    }
}

impl<T> Escape<Maybe<Infallible>> for Maybe<T> {
    fn escape(_residual: Maybe<Infallible>) -> Self {
        Maybe::None
    }
}

impl<T, E> ShortCircuit for Outcome<T, E> {
    type Payload = T;
    type Residual = Outcome<Infallible, E>;

    fn probe(self) -> ControlFlow<Outcome<Infallible, E>, T> {
        match self {
            Outcome::Ok(value) => ControlFlow::Continue(value),
            Outcome::Err(error) => ControlFlow::Break(Outcome::Err(error)),
        }
    }
}

impl<T, E, F: From<E>> Escape<Outcome<Infallible, E>> for Outcome<T, F> {
    fn escape(residual: Outcome<Infallible, E>) -> Self {
        match residual {
            Outcome::Err(error) => Outcome::Err(F::from(error)),
            Outcome::Ok(never) => match never {},
        }
    }
}

/// Probes a container, early-returning the propagated absence/failure.
///
/// On `Some`/`Ok` the macro evaluates to the payload and the scope
/// continues. On `None`/`Err` it returns the residual — absorbed into the
/// enclosing scope's return type via [`Escape`] — and nothing after the
/// probe site runs.
#[macro_export]
macro_rules! probe {
    ($container:expr) => {
        match $crate::short_circuit::ShortCircuit::probe($container) {
            ::core::ops::ControlFlow::Continue(payload) => payload,
            ::core::ops::ControlFlow::Break(residual) => {
                return $crate::short_circuit::Escape::escape(residual)
            }
        }
    };
}

/// Establishes an escape scope without leaving the current function.
///
/// The block runs immediately; every [`probe!`] inside it short-circuits to
/// the block's value instead of the enclosing function's return. The first
/// form declares the scope's return payload type, like a function signature
/// would:
///
/// ```rust
/// use peel::{attempt, probe, Maybe};
///
/// let halved = attempt!(Maybe<i32> => {
///     let n = probe!(Maybe::Some(10));
///     Maybe::Some(n / 2)
/// });
/// assert_eq!(halved, Maybe::Some(5));
/// ```
#[macro_export]
macro_rules! attempt {
    ($payload:ty => $body:block) => {
        (|| -> $payload { $body })()
    };
    ($body:block) => {
        (|| $body)()
    };
}
