// Copyright 2026 the Semicircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

#![allow(missing_docs)]

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("semicircle requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn floor(self) -> Self => floor;
    fn sin_cos(self) -> (Self, Self) => sincos;
}

/// Adds pixel-space conveniences to `f64`.
pub trait FloatExt {
    /// Rounds to the nearest integer, with halves going towards positive
    /// infinity.
    ///
    /// This is the rounding the host renderers apply to pixel coordinates,
    /// which differs from [`f64::round`] for negative halves. A zero result
    /// is always positive zero, so it prints as `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use semicircle::common::FloatExt;
    ///
    /// assert_eq!(2.5_f64.round_pixel(), 3.0);
    /// assert_eq!((-2.5_f64).round_pixel(), -2.0);
    /// assert_eq!((-0.2_f64).round_pixel().to_string(), "0");
    /// ```
    fn round_pixel(self) -> f64;
}

impl FloatExt for f64 {
    #[inline]
    fn round_pixel(self) -> f64 {
        (self + 0.5).floor()
    }
}
