//! Math function wrappers for std/no_std compatibility
//!
//! Uses standard library math when available, falls back to libm for no_std.

#[cfg(feature = "std")]
#[inline]
pub fn log2(x: f64) -> f64 {
    x.log2()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn log2(x: f64) -> f64 {
    libm::log2(x)
}

/// `ln(1 + x)`, accurate for `x` near zero
#[cfg(feature = "std")]
#[inline]
pub fn ln_1p(x: f64) -> f64 {
    x.ln_1p()
}

/// `ln(1 + x)`, accurate for `x` near zero
#[cfg(not(feature = "std"))]
#[inline]
pub fn ln_1p(x: f64) -> f64 {
    libm::log1p(x)
}

/// `e^x - 1`, accurate for `x` near zero
#[cfg(feature = "std")]
#[inline]
pub fn exp_m1(x: f64) -> f64 {
    x.exp_m1()
}

/// `e^x - 1`, accurate for `x` near zero
#[cfg(not(feature = "std"))]
#[inline]
pub fn exp_m1(x: f64) -> f64 {
    libm::expm1(x)
}
