//! Decimal arithmetic helpers.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

/// Decimal places kept on monetary outputs.
pub const MONEY_DP: u32 = 2;

/// Converts a percentage (5.5) into a rate (0.055).
#[inline]
#[must_use]
pub fn percent_to_rate(percent: Decimal) -> Decimal {
    percent / Decimal::ONE_HUNDRED
}

/// Rounds a value to cents, half away from zero.
#[inline]
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Decimal exponentiation.
///
/// Integer exponents are exact up to decimal precision. Fractional exponents
/// go through `exp(ln)`; if that overflows the power is retried in `f64`.
/// A result too large for a `Decimal` saturates at `Decimal::MAX`, one too
/// small saturates at zero.
#[must_use]
pub fn pow_decimal(base: Decimal, exp: Decimal) -> Decimal {
    if exp.is_zero() || base == Decimal::ONE {
        return Decimal::ONE;
    }
    if let Some(result) = base.checked_powd(exp) {
        return result;
    }

    let b = base.to_f64().unwrap_or(1.0);
    let e = exp.to_f64().unwrap_or(0.0);
    let fallback = b.powf(e);
    log::debug!("decimal power overflowed for {base}^{exp}, using f64 result {fallback}");
    match Decimal::from_f64(fallback) {
        Some(result) => result,
        None if fallback.is_nan() => Decimal::ONE,
        None if fallback > 1.0 => Decimal::MAX,
        None => Decimal::ZERO,
    }
}
