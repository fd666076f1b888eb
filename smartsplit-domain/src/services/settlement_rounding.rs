//! Display rounding for settlement results.
//!
//! Rounding is applied to finished results only. Planned transfers are rounded
//! one by one, so the rounded amounts need not add up to the rounded total.

use crate::model::{Money, Transfer};
use rust_decimal::RoundingStrategy;

/// Rounding mode for display quantization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round half toward positive infinity (e.g., 2.5 -> 3, -2.5 -> -2).
    #[default]
    HalfUp,
    /// Round half away from zero (e.g., 2.5 -> 3, -2.5 -> -3).
    HalfAwayFromZero,
    /// Round half to nearest even number (banker's rounding).
    HalfEven,
}

impl RoundingMode {
    fn strategy(self, amount: Money) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp if amount.is_negative() => RoundingStrategy::MidpointTowardZero,
            RoundingMode::HalfUp | RoundingMode::HalfAwayFromZero => {
                RoundingStrategy::MidpointAwayFromZero
            }
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// How amounts are quantized before they are shown.
///
/// # Example
/// ```
/// use smartsplit_domain::{Money, services::{DisplayContext, RoundingMode}};
///
/// let ctx = DisplayContext {
///     scale: 0, // whole currency units
///     rounding_mode: RoundingMode::HalfUp,
/// };
/// assert_eq!(ctx.round(Money::new(25, 1)), Money::from_i64(3));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayContext {
    /// Number of decimal places kept (0 for whole currency units).
    pub scale: u32,
    pub rounding_mode: RoundingMode,
}

impl DisplayContext {
    /// Whole currency units, half up.
    pub fn whole_units() -> Self {
        Self::default()
    }

    /// Quantizes `amount`; a result of zero never carries a negative sign.
    pub fn round(self, amount: Money) -> Money {
        let rounded = amount
            .as_decimal()
            .round_dp_with_strategy(self.scale, self.rounding_mode.strategy(amount));
        if rounded.is_zero() {
            Money::ZERO
        } else {
            Money::from_decimal(rounded)
        }
    }
}

/// Rounded transfer plan, ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundedPlan {
    /// The plan was empty before rounding.
    NoSettlementNeeded,
    /// The plan had transfers, but every one of them rounded to zero.
    SettledAfterRounding { dropped: usize },
    Transfers(Vec<Transfer>),
}

impl RoundedPlan {
    pub fn transfers(&self) -> &[Transfer] {
        match self {
            RoundedPlan::Transfers(transfers) => transfers,
            RoundedPlan::NoSettlementNeeded | RoundedPlan::SettledAfterRounding { .. } => &[],
        }
    }
}

/// Rounds each transfer independently and drops the ones that round to zero.
pub fn round_plan(transfers: &[Transfer], context: DisplayContext) -> RoundedPlan {
    if transfers.is_empty() {
        return RoundedPlan::NoSettlementNeeded;
    }

    let rounded: Vec<Transfer> = transfers
        .iter()
        .filter_map(|transfer| {
            let amount = context.round(transfer.amount);
            if amount.is_zero() {
                return None;
            }
            Some(Transfer {
                amount,
                ..transfer.clone()
            })
        })
        .collect();

    let dropped = transfers.len() - rounded.len();
    if dropped > 0 {
        tracing::debug!(
            planned = transfers.len(),
            dropped,
            scale = context.scale,
            rounding_mode = ?context.rounding_mode,
            "Dropped transfers that round to zero"
        );
    }

    if rounded.is_empty() {
        RoundedPlan::SettledAfterRounding { dropped }
    } else {
        RoundedPlan::Transfers(rounded)
    }
}
