use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::CreditWiseError;
use crate::types::{Money, Rate};
use crate::CreditWiseResult;

/// Months per year times 100: divides an annual percentage rate down to a
/// monthly fraction in one step (12% APR -> 0.01 per month).
const MONTHLY_RATE_DIVISOR: Decimal = dec!(1200);

/// Fixed monthly installment (EMI) for a loan.
///
/// `annual_rate_pct` is the quoted APR (12 = 12%). A zero rate degenerates
/// to straight-line repayment. No rounding is applied; callers round for
/// display.
pub fn monthly_installment(
    principal: Money,
    annual_rate_pct: Rate,
    term_months: u32,
) -> CreditWiseResult<Money> {
    validate_loan_terms(principal, annual_rate_pct, term_months)?;

    let r = annual_rate_pct / MONTHLY_RATE_DIVISOR;
    if r.is_zero() {
        return Ok(principal / Decimal::from(term_months));
    }

    let growth = (Decimal::ONE + r).powd(Decimal::from(term_months));
    let denom = growth - Decimal::ONE;
    if denom.is_zero() {
        return Err(CreditWiseError::DivisionByZero {
            context: "EMI annuity factor".into(),
        });
    }

    Ok(principal * r * growth / denom)
}

/// Principal that a given monthly installment can service: the algebraic
/// inverse of [`monthly_installment`] under the identical compounding
/// convention, so the two round-trip.
pub fn principal_from_installment(
    installment: Money,
    annual_rate_pct: Rate,
    term_months: u32,
) -> CreditWiseResult<Money> {
    if installment < Decimal::ZERO {
        return Err(CreditWiseError::InvalidInput {
            field: "installment".into(),
            reason: "Must be non-negative".into(),
        });
    }
    if annual_rate_pct < Decimal::ZERO {
        return Err(CreditWiseError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Must be non-negative".into(),
        });
    }
    if term_months == 0 {
        return Err(CreditWiseError::InvalidInput {
            field: "term_months".into(),
            reason: "Term must be at least 1 month".into(),
        });
    }

    let r = annual_rate_pct / MONTHLY_RATE_DIVISOR;
    if r.is_zero() {
        return Ok(installment * Decimal::from(term_months));
    }

    let growth = (Decimal::ONE + r).powd(Decimal::from(term_months));
    let denom = r * growth;
    if denom.is_zero() {
        return Err(CreditWiseError::DivisionByZero {
            context: "principal annuity factor".into(),
        });
    }

    Ok(installment * (growth - Decimal::ONE) / denom)
}

/// Interest paid over the life of the loan: `installment * n - principal`.
pub fn total_interest(
    principal: Money,
    annual_rate_pct: Rate,
    term_months: u32,
) -> CreditWiseResult<Money> {
    let installment = monthly_installment(principal, annual_rate_pct, term_months)?;
    Ok(installment * Decimal::from(term_months) - principal)
}

fn validate_loan_terms(
    principal: Money,
    annual_rate_pct: Rate,
    term_months: u32,
) -> CreditWiseResult<()> {
    if principal <= Decimal::ZERO {
        return Err(CreditWiseError::InvalidInput {
            field: "principal".into(),
            reason: "Must be positive".into(),
        });
    }
    if annual_rate_pct < Decimal::ZERO {
        return Err(CreditWiseError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Must be non-negative".into(),
        });
    }
    if term_months == 0 {
        return Err(CreditWiseError::InvalidInput {
            field: "term_months".into(),
            reason: "Term must be at least 1 month".into(),
        });
    }
    Ok(())
}
