use creditwise_core::lending::{eligibility, emi};
use creditwise_core::{loan_math, CreditWiseError, EmploymentType, UserProfile};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn sample_profile() -> UserProfile {
    // The dashboard's demo profile: 28k disposable, one existing loan.
    UserProfile {
        name: "Asha".to_string(),
        age: 29,
        employment_type: EmploymentType::Salaried,
        monthly_income: dec!(75_000),
        monthly_expenses: dec!(35_000),
        existing_loans: 1,
        existing_emi: dec!(12_000),
    }
}

// ===========================================================================
// Installment math
// ===========================================================================

#[test]
fn test_monthly_installment_reference_loan() {
    // ₹5,00,000 at 12% APR over 36 months => ~₹16,607 per month
    let payment = loan_math::monthly_installment(dec!(500_000), dec!(12), 36).unwrap();
    assert_eq!(payment.round(), dec!(16607));
}

#[test]
fn test_monthly_installment_zero_rate_is_straight_line() {
    let payment = loan_math::monthly_installment(dec!(120_000), dec!(0), 12).unwrap();
    assert_eq!(payment, dec!(10_000));
}

#[test]
fn test_total_repayment_at_least_principal() {
    let principal = dec!(500_000);
    for (rate, term) in [(dec!(12), 36u32), (dec!(8.5), 60), (dec!(24), 12)] {
        let payment = loan_math::monthly_installment(principal, rate, term).unwrap();
        assert!(
            payment * Decimal::from(term) >= principal,
            "total repayment below principal at {rate}%/{term}m",
        );
    }

    // Exactly the principal when the rate is zero
    let payment = loan_math::monthly_installment(principal, dec!(0), 36).unwrap();
    assert_eq!(payment * dec!(36), principal);
}

#[test]
fn test_installment_round_trips_through_inverse() {
    let principal = dec!(750_000);
    let payment = loan_math::monthly_installment(principal, dec!(10.5), 48).unwrap();
    let recovered =
        loan_math::principal_from_installment(payment, dec!(10.5), 48).unwrap();
    assert!(
        (recovered - principal).abs() < dec!(0.01),
        "round trip drifted: {recovered}",
    );
}

#[test]
fn test_zero_rate_round_trip_is_exact() {
    let payment = loan_math::monthly_installment(dec!(240_000), dec!(0), 24).unwrap();
    let recovered = loan_math::principal_from_installment(payment, dec!(0), 24).unwrap();
    assert_eq!(recovered, dec!(240_000));
}

#[test]
fn test_total_interest_zero_when_rate_zero() {
    let interest = loan_math::total_interest(dec!(100_000), dec!(0), 10).unwrap();
    assert_eq!(interest, dec!(0));
}

#[test]
fn test_invalid_loan_terms_are_rejected() {
    assert!(matches!(
        loan_math::monthly_installment(dec!(0), dec!(12), 36),
        Err(CreditWiseError::InvalidInput { .. })
    ));
    assert!(matches!(
        loan_math::monthly_installment(dec!(100_000), dec!(-1), 36),
        Err(CreditWiseError::InvalidInput { .. })
    ));
    assert!(matches!(
        loan_math::monthly_installment(dec!(100_000), dec!(12), 0),
        Err(CreditWiseError::InvalidInput { .. })
    ));
}

// ===========================================================================
// EMI envelope + amortization schedule
// ===========================================================================

#[test]
fn test_calculate_emi_totals() {
    let input = emi::EmiInput {
        principal: dec!(500_000),
        annual_rate_pct: dec!(12),
        term_months: 36,
        include_schedule: false,
    };
    let output = emi::calculate_emi(&input).unwrap().result;

    assert_eq!(output.total_payment, output.monthly_payment * dec!(36));
    assert_eq!(
        output.total_interest,
        output.total_payment - dec!(500_000)
    );
    assert!(output.schedule.is_none());
}

#[test]
fn test_amortization_schedule_closes_to_zero() {
    let input = emi::EmiInput {
        principal: dec!(300_000),
        annual_rate_pct: dec!(9),
        term_months: 24,
        include_schedule: true,
    };
    let output = emi::calculate_emi(&input).unwrap().result;
    let schedule = output.schedule.unwrap();

    assert_eq!(schedule.len(), 24);
    assert_eq!(schedule.last().unwrap().closing_balance, dec!(0));

    // Principal parts telescope back to the original principal
    let principal_paid: Decimal = schedule.iter().map(|p| p.principal).sum();
    assert_eq!(principal_paid, dec!(300_000));

    // First month's interest is one month of rate on the full balance
    assert_eq!(schedule[0].interest, dec!(300_000) * dec!(9) / dec!(1200));

    // Interest declines as the balance amortizes
    for pair in schedule.windows(2) {
        assert!(pair[1].interest < pair[0].interest);
    }
}

// ===========================================================================
// Eligibility
// ===========================================================================

#[test]
fn test_eligibility_reference_profile() {
    let input = eligibility::EligibilityInput {
        profile: sample_profile(),
        term_months: 60,
        annual_rate_pct: dec!(12),
        safe_emi_fraction: dec!(0.4),
        min_principal: dec!(100_000),
    };
    let output = eligibility::check_eligibility(&input).unwrap().result;

    assert_eq!(output.disposable_income, dec!(28_000));
    assert_eq!(output.safe_emi, dec!(11_200));
    assert!(output.max_principal > dec!(500_000));
    assert!(output.max_principal < dec!(510_000));
    assert!(output.eligible);

    // The example EMI at the estimated principal services the safe EMI
    let example = output.example_emi.unwrap();
    assert!((example - output.safe_emi).abs() < dec!(0.01));
}

#[test]
fn test_eligibility_below_threshold() {
    let mut profile = sample_profile();
    profile.monthly_income = dec!(20_000);
    profile.monthly_expenses = dec!(15_000);
    profile.existing_emi = dec!(3_000);

    let input = eligibility::EligibilityInput {
        profile,
        term_months: 60,
        annual_rate_pct: dec!(12),
        safe_emi_fraction: dec!(0.4),
        min_principal: dec!(100_000),
    };
    let output = eligibility::check_eligibility(&input).unwrap().result;

    assert_eq!(output.disposable_income, dec!(2_000));
    assert!(output.max_principal < dec!(100_000));
    assert!(!output.eligible);
}

#[test]
fn test_eligibility_zero_disposable_income() {
    let mut profile = sample_profile();
    profile.monthly_income = dec!(30_000);
    profile.monthly_expenses = dec!(30_000);
    profile.existing_emi = dec!(5_000);

    let input = eligibility::EligibilityInput {
        profile,
        term_months: 60,
        annual_rate_pct: dec!(12),
        safe_emi_fraction: dec!(0.4),
        min_principal: dec!(100_000),
    };
    let wrapped = eligibility::check_eligibility(&input).unwrap();
    let output = &wrapped.result;

    assert_eq!(output.disposable_income, dec!(0));
    assert_eq!(output.max_principal, dec!(0));
    assert!(output.example_emi.is_none());
    assert!(!output.eligible);
    assert!(!wrapped.warnings.is_empty());
}

#[test]
fn test_eligibility_rejects_bad_fraction() {
    let input = eligibility::EligibilityInput {
        profile: sample_profile(),
        term_months: 60,
        annual_rate_pct: dec!(12),
        safe_emi_fraction: dec!(1.5),
        min_principal: dec!(100_000),
    };
    assert!(matches!(
        eligibility::check_eligibility(&input),
        Err(CreditWiseError::InvalidInput { .. })
    ));
}

#[test]
fn test_eligibility_defaults_deserialize() {
    // Only the profile supplied; term/rate/fraction/threshold default
    let json = serde_json::json!({ "profile": {
        "name": "Asha",
        "age": 29,
        "employmentType": "salaried",
        "monthlyIncome": "75000",
        "monthlyExpenses": "35000",
        "existingLoans": 1,
        "existingEmi": "12000"
    }});
    let input: eligibility::EligibilityInput = serde_json::from_value(json).unwrap();
    assert_eq!(input.term_months, 60);
    assert_eq!(input.annual_rate_pct, dec!(12));
    assert_eq!(input.safe_emi_fraction, dec!(0.4));
    assert_eq!(input.min_principal, dec!(100_000));
}
