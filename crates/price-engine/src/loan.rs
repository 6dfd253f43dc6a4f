//! Loan Annuity Payment

use crate::money::round_dp;
use crate::PricingError;
use serde::Serialize;

/// Monthly payment breakdown of a car loan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanPayment {
    pub loan_amount: f64,
    pub monthly_payment: f64,
    /// Everything paid, down payment included
    pub total_payment: f64,
    pub total_interest: f64,
    pub down_payment: f64,
    /// Annual rate in percent
    pub interest_rate: f64,
    pub loan_term_months: u32,
    /// Set when no loan is needed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// Annuity payment `M = L * r(1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate.
///
/// A down payment covering the full price yields a zero-payment result.
/// A zero interest rate spreads the loan evenly over the term.
pub fn calculate_loan_payment(
    car_price: f64,
    down_payment: f64,
    interest_rate: f64,
    loan_term_months: u32,
) -> Result<LoanPayment, PricingError> {
    if !car_price.is_finite() || car_price < 0.0 {
        return Err(PricingError::invalid("car_price", car_price));
    }
    if !down_payment.is_finite() || down_payment < 0.0 {
        return Err(PricingError::invalid("down_payment", down_payment));
    }
    if !interest_rate.is_finite() || interest_rate < 0.0 {
        return Err(PricingError::invalid("interest_rate", interest_rate));
    }

    let loan_amount = car_price - down_payment;
    if loan_amount <= 0.0 {
        return Ok(LoanPayment {
            loan_amount: 0.0,
            monthly_payment: 0.0,
            total_payment: down_payment,
            total_interest: 0.0,
            down_payment,
            interest_rate,
            loan_term_months,
            message: Some("No loan required"),
        });
    }

    if loan_term_months == 0 {
        return Err(PricingError::invalid("loan_term_months", loan_term_months));
    }

    let n = loan_term_months as f64;
    let monthly_rate = interest_rate / 100.0 / 12.0;
    let monthly_payment = if monthly_rate == 0.0 {
        loan_amount / n
    } else {
        let growth = (1.0 + monthly_rate).powf(n);
        loan_amount * (monthly_rate * growth) / (growth - 1.0)
    };

    let total_payment = monthly_payment * n;
    let total_interest = total_payment - loan_amount;

    Ok(LoanPayment {
        loan_amount: round_dp(loan_amount, 2),
        monthly_payment: round_dp(monthly_payment, 2),
        total_payment: round_dp(total_payment + down_payment, 2),
        total_interest: round_dp(total_interest, 2),
        down_payment,
        interest_rate,
        loan_term_months,
        message: None,
    })
}
