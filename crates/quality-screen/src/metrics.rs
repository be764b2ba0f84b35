use screen_core::{FinancialStatements, InterestCoverage, YearlyMetric};

/// Turn raw multi-year statements into the canonical metric sequence.
///
/// One candidate row per income-statement year; balance-sheet and
/// cash-flow facts are joined by fiscal year and default to zero when
/// that year is missing from them. Years failing the validity check
/// (zero net income, equity or revenue, or undefined EPS) are dropped
/// here so no consumer ever sees them, and the survivors come back
/// sorted ascending by fiscal year.
pub fn extract_yearly_metrics(statements: &FinancialStatements) -> Vec<YearlyMetric> {
    let mut metrics: Vec<YearlyMetric> = statements
        .income
        .iter()
        .filter_map(|income| {
            let year = income.fiscal_year;
            let balance = statements.balance.iter().find(|b| b.fiscal_year == year);
            let cash_flow = statements.cash_flow.iter().find(|c| c.fiscal_year == year);

            let revenue = income.revenue.unwrap_or(0.0);
            let net_income = income.net_income.unwrap_or(0.0);
            let ebit = income.ebit.unwrap_or(0.0);
            let pretax_income = income.pretax_income.unwrap_or(0.0);
            let tax_expense = income.tax_expense.unwrap_or(0.0);
            let interest_expense = income.interest_expense.unwrap_or(0.0);
            let total_equity = balance.and_then(|b| b.total_equity).unwrap_or(0.0);
            let total_liabilities = balance.and_then(|b| b.total_liabilities).unwrap_or(0.0);
            let free_cash_flow = cash_flow.and_then(|c| c.free_cash_flow).unwrap_or(0.0);

            let eps = match income.eps_diluted {
                Some(e) if e.is_finite() => e,
                _ => return None,
            };
            if net_income == 0.0 || total_equity == 0.0 || revenue == 0.0 {
                return None;
            }

            let roe = ratio_pct(net_income, total_equity);
            let tax_rate = ratio_pct(tax_expense, pretax_income);
            let nopat = ebit * (1.0 - tax_rate / 100.0);
            let roic = ratio_pct(nopat, total_equity + total_liabilities);
            let net_margin = ratio_pct(net_income, revenue);
            let fcf_margin = ratio_pct(free_cash_flow, revenue);
            let debt_ratio = ratio_pct(total_liabilities, total_equity);

            let interest_coverage = if interest_expense == 0.0 {
                InterestCoverage::Infinite
            } else {
                InterestCoverage::Ratio(ebit / interest_expense.abs())
            };

            Some(YearlyMetric {
                fiscal_year: year,
                roe,
                roic,
                net_margin,
                fcf_margin,
                debt_ratio,
                interest_coverage,
                eps,
                net_income,
                revenue,
                total_equity,
                interest_expense,
            })
        })
        .collect();

    metrics.sort_by_key(|m| m.fiscal_year);
    metrics
}

/// `numerator / denominator * 100`, 0 when the denominator is 0.
fn ratio_pct(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator * 100.0
    }
}
