//! Upcoming-payment mixing example.
//!
//! Shows why the mixer exists: a pile of pressing bills would crowd
//! every debt payment off the dashboard on raw score alone. Quotas keep
//! each source represented.

use chrono::NaiveDate;
use insights_engine::core::allocation::AllocationPlan;
use insights_engine::core::debt::{DebtAccount, DebtKind};
use insights_engine::core::obligation::{Obligation, ObligationId};
use insights_engine::core::period::{Period, PeriodContext};
use insights_engine::insights::mixer::{mix_upcoming, MixQuotas};
use insights_engine::insights::upcoming::{
    allocation_upcoming, compute_upcoming_payments, upcoming_debt_payments, UpcomingPayment,
};

fn print_list(title: &str, items: &[UpcomingPayment]) {
    println!("━━━ {} ━━━\n", title);
    for item in items {
        let kind = if item.kind.is_debt() {
            "debt"
        } else if item.kind.is_allocation() {
            "allocation"
        } else {
            "expense"
        };
        println!(
            "  {:<22} {:>8.2}  due {}  [{}]",
            item.name, item.amount, item.due_date, kind
        );
    }
    println!();
}

fn main() {
    println!("╔═══════════════════════════════════════════╗");
    println!("║  insights-engine: Payment Mixing Example  ║");
    println!("╚═══════════════════════════════════════════╝\n");

    let march = Period::new(2026, 3);
    let today = NaiveDate::from_ymd_opt(2026, 3, 12).unwrap();
    let ctx = PeriodContext::new(march, 25, today);

    // Eight bills due within days: urgent enough to fill the list alone.
    let bills: Vec<Obligation> = (0..8u32)
        .map(|i| {
            Obligation::new(
                ObligationId::new(format!("bill-{i}")),
                format!("Bill {}", i + 1),
                40.0 + 10.0 * i as f64,
                march,
            )
            .with_due_date(NaiveDate::from_ymd_opt(2026, 3, 13 + i).unwrap())
        })
        .collect();

    let expenses = compute_upcoming_payments(&bills, &ctx, None);
    print_list("Raw expense ranking (no quotas)", &expenses);

    // Two debts paid on payday, plus the month's allocations.
    let debts = vec![
        DebtAccount::new(ObligationId::new("visa"), "Visa", 120.0, 900.0)
            .with_kind(DebtKind::CreditCard)
            .with_interest_rate(21.9),
        DebtAccount::new(ObligationId::new("car"), "Car loan", 220.0, 5200.0)
            .with_kind(DebtKind::Loan)
            .with_interest_rate(6.4),
    ];
    let debt_items = upcoming_debt_payments(&debts, &ctx);

    let mut allocations = AllocationPlan::new();
    allocations.push("Savings", 150.0);
    allocations.push("Emergency fund", 50.0);
    let allocation = allocation_upcoming(&allocations, &ctx);

    let mixed = mix_upcoming(&expenses, &debt_items, allocation, MixQuotas::default());
    print_list("Mixed list (3 expenses / 2 debts / 1 allocation)", &mixed);

    let expense_count = mixed.iter().filter(|u| u.kind.is_expense()).count();
    let debt_count = mixed.iter().filter(|u| u.kind.is_debt()).count();
    println!(
        "Final mix: {} expenses, {} debts, {} allocation item(s).",
        expense_count,
        debt_count,
        mixed.len() - expense_count - debt_count
    );
}
