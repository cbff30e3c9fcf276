use crate::core::debt::DebtAccount;
use crate::core::obligation::ObligationId;
use crate::core::status::{finite_or_zero, PAID_EPSILON};
use crate::insights::tips::{money, Tip};

/// Cap on debt tips per invocation; the rest of the dashboard deserves
/// space too.
const MAX_DEBT_TIPS: usize = 4;

/// Planned debt payments above this share of income trigger the
/// load-awareness tip.
const DEBT_LOAD_RATIO: f64 = 0.35;

/// A balance within this multiple of its planned payment counts as a
/// snowball quick win.
const QUICK_WIN_MULTIPLE: f64 = 2.0;

/// Generate tips from the shape of the debt accounts alone.
///
/// Inspects only active accounts (named, balance outstanding). Output
/// is deduplicated by (title, detail) and capped at [`MAX_DEBT_TIPS`];
/// ranking against the recap tips is the prioritizer's job.
pub fn generate_debt_tips(debts: &[DebtAccount], total_income: Option<f64>) -> Vec<Tip> {
    let debts: Vec<&DebtAccount> = debts
        .iter()
        .filter(|d| !d.name().trim().is_empty() && d.is_active())
        .collect();
    if debts.is_empty() {
        return Vec::new();
    }

    let mut tips = Vec::new();

    // Payments routed through a card increase that card's balance; sum
    // them per card before checking availability.
    let mut planned_charges: Vec<(&ObligationId, f64)> = Vec::new();
    for debt in &debts {
        let Some(card_id) = debt.pays_from_card() else {
            continue;
        };
        let charge = debt.amount();
        if charge <= 0.0 {
            continue;
        }
        match planned_charges.iter_mut().find(|(id, _)| *id == card_id) {
            Some((_, sum)) => *sum += charge,
            None => planned_charges.push((card_id, charge)),
        }
    }

    for card in debts
        .iter()
        .filter(|d| d.kind().is_card() && d.credit_limit().unwrap_or(0.0) > 0.0)
    {
        let limit = card.credit_limit().unwrap_or(0.0);
        let available = card.available_credit().unwrap_or(0.0);
        let charges = planned_charges
            .iter()
            .find(|(id, _)| *id == card.id())
            .map(|(_, sum)| *sum)
            .unwrap_or(0.0);

        if available < -PAID_EPSILON {
            tips.push(Tip::new(
                "Card is over its credit limit",
                format!(
                    "{} looks over limit (available {} on a {} limit). Consider paying \
                     it down to avoid fees / declined payments.",
                    card.name(),
                    money(available),
                    money(limit)
                ),
            ));
            continue;
        }

        if charges > 0.0 && available + PAID_EPSILON < charges {
            tips.push(Tip::new(
                "Pay your card before upcoming charges",
                format!(
                    "{} has only {} available, but you have {} planned to be charged to \
                     it (via other debt payments). Paying the card down first helps avoid \
                     going over limit / missed payments.",
                    card.name(),
                    money(available),
                    money(charges)
                ),
            ));
        }
    }

    // Planned payment below the account's stated minimum.
    if let Some(debt) = debts.iter().find(|d| {
        let minimum = d.monthly_minimum().unwrap_or(0.0);
        minimum > 0.0 && d.amount() > 0.0 && d.amount() + PAID_EPSILON < minimum
    }) {
        tips.push(Tip::new(
            "Cover minimum payments first",
            format!(
                "{} is planned at {} but the minimum is {}. Paying at least the minimum \
                 helps avoid fees and credit damage.",
                debt.name(),
                money(debt.amount()),
                money(debt.monthly_minimum().unwrap_or(0.0))
            ),
        ));
    }

    let has_any_apr = debts.iter().any(|d| d.interest_rate().unwrap_or(0.0) > 0.0);
    if !has_any_apr && debts.len() >= 2 {
        tips.push(Tip::new(
            "Add APR to get smarter debt tips",
            "If you add interest rates for each debt, the planner can recommend an \
             avalanche plan (highest APR first) and show which payoff saves the most \
             interest.",
        ));
    }

    // Avalanche: highest APR first, when there is a choice to make.
    let mut by_apr: Vec<&&DebtAccount> = debts
        .iter()
        .filter(|d| d.interest_rate().unwrap_or(0.0) > 0.0)
        .collect();
    by_apr.sort_by(|a, b| {
        b.interest_rate()
            .unwrap_or(0.0)
            .total_cmp(&a.interest_rate().unwrap_or(0.0))
    });
    if by_apr.len() >= 2 {
        let top = by_apr[0];
        tips.push(Tip::new(
            "Avalanche: prioritize the highest APR",
            format!(
                "{} has the highest APR ({:.1}%). Consider paying any extra on that \
                 first while keeping minimums on the rest.",
                top.name(),
                top.interest_rate().unwrap_or(0.0)
            ),
        ));
    }

    // Snowball: the smallest balance close to clearing.
    let mut close_to_done: Vec<&&DebtAccount> = debts
        .iter()
        .filter(|d| d.amount() > 0.0 && d.current_balance() <= QUICK_WIN_MULTIPLE * d.amount())
        .collect();
    close_to_done.sort_by(|a, b| a.current_balance().total_cmp(&b.current_balance()));
    if let Some(debt) = close_to_done.first() {
        tips.push(Tip::new(
            "Quick win: close a small balance",
            format!(
                "{} is close to paid off ({} left). Clearing it can free up {}/month to \
                 roll into the next debt.",
                debt.name(),
                money(debt.current_balance()),
                money(debt.amount())
            ),
        ));
    }

    let total_balance: f64 = debts.iter().map(|d| d.current_balance()).sum();
    let planned_total: f64 = debts.iter().map(|d| d.amount()).sum();
    let income = total_income.map(finite_or_zero).unwrap_or(0.0);
    let load_ratio = if income > 0.0 {
        planned_total / income
    } else {
        0.0
    };

    if load_ratio >= DEBT_LOAD_RATIO && planned_total > 0.0 && income > 0.0 {
        tips.push(Tip::new(
            "Debt payments are a big chunk of income",
            format!(
                "Your planned debt payments are about {:.1}% of income ({}/{}). If this \
                 feels tight, try reducing variable spending or temporarily pausing \
                 non-essential goals to protect minimum payments.",
                load_ratio * 100.0,
                money(planned_total),
                money(income)
            ),
        ));
    } else if total_balance > 0.0 && planned_total <= 0.0 {
        tips.push(Tip::new(
            "Set a monthly payment plan",
            format!(
                "You have {} in debt balance but no monthly debt amounts set. Add \
                 planned payments so the budget can reserve cash for debt.",
                money(total_balance)
            ),
        ));
    }

    let tips = clamp_unique_tips(tips, MAX_DEBT_TIPS);
    log::debug!("debt tips: {} after dedupe/cap", tips.len());
    tips
}

/// Dedupe by (title, detail) preserving order, then cap.
fn clamp_unique_tips(tips: Vec<Tip>, limit: usize) -> Vec<Tip> {
    let mut unique: Vec<Tip> = Vec::new();
    for tip in tips {
        if unique
            .iter()
            .any(|t| t.title == tip.title && t.detail == tip.detail)
        {
            continue;
        }
        unique.push(tip);
        if unique.len() >= limit {
            break;
        }
    }
    unique
}
