use crate::insights::tips::Tip;

/// Keyword tables for priority inference. Matching is case-insensitive
/// substring over the combined title + detail text, so the scoring
/// policy can be unit-tested apart from any particular tip wording.
pub mod keywords {
    /// Something already went (or is about to go) wrong.
    pub const URGENCY: &[&str] = &[
        "overdue",
        "late fee",
        "missed",
        "over limit",
        "minimum payment",
        "due within 7 days",
        "due today",
        "negative gap",
        "short by",
    ];
    /// Debt and interest-cost language.
    pub const DEBT: &[&str] = &["debt", "apr", "interest", "pay down", "minimum", "credit"];
    /// Savings habits and safety nets.
    pub const SAVINGS: &[&str] = &["save", "savings", "buffer", "set aside", "autopay", "reminder"];
    /// Act-now framing.
    pub const IMMEDIACY: &[&str] = &["today", "now", "this week", "within 7 days", "first"];
}

/// Baseline for tips with no matching keywords.
const BASE_PRIORITY: i32 = 45;
const URGENCY_BONUS: i32 = 34;
const DEBT_BONUS: i32 = 14;
const SAVINGS_BONUS: i32 = 8;
const IMMEDIACY_BONUS: i32 = 6;

const MIN_PRIORITY: i32 = 1;
const MAX_PRIORITY: i32 = 100;

fn matches_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| text.contains(p))
}

fn clamp_priority(value: i32) -> u8 {
    value.clamp(MIN_PRIORITY, MAX_PRIORITY) as u8
}

/// Priority of a tip: the explicit value when present (clamped),
/// otherwise inferred from its text.
///
/// # Examples
///
/// ```
/// use insights_engine::insights::priority::infer_tip_priority;
/// use insights_engine::insights::tips::Tip;
///
/// let urgent = Tip::new("Overdue rent", "Pay it today.");
/// let gentle = Tip::new("Round up spare change", "Small amounts add up.");
/// assert!(infer_tip_priority(&urgent) > infer_tip_priority(&gentle));
/// ```
pub fn infer_tip_priority(tip: &Tip) -> u8 {
    if let Some(priority) = tip.priority {
        return clamp_priority(priority as i32);
    }

    let text = format!("{} {}", tip.title, tip.detail).to_lowercase();
    let mut score = BASE_PRIORITY;
    if matches_any(&text, keywords::URGENCY) {
        score += URGENCY_BONUS;
    }
    if matches_any(&text, keywords::DEBT) {
        score += DEBT_BONUS;
    }
    if matches_any(&text, keywords::SAVINGS) {
        score += SAVINGS_BONUS;
    }
    if matches_any(&text, keywords::IMMEDIACY) {
        score += IMMEDIACY_BONUS;
    }
    clamp_priority(score)
}

/// Fill in priorities, sort descending, optionally truncate.
///
/// The sort is stable, so tips with equal priority keep their
/// generation order. Already-prioritized input passes through with the
/// same order.
pub fn prioritize_tips(tips: Vec<Tip>, limit: Option<usize>) -> Vec<Tip> {
    let mut ranked: Vec<Tip> = tips
        .into_iter()
        .map(|mut tip| {
            tip.priority = Some(infer_tip_priority(&tip));
            tip
        })
        .collect();

    ranked.sort_by(|a, b| b.priority.cmp(&a.priority));
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}
