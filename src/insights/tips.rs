use crate::core::forecast::ForecastPoint;
use crate::core::obligation::Obligation;
use crate::core::period::{Period, PeriodContext};
use crate::core::status::PaymentStatus;
use crate::insights::recap::RecapSummary;
use crate::schedule::due_date::{end_of_month, resolve_due_date};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// A short heuristic suggestion surfaced from payment patterns.
///
/// Carries text only; currency symbols and locale formatting belong to
/// the rendering collaborator. Amounts inside the text are plain
/// two-decimal numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub title: String,
    pub detail: String,
    /// 1-100; inferred by the prioritizer when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
}

impl Tip {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Plain two-decimal amount for tip text.
pub(crate) fn money(value: f64) -> String {
    format!("{:.2}", value)
}

/// Inputs to recap-tip generation. All slices are read-only snapshots;
/// `history` obligations carry their own periods.
#[derive(Debug, Clone, Copy)]
pub struct TipInputs<'a> {
    pub recap: &'a RecapSummary,
    /// Current-period obligations.
    pub current: &'a [Obligation],
    /// Context for the current period.
    pub ctx: &'a PeriodContext,
    pub forecasts: &'a [ForecastPoint],
    pub history: &'a [Obligation],
}

/// A bill must be missed this often before it is called out by name.
const RECURRING_MISS_MIN_COUNT: usize = 2;
/// ... across at least this many distinct history periods.
const RECURRING_MISS_MIN_PERIODS: usize = 2;

/// History must contain this many resolvable due days before the
/// payday-clustering heuristic speaks up.
const CLUSTERING_MIN_KNOWN: usize = 6;
const CLUSTERING_MIN_RATIO: f64 = 0.6;

const PARTIAL_HABIT_MIN_NOT_PAID: usize = 4;
const PARTIAL_HABIT_MIN_RATIO: f64 = 0.5;

/// Minimum headroom (currency units) before a stronger month is worth a
/// catch-up suggestion.
pub const FORECAST_HEADROOM_MARGIN: f64 = 50.0;

#[derive(Default)]
struct MissStat {
    count: usize,
    total_remaining: f64,
}

/// Generate recap-driven tips.
///
/// Gate: a clean recap (nothing missed, nothing outstanding) emits no
/// tips at all, whatever the history and forecasts say. Output order is
/// generation order; ranking belongs to the prioritizer.
pub fn generate_recap_tips(inputs: &TipInputs<'_>) -> Vec<Tip> {
    let mut tips = Vec::new();

    if !inputs.recap.needs_attention() {
        return tips;
    }

    if !inputs.history.is_empty() {
        tips.extend(history_tips(inputs));
    }

    let overdue_remaining = current_overdue_remaining(inputs);
    if overdue_remaining > 0.0 {
        tips.push(Tip::new(
            "Prioritize overdue bills first",
            format!(
                "Start with anything overdue. Even partial payments help reduce late fees. \
                 Remaining overdue: {}.",
                money(overdue_remaining)
            ),
        ));
    }

    tips.push(Tip::new(
        "Pay on payday (or the day after)",
        "If possible, schedule bill payments right after your pay date so you don't \
         accidentally spend it elsewhere.",
    ));
    tips.push(Tip::new(
        "Add reminders + autopay for the basics",
        "Turn on reminders 3 days before due dates (and on the day). Use autopay for \
         rent/mortgage/utilities if you can.",
    ));
    tips.push(Tip::new(
        "Build a small bills buffer",
        "Aim for a small buffer (even 25-50) so one unexpected spend doesn't cause a \
         missed bill.",
    ));

    tips.extend(forecast_tips(inputs, overdue_remaining));

    log::debug!("recap tips: gate passed, {} generated", tips.len());
    tips
}

/// Patterns in the plan's recent history: the bill missed most often,
/// due dates clustering before payday, and a partial-payment habit.
fn history_tips(inputs: &TipInputs<'_>) -> Vec<Tip> {
    let mut tips = Vec::new();

    let mut periods_in_history: Vec<Period> =
        inputs.history.iter().map(|o| o.period()).collect();
    periods_in_history.sort();
    periods_in_history.dedup();

    // Insertion-ordered so full ties resolve to the earliest-seen name.
    let mut missed_by_name: Vec<(String, MissStat)> = Vec::new();
    let mut partial_count = 0usize;
    let mut not_paid_count = 0usize;
    let mut due_before_payday = 0usize;
    let mut due_with_known_day = 0usize;

    for ob in inputs.history {
        let amount = ob.amount();
        if amount <= 0.0 {
            continue;
        }

        let status = ob.status();
        if !status.is_paid() {
            not_paid_count += 1;
        }
        if status == PaymentStatus::Partial {
            partial_count += 1;
        }

        let own_ctx = inputs.ctx.for_period(ob.period());
        let due = resolve_due_date(ob, &own_ctx);
        if let Some(due) = due {
            due_with_known_day += 1;
            if due.day() < inputs.ctx.pay_date {
                due_before_payday += 1;
            }
        }

        if status.is_paid() {
            continue;
        }
        let due_by_end = match (due, end_of_month(ob.period())) {
            (Some(d), Some(end)) => d <= end,
            _ => true,
        };
        if !due_by_end {
            continue;
        }

        let key = {
            let trimmed = ob.name().trim();
            if trimmed.is_empty() {
                "(Unnamed bill)".to_string()
            } else {
                trimmed.to_string()
            }
        };
        match missed_by_name.iter_mut().find(|(name, _)| *name == key) {
            Some((_, stat)) => {
                stat.count += 1;
                stat.total_remaining += ob.remaining();
            }
            None => missed_by_name.push((
                key,
                MissStat {
                    count: 1,
                    total_remaining: ob.remaining(),
                },
            )),
        }
    }

    let mut top_missed: Option<&(String, MissStat)> = None;
    for entry in &missed_by_name {
        let better = match top_missed {
            None => true,
            Some((_, best)) => {
                entry.1.count > best.count
                    || (entry.1.count == best.count && entry.1.total_remaining > best.total_remaining)
            }
        };
        if better {
            top_missed = Some(entry);
        }
    }

    if let Some((name, stat)) = top_missed {
        if stat.count >= RECURRING_MISS_MIN_COUNT
            && periods_in_history.len() >= RECURRING_MISS_MIN_PERIODS
        {
            tips.push(Tip::new(
                format!("You often miss {name}"),
                format!(
                    "{name} was missed {} times in your recent history. Consider autopay \
                     (if available) or a recurring reminder 3 days before the due date.",
                    stat.count
                ),
            ));
        }
    }

    if due_with_known_day >= CLUSTERING_MIN_KNOWN {
        let ratio = due_before_payday as f64 / due_with_known_day as f64;
        if ratio >= CLUSTERING_MIN_RATIO {
            tips.push(Tip::new(
                "Many bills are due before payday",
                "A lot of your bills fall before your pay date. If possible, move due \
                 dates to just after payday or set a 'bills pot' transfer on payday to \
                 cover them.",
            ));
        }
    }

    if not_paid_count >= PARTIAL_HABIT_MIN_NOT_PAID {
        let ratio = partial_count as f64 / not_paid_count as f64;
        if ratio >= PARTIAL_HABIT_MIN_RATIO {
            tips.push(Tip::new(
                "You often pay partially",
                "If partial payments are common, try splitting large bills into 2 \
                 payments (payday + mid-month) so they don't pile up near the due date.",
            ));
        }
    }

    tips
}

/// Outstanding amount over current-period obligations that are overdue
/// right now.
fn current_overdue_remaining(inputs: &TipInputs<'_>) -> f64 {
    let mut overdue_remaining = 0.0;
    for ob in inputs.current {
        if ob.amount() <= 0.0 || ob.status().is_paid() {
            continue;
        }
        let Some(due) = resolve_due_date(ob, inputs.ctx) else {
            continue;
        };
        if (due - inputs.ctx.today).num_days() < 0 {
            overdue_remaining += ob.remaining();
        }
    }
    overdue_remaining
}

/// Forward-looking tips from the projection collaborator's numbers:
/// catch up in the strongest month, watch out for the tightest one.
fn forecast_tips(inputs: &TipInputs<'_>, overdue_remaining: f64) -> Vec<Tip> {
    let mut tips = Vec::new();
    if inputs.forecasts.is_empty() {
        return tips;
    }

    let current_net = inputs
        .forecasts
        .iter()
        .find(|f| f.period == inputs.ctx.period)
        .map(|f| f.net())
        .unwrap_or(0.0);

    let mut best: Option<&ForecastPoint> = None;
    let mut tightest: Option<&ForecastPoint> = None;
    for point in inputs.forecasts {
        if point.period == inputs.ctx.period {
            continue;
        }
        if best.map_or(true, |b| point.net() > b.net()) {
            best = Some(point);
        }
        if tightest.map_or(true, |t| point.net() < t.net()) {
            tightest = Some(point);
        }
    }

    if let Some(best) = best {
        let outstanding = if overdue_remaining > 0.0 {
            overdue_remaining
        } else {
            inputs.recap.missed_due_amount
        };
        if best.net() > current_net + FORECAST_HEADROOM_MARGIN && outstanding > 0.0 {
            let headroom = (best.net() - current_net).max(0.0);
            let suggested_extra = outstanding.min(headroom).max(0.0);
            tips.push(Tip::new(
                "Use higher-income months to catch up",
                format!(
                    "{} looks stronger after bills (about {} more than this month). If \
                     you can, consider paying an extra {} toward overdue/missed bills then.",
                    best.period.short_label(),
                    money(headroom),
                    money(suggested_extra)
                ),
            ));
        }
    }

    if let Some(tightest) = tightest {
        if tightest.net() < 0.0 {
            tips.push(Tip::new(
                "Watch for tight months ahead",
                format!(
                    "{} projects a negative gap after bills. Consider pre-paying 1-2 \
                     smaller bills in the prior month or trimming discretionary spend early.",
                    tightest.period.short_label()
                ),
            ));
        }
    }

    tips
}
