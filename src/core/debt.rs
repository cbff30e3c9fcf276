use crate::core::obligation::ObligationId;
use crate::core::status::finite_or_zero;
use serde::{Deserialize, Serialize};

/// Kind of debt account, as tracked by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtKind {
    CreditCard,
    StoreCard,
    Loan,
    Other,
}

impl DebtKind {
    /// Card-style accounts carry a credit limit worth watching.
    pub fn is_card(self) -> bool {
        matches!(self, DebtKind::CreditCard | DebtKind::StoreCard)
    }
}

impl Default for DebtKind {
    fn default() -> Self {
        DebtKind::Other
    }
}

/// Read-only snapshot of a debt account.
///
/// `amount` is the payment planned for the current period, distinct from
/// the outstanding `current_balance`. A debt with no remaining balance
/// is settled and produces no upcoming payment or tips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtAccount {
    id: ObligationId,
    name: String,
    /// Planned payment for the current period.
    amount: f64,
    /// Outstanding balance.
    current_balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    monthly_minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    credit_limit: Option<f64>,
    /// Annual interest rate, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interest_rate: Option<f64>,
    #[serde(default)]
    kind: DebtKind,
    /// When the planned payment is itself charged to a card, that
    /// card's account id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pays_from_card: Option<ObligationId>,
}

impl DebtAccount {
    pub fn new(
        id: ObligationId,
        name: impl Into<String>,
        amount: f64,
        current_balance: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            current_balance,
            monthly_minimum: None,
            credit_limit: None,
            interest_rate: None,
            kind: DebtKind::Other,
            pays_from_card: None,
        }
    }

    pub fn with_kind(mut self, kind: DebtKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_monthly_minimum(mut self, minimum: f64) -> Self {
        self.monthly_minimum = Some(minimum);
        self
    }

    pub fn with_credit_limit(mut self, limit: f64) -> Self {
        self.credit_limit = Some(limit);
        self
    }

    pub fn with_interest_rate(mut self, rate: f64) -> Self {
        self.interest_rate = Some(rate);
        self
    }

    pub fn with_card_funding(mut self, card: ObligationId) -> Self {
        self.pays_from_card = Some(card);
        self
    }

    // --- Accessors ---

    pub fn id(&self) -> &ObligationId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Planned payment, non-finite values coerced to 0.
    pub fn amount(&self) -> f64 {
        finite_or_zero(self.amount)
    }

    /// Outstanding balance, non-finite values coerced to 0.
    pub fn current_balance(&self) -> f64 {
        finite_or_zero(self.current_balance)
    }

    pub fn monthly_minimum(&self) -> Option<f64> {
        self.monthly_minimum.map(finite_or_zero)
    }

    pub fn credit_limit(&self) -> Option<f64> {
        self.credit_limit.map(finite_or_zero)
    }

    pub fn interest_rate(&self) -> Option<f64> {
        self.interest_rate.map(finite_or_zero)
    }

    pub fn kind(&self) -> DebtKind {
        self.kind
    }

    pub fn pays_from_card(&self) -> Option<&ObligationId> {
        self.pays_from_card.as_ref()
    }

    /// Credit still available on a card, when a limit is known.
    pub fn available_credit(&self) -> Option<f64> {
        self.credit_limit().map(|limit| limit - self.current_balance())
    }

    /// An account still carrying a balance.
    pub fn is_active(&self) -> bool {
        self.current_balance() > 0.0
    }
}
