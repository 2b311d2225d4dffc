//! Core types for settlement engine

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Participant identifier (opaque name)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Create new participant ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Money owed by one participant to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Participant that owes
    pub from: ParticipantId,

    /// Participant that is owed
    pub to: ParticipantId,

    /// Amount owed
    pub amount: Decimal,
}

impl Transfer {
    /// Create new transfer
    pub fn new(
        from: impl Into<ParticipantId>,
        to: impl Into<ParticipantId>,
        amount: Decimal,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }

    /// Check if both sides are the same participant
    pub fn is_self_transfer(&self) -> bool {
        self.from == self.to
    }
}

/// Net position of a participant
///
/// Positive means others owe this participant; negative means this participant
/// owes others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Participant
    pub name: ParticipantId,

    /// Signed net amount
    pub amount: Decimal,
}

impl Balance {
    /// Create new balance
    pub fn new(name: impl Into<ParticipantId>, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    /// Check if participant owes money
    pub fn is_debtor(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Check if participant is owed money
    pub fn is_creditor(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Outstanding debt (zero for creditors)
    pub fn debt(&self) -> Decimal {
        if self.is_debtor() {
            -self.amount
        } else {
            Decimal::ZERO
        }
    }

    /// Outstanding credit (zero for debtors)
    pub fn credit(&self) -> Decimal {
        if self.is_creditor() {
            self.amount
        } else {
            Decimal::ZERO
        }
    }
}

/// Sum of all balance amounts
///
/// `None` when the sum leaves the decimal range.
pub fn total(balances: &[Balance]) -> Option<Decimal> {
    balances
        .iter()
        .try_fold(Decimal::ZERO, |sum, b| sum.checked_add(b.amount))
}

/// Result of minimizing a set of balances
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Balances after applying `transactions`, in settlement order
    pub updated_balances: Vec<Balance>,

    /// Settling payments
    pub transactions: Vec<Transfer>,
}

impl Statement {
    /// Sum of balances left unsettled
    ///
    /// Zero for a self-consistent ledger. Anything else is the part of the input
    /// that had no counterparty. `None` when the sum leaves the decimal range.
    pub fn residual(&self) -> Option<Decimal> {
        total(&self.updated_balances)
    }

    /// Check if every participant ended at zero
    pub fn is_settled(&self) -> bool {
        self.updated_balances.iter().all(|b| b.amount.is_zero())
    }

    /// Total amount moved by the settling payments
    pub fn settled_amount(&self) -> Option<Decimal> {
        self.transactions
            .iter()
            .try_fold(Decimal::ZERO, |sum, t| sum.checked_add(t.amount))
    }
}
