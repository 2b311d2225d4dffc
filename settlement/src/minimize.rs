//! Debt minimization
//!
//! Greedy two-pointer settlement over balances sorted by amount.
//!
//! # Algorithm
//!
//! 1. Copy and stable-sort balances ascending (largest debtor first)
//! 2. Point `low` at the largest debtor and `high` at the largest creditor
//! 3. Pay min(debt, credit) from debtor to creditor
//! 4. Move whichever pointer was cleared (both on an exact match)
//! 5. Stop when the pointers meet
//!
//! Each step clears at least one side, so n balances settle in at most n − 1
//! transfers. This is a heuristic: the true minimum is a subset-partition problem.
//!
//! # Example
//!
//! ```text
//! Balances (sorted):
//!   D: -50, F: -35, C: -30, B: +5, A: +10, E: +100
//!
//! Transfers:
//!   D pays E: 50
//!   F pays E: 35
//!   C pays E: 15
//!   C pays A: 10
//!   C pays B: 5
//! ```

use crate::types::*;
use rust_decimal::Decimal;

/// Compute settling transfers for a set of balances
///
/// The input is never mutated. Unbalanced input leaves a residual on whichever
/// side ran out of counterparties.
pub fn minimize_transfers(balances: &[Balance]) -> Statement {
    let mut ledger = balances.to_vec();
    ledger.sort_by(|a, b| a.amount.cmp(&b.amount));

    let mut transactions = Vec::with_capacity(ledger.len().saturating_sub(1));

    if ledger.len() > 1 {
        let mut low = 0;
        let mut high = ledger.len() - 1;

        while low < high {
            let debt = ledger[low].debt();
            let credit = ledger[high].credit();
            let amount = debt.min(credit);

            if amount > Decimal::ZERO {
                transactions.push(Transfer::new(
                    ledger[low].name.clone(),
                    ledger[high].name.clone(),
                    amount,
                ));
                ledger[low].amount += amount;
                ledger[high].amount -= amount;
            }

            if amount == debt {
                low += 1;
            }
            if amount == credit {
                high -= 1;
            }
        }
    }

    let statement = Statement {
        updated_balances: ledger,
        transactions,
    };

    let settled = statement.settled_amount();
    match statement.residual() {
        Some(residual) if residual.is_zero() => tracing::debug!(
            balances = balances.len(),
            transactions = statement.transactions.len(),
            settled = ?settled,
            "Balances settled"
        ),
        Some(residual) => tracing::debug!(
            balances = balances.len(),
            transactions = statement.transactions.len(),
            settled = ?settled,
            %residual,
            "Balances partially settled"
        ),
        None => tracing::debug!(
            balances = balances.len(),
            transactions = statement.transactions.len(),
            settled = ?settled,
            residual = "overflow",
            "Balances partially settled"
        ),
    }

    statement
}
