//! Balance netting
//!
//! Reduces gross transfers to one signed balance per participant.
//!
//! # Example
//!
//! ```text
//! Transfers:
//!   A → B: 40
//!   B → C: 40
//!   C → A: 10
//!
//! Net positions:
//!   A: +30 (owed)
//!   B:   0
//!   C: -30 (owes)
//! ```
//!
//! The sender of a transfer is the one who is owed, so `from` gains the amount
//! and `to` loses it. Self-transfers cancel out but still register the
//! participant.

use crate::{types::*, Error, Result};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Calculate net balance per participant
///
/// Output is ordered by participant name and sums to exactly zero. Fails only
/// when a running balance leaves the decimal range.
pub fn calculate_balances(transfers: &[Transfer]) -> Result<Vec<Balance>> {
    let mut positions: BTreeMap<&ParticipantId, Decimal> = BTreeMap::new();

    for transfer in transfers {
        if transfer.is_self_transfer() {
            positions.entry(&transfer.from).or_insert(Decimal::ZERO);
            continue;
        }

        let owed = positions.entry(&transfer.from).or_insert(Decimal::ZERO);
        *owed = owed
            .checked_add(transfer.amount)
            .ok_or_else(|| Error::AmountOverflow(transfer.from.clone()))?;

        let owing = positions.entry(&transfer.to).or_insert(Decimal::ZERO);
        *owing = owing
            .checked_sub(transfer.amount)
            .ok_or_else(|| Error::AmountOverflow(transfer.to.clone()))?;
    }

    tracing::debug!(
        transfers = transfers.len(),
        participants = positions.len(),
        "Netted transfers into balances"
    );

    Ok(positions
        .into_iter()
        .map(|(name, amount)| Balance::new(name.clone(), amount))
        .collect())
}
