//! Stateless facade over netting and minimization
//!
//! Transport layers depend on the two traits rather than on the free functions,
//! so they can be driven by stubs in tests.

use crate::{minimize::minimize_transfers, netting::calculate_balances, types::*, Result};

/// Computes net balances from transfers
pub trait BalanceCalculator: Send + Sync {
    /// Net the given transfers into one balance per participant
    fn calculate(&self, transfers: &[Transfer]) -> Result<Vec<Balance>>;
}

/// Computes settling transfers from balances
pub trait TransferMinimizer: Send + Sync {
    /// Settle the given balances
    fn minimize(&self, balances: &[Balance]) -> Statement;
}

/// Default implementation backed by the settlement engines
#[derive(Debug, Clone, Copy, Default)]
pub struct Accounting;

impl BalanceCalculator for Accounting {
    fn calculate(&self, transfers: &[Transfer]) -> Result<Vec<Balance>> {
        calculate_balances(transfers)
    }
}

impl TransferMinimizer for Accounting {
    fn minimize(&self, balances: &[Balance]) -> Statement {
        minimize_transfers(balances)
    }
}
