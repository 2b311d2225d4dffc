//! Settlement Engine
//!
//! Nets shared-expense transfers into per-participant balances and settles those
//! balances with a short list of payments.
//!
//! # Architecture
//!
//! 1. **Netting**: Reduce raw transfers to one signed balance per participant
//! 2. **Minimization**: Match the largest debtor with the largest creditor until
//!    every balance is cleared (or the ledger runs out of counterparties)
//!
//! Both stages are pure functions over caller-owned data. Amounts are
//! [`rust_decimal::Decimal`], so conservation holds exactly and comparisons
//! against zero never depend on floating-point epsilon.
//!
//! # Invariants
//!
//! - Money conservation: Σ(balances) is unchanged by minimization
//! - Netted balances always sum to zero
//! - No operation panics on amounts near the decimal range limit: netting
//!   reports [`Error::AmountOverflow`], minimization never adds beyond it
//! - At most n − 1 settling transfers for n balances
//!
//! # Example
//!
//! ```
//! use settlement::{calculate_balances, minimize_transfers, Transfer};
//! use rust_decimal::Decimal;
//!
//! let transfers = vec![
//!     Transfer::new("A", "B", Decimal::from(40)),
//!     Transfer::new("B", "C", Decimal::from(40)),
//!     Transfer::new("C", "A", Decimal::from(10)),
//! ];
//!
//! let balances = calculate_balances(&transfers)?;
//! let statement = minimize_transfers(&balances);
//!
//! assert_eq!(statement.transactions.len(), 1);
//! assert!(statement.is_settled());
//! # Ok::<(), settlement::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod types;
pub mod netting;
pub mod minimize;
pub mod service;
pub mod error;

// Re-exports
pub use error::{Error, Result};
pub use types::*;
pub use netting::calculate_balances;
pub use minimize::minimize_transfers;
pub use service::{Accounting, BalanceCalculator, TransferMinimizer};
