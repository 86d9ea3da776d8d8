//! Per-wallet deposit/withdraw cycle.
//!
//! # Sequence (per wallet)
//! ```text
//! balance_of → withdraw(balance) if > 0
//!     → wait(settle)
//!     → transactions_today → loops = max(0, daily_target - today)
//!     → loops × [ deposit(x) → wait(post_deposit) → withdraw(x) → wait(post_withdraw) ]
//! ```
//!
//! Every external failure is logged and absorbed; one wallet can never stop
//! the run.

use alloy::primitives::{Address, U256};
use std::time::Duration;

use crate::blockchain::{Wallet, WrappedToken};
use crate::config::CycleConfig;
use crate::cycle::amount::AmountRange;
use crate::cycle::delay::Delay;
use crate::explorer::ActivityCounter;
use crate::observability::metrics::{self, TxKind};

/// Outcome of one wallet's run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletReport {
    pub address: Address,
    /// Balance withdrawn before the loop, if any was found.
    pub drained: Option<U256>,
    pub transactions_today: usize,
    pub planned_loops: usize,
    pub deposits_ok: usize,
    pub deposits_failed: usize,
    pub withdrawals_ok: usize,
    pub withdrawals_failed: usize,
}

/// Outcome of a full run over every wallet.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub wallets: Vec<WalletReport>,
}

impl RunSummary {
    pub fn broadcasts(&self) -> usize {
        self.wallets
            .iter()
            .map(|w| w.deposits_ok + w.withdrawals_ok)
            .sum()
    }

    pub fn failures(&self) -> usize {
        self.wallets
            .iter()
            .map(|w| w.deposits_failed + w.withdrawals_failed)
            .sum()
    }
}

/// Iterations left to reach `daily_target` given `today` transactions.
pub fn remaining_loops(daily_target: usize, today: usize) -> usize {
    daily_target.saturating_sub(today)
}

/// Drives the cycle for each wallet in turn.
pub struct CycleDriver<T, C, D> {
    token: T,
    counter: C,
    delay: D,
    config: CycleConfig,
    amounts: AmountRange,
}

impl<T, C, D> CycleDriver<T, C, D>
where
    T: WrappedToken,
    C: ActivityCounter,
    D: Delay,
{
    pub fn new(token: T, counter: C, delay: D, config: CycleConfig) -> Self {
        let amounts = AmountRange::from_config(&config);
        Self {
            token,
            counter,
            delay,
            config,
            amounts,
        }
    }

    /// Process every wallet sequentially.
    pub async fn run(&self, wallets: &[Wallet]) -> RunSummary {
        let mut summary = RunSummary::default();
        for wallet in wallets {
            let report = self.run_wallet(wallet).await;
            metrics::record_wallet_processed();
            tracing::info!(
                address = %report.address,
                deposits = report.deposits_ok,
                withdrawals = report.withdrawals_ok,
                failures = report.deposits_failed + report.withdrawals_failed,
                "Wallet finished"
            );
            summary.wallets.push(report);
        }
        summary
    }

    /// Run the full sequence for one wallet.
    pub async fn run_wallet(&self, wallet: &Wallet) -> WalletReport {
        let address = wallet.address();
        let mut report = WalletReport {
            address,
            ..WalletReport::default()
        };

        let drained = self.drain(wallet, &mut report).await;
        report.drained = drained;

        self.pause(self.config.settle_delay()).await;

        report.transactions_today = self.counter.transactions_today(address).await;
        report.planned_loops = remaining_loops(self.config.daily_target, report.transactions_today);
        metrics::record_planned_loops(report.planned_loops);

        tracing::info!(
            address = %address,
            today = report.transactions_today,
            target = self.config.daily_target,
            loops = report.planned_loops,
            "Starting cycles"
        );

        for i in 0..report.planned_loops {
            let iteration = i + 1;
            tracing::info!(address = %address, iteration, "Starting loop");

            let amount = self.amounts.sample(&mut rand::thread_rng());

            if self.step(TxKind::Deposit, wallet, amount).await {
                report.deposits_ok += 1;
            } else {
                report.deposits_failed += 1;
            }
            self.pause(self.config.post_deposit_delay()).await;

            if self.step(TxKind::Withdraw, wallet, amount).await {
                report.withdrawals_ok += 1;
            } else {
                report.withdrawals_failed += 1;
            }
            tracing::info!(address = %address, iteration, "Loop complete");
            self.pause(self.config.post_withdraw_delay()).await;
        }

        report
    }

    /// Unwrap any balance left from a previous run.
    async fn drain(&self, wallet: &Wallet, report: &mut WalletReport) -> Option<U256> {
        let balance = match self.token.balance_of(wallet.address()).await {
            Ok(balance) => balance,
            Err(e) => {
                tracing::error!(address = %wallet.address(), error = %e, "Failed to read wrapped balance");
                return None;
            }
        };

        if balance.is_zero() {
            return None;
        }

        tracing::info!(address = %wallet.address(), balance_wei = %balance, "Wrapped balance found, withdrawing");
        if self.step(TxKind::Withdraw, wallet, balance).await {
            report.withdrawals_ok += 1;
        } else {
            report.withdrawals_failed += 1;
        }
        Some(balance)
    }

    /// Send one deposit or withdrawal, logging the outcome.
    async fn step(&self, kind: TxKind, wallet: &Wallet, amount: U256) -> bool {
        let result = match kind {
            TxKind::Deposit => self.token.deposit(wallet, amount).await,
            TxKind::Withdraw => self.token.withdraw(wallet, amount).await,
        };
        metrics::record_transaction(kind, result.is_ok());

        match result {
            Ok(tx_hash) => {
                tracing::info!(
                    address = %wallet.address(),
                    kind = kind.as_str(),
                    amount_wei = %amount,
                    tx_hash = %tx_hash,
                    "Transaction sent"
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    address = %wallet.address(),
                    kind = kind.as_str(),
                    amount_wei = %amount,
                    error = %e,
                    "Transaction failed"
                );
                false
            }
        }
    }

    async fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            self.delay.wait(duration).await;
        }
    }
}
