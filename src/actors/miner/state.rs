// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::actors::{token_amount, with_state};
use crate::error::Error;
use crate::shim::{econ::TokenAmount, version::ActorVersion};

/// The funds ledger of a miner actor's state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MinerState {
    /// Total funds locked as pre-commit deposits.
    pub pre_commit_deposits: TokenAmount,
    /// Total rewards and added funds locked in the vesting table.
    pub locked_funds: TokenAmount,
    /// Absolute value of debt this miner owes from unpaid fees.
    pub fee_debt: TokenAmount,
    /// Sum of initial pledge requirements of all active sectors.
    pub initial_pledge: TokenAmount,
}

impl MinerState {
    pub fn decode(version: ActorVersion, bytes: &[u8]) -> Result<Self, Error> {
        with_state!(fil_actor_miner_state, "miner actor", version, bytes, |state| {
            MinerState {
                pre_commit_deposits: token_amount!(state.pre_commit_deposits),
                locked_funds: token_amount!(state.locked_funds),
                fee_debt: token_amount!(state.fee_debt),
                initial_pledge: token_amount!(state.initial_pledge),
            }
        })
    }

    /// Unlocked funds: the balance less deposits, pledge, vesting funds and fee debt.
    ///
    /// Negative when the miner is in debt.
    pub fn available_balance(&self, balance: &TokenAmount) -> TokenAmount {
        balance
            - (&self.pre_commit_deposits + &self.initial_pledge + &self.locked_funds)
            - &self.fee_debt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cid::Cid;
    use fvm_ipld_bitfield::BitField;

    /// CBOR for an actors v11 miner state with the given ledger.
    fn encode(state: &MinerState) -> Vec<u8> {
        let MinerState {
            pre_commit_deposits,
            locked_funds,
            fee_debt,
            initial_pledge,
        } = state;
        fvm_ipld_encoding::to_vec(&(
            Cid::default(), // Info
            pre_commit_deposits,
            locked_funds,
            Cid::default(), // VestingFunds
            fee_debt,
            initial_pledge,
            Cid::default(), // PreCommittedSectors
            Cid::default(), // PreCommittedSectorsCleanUp
            Cid::default(), // AllocatedSectors
            Cid::default(), // Sectors
            100_i64,        // ProvingPeriodStart
            3_u64,          // CurrentDeadline
            Cid::default(), // Deadlines
            BitField::new(), // EarlyTerminations
            true,           // DeadlineCronActive
        ))
        .unwrap()
    }

    fn ledger() -> MinerState {
        MinerState {
            pre_commit_deposits: TokenAmount::from_atto(50),
            locked_funds: TokenAmount::from_atto(30),
            fee_debt: TokenAmount::from_atto(0),
            initial_pledge: TokenAmount::from_atto(1000),
        }
    }

    #[test]
    fn decodes_ledger() {
        for version in [11, 12, 13] {
            assert_eq!(
                MinerState::decode(ActorVersion(version), &encode(&ledger())).unwrap(),
                ledger(),
                "actors v{version}"
            );
        }
    }

    #[test]
    fn truncated_state() {
        let bytes = fvm_ipld_encoding::to_vec(&(Cid::default(), TokenAmount::default())).unwrap();
        assert!(matches!(
            MinerState::decode(ActorVersion(11), &bytes),
            Err(Error::StateShape { .. })
        ));
    }

    #[test]
    fn available_balance() {
        assert_eq!(
            ledger().available_balance(&TokenAmount::from_atto(1100)),
            TokenAmount::from_atto(20)
        );
    }

    #[test]
    fn fee_debt_reduces_available_balance() {
        let state = MinerState {
            fee_debt: TokenAmount::from_atto(25),
            ..ledger()
        };
        assert_eq!(
            state.available_balance(&TokenAmount::from_atto(1100)),
            TokenAmount::from_atto(-5)
        );
    }
}
