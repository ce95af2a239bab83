// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::{filter_estimate, with_state};
use crate::error::Error;
use crate::shim::{smooth::FilterEstimate, version::ActorVersion};

/// Smoothed network quality-adjusted power, from a storage power actor state head.
pub fn this_epoch_qa_power_smoothed(
    version: ActorVersion,
    bytes: &[u8],
) -> Result<FilterEstimate, Error> {
    with_state!(fil_actor_power_state, "storage power actor", version, bytes, |state| {
        filter_estimate!(state.this_epoch_qa_power_smoothed)
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shim::econ::TokenAmount;
    use cid::Cid;
    use num::BigInt;

    /// CBOR for an actors v11 power state with the given smoothed QA power.
    pub fn encode(estimate: &FilterEstimate) -> Vec<u8> {
        let zero = TokenAmount::default();
        fvm_ipld_encoding::to_vec(&(
            &zero,          // TotalRawBytePower
            &zero,          // TotalBytesCommitted
            &zero,          // TotalQualityAdjPower
            &zero,          // TotalQABytesCommitted
            &zero,          // TotalPledgeCollateral
            &zero,          // ThisEpochRawBytePower
            &zero,          // ThisEpochQualityAdjPower
            &zero,          // ThisEpochPledgeCollateral
            estimate,       // ThisEpochQAPowerSmoothed
            3_000_i64,      // MinerCount
            2_000_i64,      // MinerAboveMinPowerCount
            Cid::default(), // CronEventQueue
            0_i64,          // FirstCronEpoch
            Cid::default(), // Claims
            None::<Cid>,    // ProofValidationBatch
        ))
        .unwrap()
    }

    #[test]
    fn decodes_smoothed_power() {
        let estimate = FilterEstimate {
            position: BigInt::from(1_u64 << 60) << 128,
            velocity: BigInt::from(0),
        };
        for version in [11, 13] {
            assert_eq!(
                this_epoch_qa_power_smoothed(ActorVersion(version), &encode(&estimate)).unwrap(),
                estimate,
                "actors v{version}"
            );
        }
    }

    #[test]
    fn reward_state_is_not_a_power_state() {
        let bytes = crate::actors::reward::tests::encode(&FilterEstimate {
            position: BigInt::from(1),
            velocity: BigInt::from(1),
        });
        assert!(matches!(
            this_epoch_qa_power_smoothed(ActorVersion(13), &bytes),
            Err(Error::StateShape { .. })
        ));
    }
}
