// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Conversions between the `fvm_shared` releases the built-in actors are compiled against.
//!
//! Actors v8 and v9 speak `fvm_shared` 2, v10 and v11 speak 3, v12 onwards speak 4.
//! Filter estimates moved into `fil_actors_shared` with actors v14.

use fvm_shared2::econ::TokenAmount as TokenAmountV2;
use fvm_shared2::sector::SectorSize as SectorSizeV2;
use fvm_shared2::smooth::FilterEstimate as FilterEstimateV2;
use fvm_shared3::econ::TokenAmount as TokenAmountV3;
use fvm_shared3::sector::SectorSize as SectorSizeV3;
use fvm_shared3::smooth::FilterEstimate as FilterEstimateV3;
use fvm_shared4::econ::TokenAmount as TokenAmountV4;
use fvm_shared4::sector::SectorSize as SectorSizeV4;

use fil_actors_shared::v14::builtin::reward::smooth::FilterEstimate as FilterEstimateV14;
use fil_actors_shared::v15::builtin::reward::smooth::FilterEstimate as FilterEstimateV15;
use fil_actors_shared::v16::reward::FilterEstimate as FilterEstimateV16;
use fil_actors_shared::v17::reward::FilterEstimate as FilterEstimateV17;

pub fn from_token_v3_to_v2(token: &TokenAmountV3) -> TokenAmountV2 {
    TokenAmountV2::from_atto(token.atto().clone())
}

pub fn from_token_v3_to_v4(token: &TokenAmountV3) -> TokenAmountV4 {
    TokenAmountV4::from_atto(token.atto().clone())
}

pub fn from_token_v2_to_v3(token: &TokenAmountV2) -> TokenAmountV3 {
    TokenAmountV3::from_atto(token.atto().clone())
}

pub fn from_token_v4_to_v3(token: &TokenAmountV4) -> TokenAmountV3 {
    TokenAmountV3::from_atto(token.atto().clone())
}

pub fn from_sector_size_v3_to_v2(size: SectorSizeV3) -> SectorSizeV2 {
    match size {
        SectorSizeV3::_2KiB => SectorSizeV2::_2KiB,
        SectorSizeV3::_8MiB => SectorSizeV2::_8MiB,
        SectorSizeV3::_512MiB => SectorSizeV2::_512MiB,
        SectorSizeV3::_32GiB => SectorSizeV2::_32GiB,
        SectorSizeV3::_64GiB => SectorSizeV2::_64GiB,
    }
}

pub fn from_sector_size_v3_to_v4(size: SectorSizeV3) -> SectorSizeV4 {
    match size {
        SectorSizeV3::_2KiB => SectorSizeV4::_2KiB,
        SectorSizeV3::_8MiB => SectorSizeV4::_8MiB,
        SectorSizeV3::_512MiB => SectorSizeV4::_512MiB,
        SectorSizeV3::_32GiB => SectorSizeV4::_32GiB,
        SectorSizeV3::_64GiB => SectorSizeV4::_64GiB,
    }
}

pub fn from_filter_estimate_v3_to_v2(fe: &FilterEstimateV3) -> FilterEstimateV2 {
    FilterEstimateV2 {
        position: fe.position.clone(),
        velocity: fe.velocity.clone(),
    }
}

pub fn from_filter_estimate_v3_to_v14(fe: &FilterEstimateV3) -> FilterEstimateV14 {
    FilterEstimateV14 {
        position: fe.position.clone(),
        velocity: fe.velocity.clone(),
    }
}

pub fn from_filter_estimate_v3_to_v15(fe: &FilterEstimateV3) -> FilterEstimateV15 {
    FilterEstimateV15 {
        position: fe.position.clone(),
        velocity: fe.velocity.clone(),
    }
}

pub fn from_filter_estimate_v3_to_v16(fe: &FilterEstimateV3) -> FilterEstimateV16 {
    FilterEstimateV16 {
        position: fe.position.clone(),
        velocity: fe.velocity.clone(),
    }
}

pub fn from_filter_estimate_v3_to_v17(fe: &FilterEstimateV3) -> FilterEstimateV17 {
    FilterEstimateV17 {
        position: fe.position.clone(),
        velocity: fe.velocity.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::BigInt;

    #[test]
    fn token_amounts_keep_their_atto_value() {
        let amount = TokenAmountV3::from_atto(-1_234_567);
        assert_eq!(from_token_v2_to_v3(&from_token_v3_to_v2(&amount)), amount);
        assert_eq!(from_token_v4_to_v3(&from_token_v3_to_v4(&amount)), amount);
    }

    #[test]
    fn sector_sizes_keep_their_byte_count() {
        for size in [SectorSizeV3::_2KiB, SectorSizeV3::_32GiB, SectorSizeV3::_64GiB] {
            assert_eq!(from_sector_size_v3_to_v2(size) as u64, size as u64);
            assert_eq!(from_sector_size_v3_to_v4(size) as u64, size as u64);
        }
    }

    #[test]
    fn filter_estimates_keep_position_and_velocity() {
        let fe = FilterEstimateV3::new(BigInt::from(1) << 100, BigInt::from(-3));
        let v16 = from_filter_estimate_v3_to_v16(&fe);
        assert_eq!((v16.position, v16.velocity), (fe.position.clone(), fe.velocity.clone()));
        let v2 = from_filter_estimate_v3_to_v2(&fe);
        assert_eq!((v2.position, v2.velocity), (fe.position, fe.velocity));
    }
}
