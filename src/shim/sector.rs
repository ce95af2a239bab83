// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub use fvm_shared3::sector::{RegisteredSealProof, SectorNumber, SectorSize, StoragePower};

/// Short IEC rendering, e.g. `32 GiB`.
pub fn sector_size_str(size: SectorSize) -> &'static str {
    match size {
        SectorSize::_2KiB => "2 KiB",
        SectorSize::_8MiB => "8 MiB",
        SectorSize::_512MiB => "512 MiB",
        SectorSize::_32GiB => "32 GiB",
        SectorSize::_64GiB => "64 GiB",
    }
}

#[test]
fn sector_size_strings() {
    assert_eq!(sector_size_str(SectorSize::_32GiB), "32 GiB");
    assert_eq!(sector_size_str(SectorSize::_2KiB), "2 KiB");
}
