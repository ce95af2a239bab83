// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub use fvm_shared3::address::{Address, Error as AddressError, Network};
use fvm_shared3::address::{current_network, set_current_network};

/// The network whose prefix (`f` or `t`) is used to render addresses.
///
/// Defaults to [`Network::Mainnet`]; the CLI switches it once at startup after
/// asking the node which chain it follows.
pub struct CurrentNetwork;

impl CurrentNetwork {
    pub fn get_global() -> Network {
        current_network()
    }

    pub fn set_global(network: Network) {
        set_current_network(network);
    }

    fn prefix() -> char {
        match Self::get_global() {
            Network::Mainnet => 'f',
            Network::Testnet => 't',
        }
    }
}

/// Parse an address written with either the mainnet or the testnet prefix.
/// `f01000` and `t01000` name the same actor.
pub fn parse_address(input: &str) -> Result<Address, AddressError> {
    let input = input.trim();
    match input.strip_prefix(['f', 't']) {
        Some(rest) => format!("{}{rest}", CurrentNetwork::prefix()).parse(),
        None => Err(AddressError::UnknownNetwork),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn either_prefix() {
        let mainnet = parse_address("f01234").unwrap();
        let testnet = parse_address("t01234").unwrap();
        assert_eq!(mainnet, testnet);
        assert_eq!(mainnet.id().unwrap(), 1234);
    }

    #[test]
    fn surrounding_whitespace() {
        assert_eq!(parse_address("  f02\n").unwrap(), Address::new_id(2));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_address("").is_err());
        assert!(parse_address("x01234").is_err());
        assert!(parse_address("f0abc").is_err());
    }
}
