// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Turn command line flags into the list of miners to project, and the
//! sectors to project for each.

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Error;
use crate::shim::{
    address::{Address, parse_address},
    sector::SectorNumber,
};

/// Where miners and sectors come from, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct InputSpec {
    pub actor: Option<String>,
    pub miners_path: Option<PathBuf>,
    pub sectors: Option<String>,
    pub sectors_path: Option<PathBuf>,
}

/// One miner to project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub miner: Address,
    /// Sectors to terminate. Empty means every active sector.
    pub sectors: BTreeSet<SectorNumber>,
}

impl InputSpec {
    /// Validate flags and read any files they name, in the order the miners appear.
    pub fn resolve(&self) -> Result<Vec<Target>, Error> {
        let miners = match (&self.actor, &self.miners_path) {
            (Some(actor), None) => vec![parse_miner(actor)?],
            (None, Some(path)) => read_lines(path)?
                .iter()
                .map(|line| parse_miner(line))
                .collect::<Result<Vec<_>, _>>()?,
            (None, None) => {
                return Err(Error::config(
                    "one of --actor or --miners-path is required",
                ));
            }
            (Some(_), Some(_)) => {
                return Err(Error::config(
                    "--actor and --miners-path are mutually exclusive",
                ));
            }
        };
        if miners.is_empty() {
            return Err(Error::config("no miner addresses"));
        }

        let sectors = match (&self.sectors, &self.sectors_path) {
            (None, None) => BTreeSet::new(),
            (Some(list), None) => list
                .split(',')
                .map(parse_sector)
                .collect::<Result<_, _>>()?,
            (None, Some(path)) => read_lines(path)?
                .iter()
                .map(|line| parse_sector(line))
                .collect::<Result<_, _>>()?,
            (Some(_), Some(_)) => {
                return Err(Error::config(
                    "--sectors and --sectors-path are mutually exclusive",
                ));
            }
        };

        Ok(miners
            .into_iter()
            .map(|miner| Target {
                miner,
                sectors: sectors.clone(),
            })
            .collect())
    }
}

fn parse_miner(input: &str) -> Result<Address, Error> {
    parse_address(input).map_err(|e| Error::parse("miner address", input.trim(), e))
}

fn parse_sector(input: &str) -> Result<SectorNumber, Error> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|e| Error::parse("sector number", trimmed, e))
}

/// Replace a leading `~` with the current user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match directories::BaseDirs::new() {
            Some(dirs) => dirs.home_dir().join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

/// Non-blank, trimmed lines of `path`. A missing file has no lines.
fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    let path = expand_tilde(path);
    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("{} does not exist, treating it as empty", path.display());
            Ok(vec![])
        }
        Err(e) => Err(Error::config(format_args!(
            "couldn't read {}: {e}",
            path.display()
        ))),
    }
}
