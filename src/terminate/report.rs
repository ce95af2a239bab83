// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::io::{self, Write};

use tabled::builder::Builder;
use tabled::settings::{Padding, Style};

use super::BalanceProjection;
use crate::cli::humantoken::TokenAmountShort as _;
use crate::shim::{address::Address, sector::sector_size_str};

const HEADERS: [&str; 10] = [
    "epoch",
    "miner",
    "sector-size",
    "sector-count",
    "pledge",
    "deposit",
    "vesting",
    "available",
    "penalty",
    "pledge-delta",
];

const MIN_WIDTHS: [usize; HEADERS.len()] = [10, 12, 12, 13, 14, 14, 14, 14, 14, 14];

/// Space between columns.
const GAP: usize = 2;

/// Aligned table, one row per miner.
///
/// Rows are flushed as they are written, so a later failure leaves earlier
/// rows on screen. Columns are as wide as the widest cell seen so far; call
/// [`ReportWriter::fit_miners`] before the header so every address fits.
pub struct ReportWriter<W> {
    out: W,
    widths: [usize; HEADERS.len()],
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            widths: MIN_WIDTHS,
        }
    }

    /// Widen the miner column to fit every one of `miners`.
    pub fn fit_miners<'a>(&mut self, miners: impl IntoIterator<Item = &'a Address>) {
        for miner in miners {
            self.widths[1] = self.widths[1].max(miner.to_string().chars().count());
        }
    }

    pub fn header(&mut self) -> io::Result<()> {
        self.line(HEADERS.map(String::from))
    }

    pub fn row(&mut self, row: &BalanceProjection) -> io::Result<()> {
        let funds = &row.funds;
        self.line([
            row.epoch.to_string(),
            row.miner.to_string(),
            sector_size_str(row.sector_size).to_string(),
            row.sector_count.to_string(),
            funds.initial_pledge.short().to_string(),
            funds.pre_commit_deposits.short().to_string(),
            funds.vesting_funds.short().to_string(),
            funds.available_balance.short().to_string(),
            row.penalty.short().to_string(),
            row.pledge_delta.short().to_string(),
        ])
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render one line on its own, padded to the column widths.
    fn line(&mut self, cells: [String; HEADERS.len()]) -> io::Result<()> {
        for (width, cell) in self.widths.iter_mut().zip(&cells) {
            *width = (*width).max(cell.chars().count());
        }
        let mut builder = Builder::default();
        // a blank record holds every column at its width
        builder.push_record(self.widths.map(|width| " ".repeat(width)));
        builder.push_record(cells);
        let table = builder
            .build()
            .with(Style::empty())
            .with(Padding::new(0, GAP, 0, 0))
            .to_string();
        let line = table.lines().nth(1).unwrap_or_default();
        writeln!(self.out, "{}", line.trim_end())?;
        self.out.flush()
    }
}
