//! Console boundary: reads raw lines, turns them into domain values and
//! prints tickets and results. Invalid input is reported with an `[ERROR]`
//! line and asked for again.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use thiserror::Error;

use crate::error::LottoError;
use crate::features::number_set::RandomDraw;
use crate::features::result_aggregator::ResultAggregator;
use crate::features::ticket_factory::TicketFactory;
use crate::types::{BonusNumber, NumberSet, PrizeTier, PurchaseBatch, ResultSummary, UNIT_PRICE};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("no input was given")]
    Empty,
    #[error("not a valid number")]
    InvalidNumberFormat,
    #[error("the amount cannot be negative")]
    NegativeAmount,
    #[error("only comma-separated numbers are allowed")]
    NotCommaSeparated,
    #[error(transparent)]
    Domain(#[from] LottoError),
}

pub fn parse_purchase_amount(input: &str) -> Result<u64, InputError> {
    let input = non_blank(input)?;
    let amount: i64 = input.parse().map_err(|_| InputError::InvalidNumberFormat)?;
    u64::try_from(amount).map_err(|_| InputError::NegativeAmount)
}

pub fn parse_winning_numbers(input: &str) -> Result<NumberSet, InputError> {
    let input = non_blank(input)?;
    let mut values = Vec::new();
    for token in input.split(',').map(str::trim) {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::NotCommaSeparated);
        }
        values.push(token.parse::<u32>().map_err(|_| InputError::InvalidNumberFormat)?);
    }
    Ok(NumberSet::create(&values)?)
}

pub fn parse_bonus_number(input: &str, winning: &NumberSet) -> Result<BonusNumber, InputError> {
    let input = non_blank(input)?;
    let value: u32 = input.parse().map_err(|_| InputError::InvalidNumberFormat)?;
    Ok(BonusNumber::create(value, winning)?)
}

fn non_blank(input: &str) -> Result<&str, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(trimmed)
}

/// `1234567` -> `"1,234,567"`.
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}

pub fn render_batch<W: Write>(batch: &PurchaseBatch, out: &mut W) -> io::Result<()> {
    writeln!(out, "Purchased {} ticket(s).", batch.ticket_count())?;
    for ticket in batch.tickets() {
        writeln!(out, "{}", ticket.numbers)?;
    }
    Ok(())
}

fn tier_label(tier: PrizeTier) -> String {
    let bonus = if tier.requires_bonus() { " + bonus ball" } else { "" };
    format!(
        "{} matches{bonus} ({} KRW)",
        tier.match_count(),
        format_amount(tier.payout())
    )
}

pub fn render_summary<W: Write>(summary: &ResultSummary, out: &mut W) -> io::Result<()> {
    writeln!(out, "Winning statistics")?;
    writeln!(out, "---")?;
    for (tier, count) in summary.winning_counts() {
        writeln!(out, "{} - {count} ticket(s)", tier_label(tier))?;
    }
    let tenths = summary.return_rate_tenths();
    writeln!(out, "Total return rate is {}.{}%.", tenths / 10, tenths % 10)
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a valid value was entered",
            ));
        }
        Ok(line)
    }

    /// Prompts until `parse` accepts a line.
    fn prompt_until_valid<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T, InputError>,
    ) -> io::Result<T> {
        loop {
            writeln!(self.output, "{prompt}")?;
            self.output.flush()?;
            let line = self.read_line()?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    log::warn!("console.prompt: rejected input={:?} error={err}", line.trim_end());
                    writeln!(self.output, "[ERROR] {err}")?;
                }
            }
        }
    }

    /// Reads a purchase amount and buys the tickets it pays for.
    pub fn read_batch<D: RandomDraw + ?Sized>(
        &mut self,
        unit_price: u64,
        source: &mut D,
    ) -> io::Result<PurchaseBatch> {
        self.prompt_until_valid("Please enter the purchase amount.", |line| {
            let amount = parse_purchase_amount(line)?;
            Ok(TicketFactory::build_batch(amount, unit_price, &mut *source)?)
        })
    }

    pub fn read_winning_numbers(&mut self) -> io::Result<NumberSet> {
        self.prompt_until_valid(
            "Please enter the winning numbers, separated by commas.",
            parse_winning_numbers,
        )
    }

    pub fn read_bonus_number(&mut self, winning: &NumberSet) -> io::Result<BonusNumber> {
        self.prompt_until_valid("Please enter the bonus number.", |line| {
            parse_bonus_number(line, winning)
        })
    }

    pub fn print_batch(&mut self, batch: &PurchaseBatch) -> io::Result<()> {
        writeln!(self.output)?;
        render_batch(batch, &mut self.output)
    }

    pub fn print_summary(&mut self, summary: &ResultSummary) -> io::Result<()> {
        writeln!(self.output)?;
        render_summary(summary, &mut self.output)
    }
}

/// Runs one full round: purchase, winning numbers, bonus ball, results.
pub fn play_round<R, W, D>(console: &mut Console<R, W>, source: &mut D) -> anyhow::Result<ResultSummary>
where
    R: BufRead,
    W: Write,
    D: RandomDraw + ?Sized,
{
    let batch = console
        .read_batch(UNIT_PRICE, source)
        .context("reading purchase amount")?;
    console.print_batch(&batch)?;

    let winning = console
        .read_winning_numbers()
        .context("reading winning numbers")?;
    let bonus = console
        .read_bonus_number(&winning)
        .context("reading bonus number")?;

    let summary = ResultAggregator::evaluate(&batch, &winning, bonus)?;
    console.print_summary(&summary)?;
    Ok(summary)
}
