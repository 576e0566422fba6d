//! Command-line interface.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `check` | Decide whether a vehicle may circulate |
//! | `holidays` | List a year's holidays |
//! | `serve` | Run the HTTP API |
//!
//! # Examples
//!
//! ```bash
//! pico-placa check --plate PBX-1231 --date 2024-03-18 --time 08:00 --explain
//! pico-placa check --online            # prompts for plate, date and time
//! pico-placa holidays 2025 --province none
//! pico-placa serve --addr 0.0.0.0:8080
//! ```

mod commands;
mod error;

use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};

use crate::domain::{InvalidProvince, Province};

pub use commands::{prompt_field, run, run_check, run_holidays, serve};
pub use error::CliError;

/// Quito Pico y Placa circulation checker.
#[derive(Debug, Parser)]
#[command(name = "pico-placa", version, about = "Quito Pico y Placa circulation checker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decide whether a vehicle may be on the road.
    Check(CheckArgs),
    /// List the public holidays of a year.
    Holidays(HolidaysArgs),
    /// Run the HTTP API.
    Serve(ServeArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Plate, e.g. PBX-1234 (prompted when omitted).
    #[arg(long)]
    pub plate: Option<String>,

    /// Date as YYYY-MM-DD (prompted when omitted).
    #[arg(long)]
    pub date: Option<String>,

    /// Time as HH:MM (prompted when omitted).
    #[arg(long)]
    pub time: Option<String>,

    /// Ask the remote holiday provider instead of the local calendar.
    #[arg(long)]
    pub online: bool,

    /// Province whose local holidays apply: EC-P or none.
    #[arg(long, default_value = "EC-P", value_parser = parse_province)]
    pub province: ProvinceSelection,

    /// Also print why.
    #[arg(long)]
    pub explain: bool,
}

#[derive(Debug, Clone, Args)]
pub struct HolidaysArgs {
    /// Calendar year.
    pub year: i32,

    /// Province whose local holidays apply: EC-P or none.
    #[arg(long, default_value = "EC-P", value_parser = parse_province)]
    pub province: ProvinceSelection,
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Listen address; overrides PICO_PLACA_ADDR.
    #[arg(long)]
    pub addr: Option<SocketAddr>,
}

/// A `--province` value: a province, or `none` for the national calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvinceSelection(pub Option<Province>);

fn parse_province(s: &str) -> Result<ProvinceSelection, InvalidProvince> {
    Province::parse_selection(s).map(ProvinceSelection)
}
