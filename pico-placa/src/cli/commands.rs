use std::io::{self, BufRead, Write};
use std::net::SocketAddr;

use tracing::{debug, info, warn};

use crate::calendar::holidays_for_year;
use crate::config::Settings;
use crate::domain::Query;
use crate::restriction::RestrictionEngine;
use crate::web::{AppState, create_router};

use super::error::CliError;
use super::{CheckArgs, Cli, Command, HolidaysArgs, ServeArgs};

/// Run a parsed command line.
pub async fn run(cli: Cli, settings: Settings) -> Result<(), CliError> {
    match cli.command {
        Command::Check(args) => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_check(&args, &settings, &mut stdin.lock(), &mut stdout).await
        }
        Command::Holidays(args) => run_holidays(&args, &mut io::stdout()),
        Command::Serve(ServeArgs { addr }) => serve(&settings, addr).await,
    }
}

/// Return `value`, or ask for it on `input` when absent.
///
/// End of input before an answer is a [`CliError::MissingInput`].
pub fn prompt_field<R: BufRead, W: Write>(
    value: Option<String>,
    field: &'static str,
    hint: &str,
    input: &mut R,
    out: &mut W,
) -> Result<String, CliError> {
    if let Some(v) = value {
        return Ok(v);
    }

    write!(out, "Enter the {field} ({hint}): ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::MissingInput { field });
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Check one vehicle and print the verdict.
pub async fn run_check<R: BufRead, W: Write>(
    args: &CheckArgs,
    settings: &Settings,
    input: &mut R,
    out: &mut W,
) -> Result<(), CliError> {
    // Resolve the source first so a missing key fails before any prompt.
    let source = settings.holiday_source(args.online, args.province.0)?;
    if args.online && args.province.0.is_some() {
        debug!("province is ignored by the remote provider");
    }

    let plate = prompt_field(args.plate.clone(), "plate", "e.g. PBX-1234", input, out)?;
    let date = prompt_field(args.date.clone(), "date", "YYYY-MM-DD", input, out)?;
    let time = prompt_field(args.time.clone(), "time", "HH:MM", input, out)?;
    let query = Query::parse(&plate, &date, &time)?;

    let engine = RestrictionEngine::new(source);
    let verdict = engine.evaluate(&query).await?;

    writeln!(out, "{}", verdict.sentence(&query))?;
    if args.explain {
        writeln!(out, "Reason: {}.", verdict.explanation())?;
    }
    Ok(())
}

/// Print a year's holidays in date order.
pub fn run_holidays<W: Write>(args: &HolidaysArgs, out: &mut W) -> Result<(), CliError> {
    let calendar = holidays_for_year(args.year, args.province.0)?;

    match calendar.province() {
        Some(p) => writeln!(out, "Holidays in {} ({p}):", calendar.year())?,
        None => writeln!(out, "Holidays in {} (national):", calendar.year())?,
    }
    for (date, name) in calendar.iter() {
        writeln!(out, "  {}  {}  {name}", date.format("%Y-%m-%d"), date.format("%a"))?;
    }
    Ok(())
}

/// Serve the HTTP API until interrupted.
pub async fn serve(settings: &Settings, addr: Option<SocketAddr>) -> Result<(), CliError> {
    let addr = addr.unwrap_or(settings.listen_addr);
    let state = AppState::from_settings(settings)?;
    if state.remote.is_none() {
        warn!("HOLIDAYS_API_KEY not set; online checks will fail");
    }

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "pico-placa listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
