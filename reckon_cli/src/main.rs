//! # Reckon CLI Application
//!
//! Terminal front end for reckon_core. All arithmetic happens in the core;
//! this binary only reads input, prints results and reports errors.
//!
//! ```text
//! reckon list                  List every calculator by category
//! reckon catalog               Print the calculator reference as markdown
//! reckon run <file|->          Run a JSON calculation record
//! reckon worksheet <path> [--save]
//!                              Recompute every entry of a saved worksheet
//! reckon emi                   Interactive loan payment prompt
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=debug` to see dispatch and validation
//! events.

use std::io::{self, BufRead, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use reckon_core::calculations::amortization::{calculate_loan, LoanInput, PaymentFrequency};
use reckon_core::catalog::{catalog_markdown, CalculatorId, Category};
use reckon_core::validation::{parse_choice, parse_number};
use reckon_core::{calculate, load_worksheet, save_worksheet, CalcError, CalcResult, CalculationItem, WorksheetSettings};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage:
  reckon list
  reckon catalog
  reckon run <file|->
  reckon worksheet <path> [--save]
  reckon emi";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str);

    let outcome = match command {
        Some("list") => {
            list_calculators();
            Ok(())
        }
        Some("catalog") => {
            print!("{}", catalog_markdown());
            Ok(())
        }
        Some("run") => match args.get(1) {
            Some(source) => run_record(source),
            None => return usage_error(),
        },
        Some("worksheet") => match args.get(1) {
            Some(path) => recompute_worksheet(Path::new(path), args.iter().any(|a| a == "--save")),
            None => return usage_error(),
        },
        Some("emi") => interactive_emi(),
        Some("help") | Some("--help") | Some("-h") | None => {
            println!("Reckon - everyday calculators");
            println!();
            println!("{}", USAGE);
            Ok(())
        }
        Some(other) => {
            eprintln!("Unknown command '{}'", other);
            return usage_error();
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn usage_error() -> ExitCode {
    eprintln!("{}", USAGE);
    ExitCode::from(2)
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn list_calculators() {
    for category in Category::ALL {
        println!("{}", category.display_name());
        for id in CalculatorId::in_category(category) {
            let meta = id.metadata();
            println!("  {:<22} {}", meta.slug, meta.description);
        }
        println!();
    }
}

fn read_source(source: &str) -> CalcResult<String> {
    tracing::debug!(source, "reading calculation record");
    if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CalcError::file_error("read", "stdin", e.to_string()))?;
        Ok(buf)
    } else {
        std::fs::read_to_string(source).map_err(|e| CalcError::file_error("read", source, e.to_string()))
    }
}

/// Run one `CalculationItem` record and print its output as JSON.
fn run_record(source: &str) -> CalcResult<()> {
    let text = read_source(source)?;
    let item: CalculationItem =
        serde_json::from_str(&text).map_err(|e| CalcError::SerializationError { reason: e.to_string() })?;

    let meta = item.calculator_id().metadata();
    let output = calculate(&item)?;

    println!("{} ({})", meta.name, meta.formula);
    println!();
    let json = serde_json::to_string_pretty(&output).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;
    println!("{}", json);
    Ok(())
}

fn recompute_worksheet(path: &Path, save: bool) -> CalcResult<()> {
    let mut sheet = load_worksheet(path)?;
    let failures = sheet.recompute_all();

    println!("{} ({} entries, {} rejected)", sheet.meta.title, sheet.item_count(), failures);
    println!();
    for (id, entry) in sheet.entries_by_label() {
        let name = entry.draft.calculator_id().metadata().name;
        match (&entry.last_result, &entry.last_error) {
            (Some(_), _) => println!("  [ok]   {:<24} {:<22} {}", entry.label, name, id),
            (None, Some(err)) => println!("  [fail] {:<24} {:<22} {}", entry.label, name, err),
            (None, None) => println!("  [--]   {:<24} {}", entry.label, name),
        }
    }

    if save {
        save_worksheet(&sheet, path)?;
        println!();
        println!("Saved {}", path.display());
    }
    Ok(())
}

/// Ask until the answer parses. `None` means stdin closed.
fn prompt_until<T>(prompt: &str, parse: impl Fn(&str) -> CalcResult<T>) -> Option<T> {
    let stdin = io::stdin();
    loop {
        print!("{}", prompt);
        io::stdout().flush().ok()?;

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }
        match parse(&line) {
            Ok(value) => return Some(value),
            Err(e) => println!("  {}", e),
        }
    }
}

fn interactive_emi() -> CalcResult<()> {
    println!("Loan payment (EMI)");
    println!("==================");
    println!();

    let closed = || CalcError::missing_field("stdin");
    let principal = prompt_until("Loan amount: ", |s| parse_number("principal", s)).ok_or_else(closed)?;
    let annual_rate_pct =
        prompt_until("Annual interest rate (%): ", |s| parse_number("annual_rate_pct", s)).ok_or_else(closed)?;
    let term_years = prompt_until("Term (years): ", |s| parse_number("term_years", s)).ok_or_else(closed)?;
    let frequency = prompt_until("Payment frequency [monthly]: ", |s| {
        if s.trim().is_empty() {
            Ok(PaymentFrequency::Monthly)
        } else {
            parse_choice::<PaymentFrequency>("frequency", s)
        }
    })
    .ok_or_else(closed)?;

    let input = LoanInput {
        principal,
        annual_rate_pct,
        term_years,
        frequency,
    };
    let result = calculate_loan(&input)?;
    let money = WorksheetSettings::default();

    println!();
    println!("═══════════════════════════════════════");
    println!("  Payment ({}):  {}", frequency, money.format_amount(result.periodic_payment));
    println!("  Payments:         {}", result.number_of_payments);
    println!("  Total paid:       {}", money.format_amount(result.total_payment));
    println!("  Total interest:   {}", money.format_amount(result.total_interest));
    println!("  Interest share:   {:.1}%", result.interest_share_pct);
    println!("═══════════════════════════════════════");
    Ok(())
}
