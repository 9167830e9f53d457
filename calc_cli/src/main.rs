//! # Courtside CLI
//!
//! Evaluate the planning models from the terminal, or print the rendered
//! roadmap page as an outline.
//!
//! ```text
//! calc_cli budget --base 50 --tickets 10 --debt 4
//! calc_cli transfer --minutes 80 --nil 50 --json
//! calc_cli --config seeds.json page
//! ```
//!
//! Field values are passed as raw text and go through the same coercion as
//! the page's form inputs: blank or non-numeric text counts as zero. Fields
//! not given on the command line keep their configured seed values.

mod logger;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use calc_core::calculations::CalculatorKind;
use calc_core::{CalcError, CalcResult, Page, PageConfig};

#[derive(Debug, Parser)]
#[command(name = "calc_cli", version, about = "Courtside roadmap page and planning models")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON file with seed values for the calculator forms
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit JSON instead of display text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate the program budget (millions)
    Budget(BudgetArgs),
    /// Score transfer pressure (0-100)
    Transfer(TransferArgs),
    /// Print the rendered page document
    Page,
}

#[derive(Debug, Args)]
struct BudgetArgs {
    #[arg(long, allow_negative_numbers = true)]
    base: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    tickets: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    media: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    boosters: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    units: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    debt: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    staffing: Option<String>,
}

impl BudgetArgs {
    fn fields(&self) -> [(&'static str, Option<&str>); 7] {
        [
            ("base", self.base.as_deref()),
            ("tickets", self.tickets.as_deref()),
            ("media", self.media.as_deref()),
            ("boosters", self.boosters.as_deref()),
            ("units", self.units.as_deref()),
            ("debt", self.debt.as_deref()),
            ("staffing", self.staffing.as_deref()),
        ]
    }
}

#[derive(Debug, Args)]
struct TransferArgs {
    #[arg(long, allow_negative_numbers = true)]
    minutes: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    nil: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    trust: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    style: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    losing: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    academic: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    peer: Option<String>,
}

impl TransferArgs {
    fn fields(&self) -> [(&'static str, Option<&str>); 7] {
        [
            ("minutes", self.minutes.as_deref()),
            ("nil", self.nil.as_deref()),
            ("trust", self.trust.as_deref()),
            ("style", self.style.as_deref()),
            ("losing", self.losing.as_deref()),
            ("academic", self.academic.as_deref()),
            ("peer", self.peer.as_deref()),
        ]
    }
}

fn load_config(path: Option<&PathBuf>) -> CalcResult<PageConfig> {
    match path {
        Some(path) => PageConfig::load(path),
        None => Ok(PageConfig::default()),
    }
}

/// Apply command-line field text to a group, then report its output.
fn run_model(page: &mut Page, kind: CalculatorKind, fields: &[(&str, Option<&str>)], json: bool) -> CalcResult<String> {
    for (field, text) in fields {
        if let Some(text) = text {
            tracing::debug!(group = %kind, field, text, "applying field");
            page.set_field(kind, field, *text)?;
        }
    }

    if json {
        let group = page
            .group(kind)
            .ok_or_else(|| CalcError::element_not_found(kind.container_selector()))?;
        let result = kind.evaluate(&group.read_values(page.document()));
        Ok(serde_json::to_string_pretty(&result)?)
    } else {
        page.output_text(kind)
            .ok_or_else(|| CalcError::element_not_found(kind.output_selector()))
    }
}

fn page_report(page: &Page, json: bool) -> CalcResult<String> {
    if !json {
        return Ok(page.outline());
    }
    let outputs: serde_json::Map<String, serde_json::Value> = CalculatorKind::ALL
        .iter()
        .filter_map(|kind| {
            page.output_text(*kind)
                .map(|text| (kind.key().to_string(), serde_json::Value::String(text)))
        })
        .collect();
    let report = serde_json::json!({
        "timeline": calc_core::content::annual_timeline(),
        "layers": calc_core::content::LAYERS,
        "milestones": calc_core::content::MILESTONES,
        "outputs": outputs,
    });
    Ok(serde_json::to_string_pretty(&report)?)
}

fn run(cli: &Cli) -> CalcResult<()> {
    let config = load_config(cli.config.as_ref())?;
    let mut page = Page::load(&config);
    for failure in page.failures() {
        tracing::warn!(stage = %failure.stage, error = %failure.error, "page setup incomplete");
    }

    let output = match &cli.command {
        Command::Budget(args) => run_model(&mut page, CalculatorKind::Budget, &args.fields(), cli.json)?,
        Command::Transfer(args) => run_model(&mut page, CalculatorKind::Transfer, &args.fields(), cli.json)?,
        Command::Page => page_report(&page, cli.json)?,
    };
    println!("{}", output.trim_end());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.error_code(), "{}", e);
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_budget_args() {
        let cli = Cli::try_parse_from(["calc_cli", "budget", "--base", "50", "--debt", "4"]).unwrap();
        match cli.command {
            Command::Budget(args) => {
                let fields = args.fields();
                assert_eq!(fields[0], ("base", Some("50")));
                assert_eq!(fields[1], ("tickets", None));
                assert_eq!(fields[5], ("debt", Some("4")));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["calc_cli", "transfer", "--minutes", "80", "--json", "-v"]).unwrap();
        assert!(cli.json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_run_model_applies_only_given_fields() {
        let mut page = Page::load(&PageConfig::empty());
        let args = BudgetArgs {
            base: Some("50".into()),
            tickets: None,
            media: None,
            boosters: None,
            units: None,
            debt: Some("4".into()),
            staffing: None,
        };
        let text = run_model(&mut page, CalculatorKind::Budget, &args.fields(), false).unwrap();
        assert_eq!(text, "Estimated Budget: $46.0M");
        assert_eq!(page.output_text(CalculatorKind::Budget).unwrap(), text);
    }

    #[test]
    fn test_parse_negative_field_values() {
        let cli = Cli::try_parse_from(["calc_cli", "budget", "--debt", "-5", "--base", "-12.5"]).unwrap();
        match cli.command {
            Command::Budget(args) => {
                assert_eq!(args.debt.as_deref(), Some("-5"));
                assert_eq!(args.base.as_deref(), Some("-12.5"));
            }
            other => panic!("unexpected command {:?}", other),
        }

        let cli = Cli::try_parse_from(["calc_cli", "transfer", "--peer", "-40"]).unwrap();
        match cli.command {
            Command::Transfer(args) => assert_eq!(args.peer.as_deref(), Some("-40")),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_negative_field_produces_deficit() {
        let cli = Cli::try_parse_from(["calc_cli", "budget", "--base", "-5"]).unwrap();
        let mut page = Page::load(&PageConfig::empty());
        let Command::Budget(args) = cli.command else {
            panic!("expected budget command");
        };
        let text = run_model(&mut page, CalculatorKind::Budget, &args.fields(), false).unwrap();
        assert_eq!(text, "Estimated Budget: $-5.0M");
    }

    #[test]
    fn test_run_model_json_output() {
        let mut page = Page::load(&PageConfig::empty());
        let fields = [("minutes", Some("80")), ("nil", Some("50")), ("peer", None)];
        let json = run_model(&mut page, CalculatorKind::Transfer, &fields, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "Transfer");
        // 0.30 * 80 + 0.20 * 50
        assert!((value["score"].as_f64().unwrap() - 34.0).abs() < 1e-9);
        assert_eq!(value["risk"], "Moderate");
    }

    #[test]
    fn test_page_report_json() {
        let page = Page::load(&PageConfig::default());
        let json = page_report(&page, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["timeline"].as_array().unwrap().len(), 11);
        assert_eq!(value["timeline"][0]["order"], 1);
        assert_eq!(value["layers"][4]["name"], "Narrative");
        assert_eq!(value["milestones"].as_array().unwrap().len(), 5);
        assert_eq!(value["outputs"]["budget"], "Estimated Budget: $61.0M");
        assert_eq!(value["outputs"]["transfer"], "Pressure Score: 38.0 / 100 (Moderate Risk)");
    }

    #[test]
    fn test_page_report_outline() {
        let page = Page::load(&PageConfig::default());
        let outline = page_report(&page, false).unwrap();
        assert!(outline.starts_with("<body>"));
        assert!(outline.contains("Pressure Score: 38.0 / 100 (Moderate Risk)"));
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let path = PathBuf::from("/no/such/seeds.json");
        assert_eq!(load_config(Some(&path)).unwrap_err().error_code(), "FILE_ERROR");
    }
}
