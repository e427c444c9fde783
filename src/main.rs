//! PPA Projection CLI
//!
//! Command-line interface for running PPA cash-flow projections

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use ppa_projection::analysis::{PpaAnalysis, Severity, TermField};
use ppa_projection::format::{format_currency, format_levelized_cost, format_percentage};
use ppa_projection::projection::NamedScenario;
use ppa_projection::scenario::{load_scenarios, ScenarioOutcome};
use ppa_projection::{ProjectionInput, ProjectionResult, ScenarioRunner};

#[derive(Parser, Debug)]
#[command(name = "ppa_projection", version, about = "PPA cash-flow projections")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project a single contract
    Project {
        #[command(flatten)]
        params: InputArgs,

        /// Write the year-by-year projection to this CSV file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Number of years to print to the console
        #[arg(long, default_value_t = 10)]
        show_years: usize,
    },
    /// Project every scenario in a CSV file
    Batch {
        scenarios: PathBuf,

        /// Write one summary row per scenario to this CSV file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Sweep escalation and discount rates around a base contract
    Sensitivity {
        #[command(flatten)]
        params: InputArgs,

        /// Escalation rates to try (%)
        #[arg(long, value_delimiter = ',', default_values_t = vec![1.0, 2.0, 3.0])]
        escalation: Vec<f64>,

        /// Discount rates to try (%)
        #[arg(long, value_delimiter = ',', default_values_t = vec![4.0, 5.0, 6.0])]
        discount: Vec<f64>,
    },
    /// Summarize the risk findings in an analysis JSON file
    Risks { analysis: PathBuf },
}

/// Contract parameters; unset flags fall back to the configured defaults
#[derive(Args, Debug)]
struct InputArgs {
    /// Base energy price ($/MWh)
    #[arg(long)]
    base_price: Option<f64>,
    /// Annual capacity (MW)
    #[arg(long)]
    annual_capacity: Option<f64>,
    /// Capacity factor (%)
    #[arg(long)]
    capacity_factor: Option<f64>,
    /// Contract duration (years)
    #[arg(long)]
    contract_years: Option<u32>,
    /// Annual price escalation (%)
    #[arg(long)]
    escalation_rate: Option<f64>,
    /// Discount rate (%)
    #[arg(long)]
    discount_rate: Option<f64>,
}

impl InputArgs {
    fn resolve(&self, defaults: &ProjectionInput) -> ProjectionInput {
        ProjectionInput {
            base_price: self.base_price.unwrap_or(defaults.base_price),
            annual_capacity: self.annual_capacity.unwrap_or(defaults.annual_capacity),
            capacity_factor: self.capacity_factor.unwrap_or(defaults.capacity_factor),
            contract_years: self.contract_years.unwrap_or(defaults.contract_years),
            escalation_rate: self.escalation_rate.unwrap_or(defaults.escalation_rate),
            discount_rate: self.discount_rate.unwrap_or(defaults.discount_rate),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let runner = ScenarioRunner::from_env().context("Invalid analyzer configuration")?;

    match cli.command {
        Command::Project { params, output, show_years } => {
            let input = params.resolve(&runner.config().defaults);
            let result = runner.run(&input).context("Projection rejected")?;
            print_projection(&input, &result, show_years);
            if let Some(path) = output {
                write_projection_csv(&path, &result)?;
                println!("\nFull results written to: {}", path.display());
            }
        }
        Command::Batch { scenarios, output } => {
            let scenarios = load_scenarios(&scenarios)
                .with_context(|| format!("Failed to load scenarios from {}", scenarios.display()))?;
            run_batch(&runner, &scenarios, output.as_deref())?;
        }
        Command::Sensitivity { params, escalation, discount } => {
            let base = params.resolve(&runner.config().defaults);
            run_sensitivity(&runner, &base, &escalation, &discount)?;
        }
        Command::Risks { analysis } => {
            let json = std::fs::read_to_string(&analysis)
                .with_context(|| format!("Unable to read {}", analysis.display()))?;
            let analysis = PpaAnalysis::from_json(&json).context("Invalid analysis payload")?;
            print_risks(&analysis);
        }
    }

    Ok(())
}

fn print_projection(input: &ProjectionInput, result: &ProjectionResult, show_years: usize) {
    println!("PPA Projection");
    println!("==============\n");
    println!("  Base Price:      ${:.2}/MWh", input.base_price);
    println!("  Capacity:        {:.1} MW @ {}", input.annual_capacity, format_percentage(input.capacity_factor, 1));
    println!("  Contract:        {} years", input.contract_years);
    println!("  Escalation:      {}", format_percentage(input.escalation_rate, 1));
    println!("  Discount Rate:   {}", format_percentage(input.discount_rate, 1));
    println!("  Generation:      {:.0} MWh/year", result.annual_generation);
    println!();

    println!("{:>4} {:>10} {:>16} {:>16} {:>18} {:>18}",
        "Year", "Price", "Revenue", "PV", "Cum Revenue", "Cum NPV");
    println!("{}", "-".repeat(87));

    for row in result.rows().take(show_years) {
        println!("{:>4} {:>10.2} {:>16.2} {:>16.2} {:>18.2} {:>18.2}",
            row.year, row.price, row.revenue, row.present_value, row.cumulative_revenue, row.cumulative_npv);
    }
    if result.len() > show_years {
        println!("... ({} more years)", result.len() - show_years);
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Total Revenue:     {}", format_currency(summary.total_revenue));
    println!("  Net Present Value: {}", format_currency(summary.net_present_value));
    println!("  Levelized Cost:    {}", format_levelized_cost(summary.levelized_cost));
    println!("  Final Year Price:  ${:.2}/MWh", summary.final_year_price);
}

/// One year of the projection CSV
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ProjectionCsvRow {
    year: u32,
    price: f64,
    revenue: f64,
    present_value: f64,
    cumulative_revenue: f64,
    #[serde(rename = "CumulativeNPV")]
    cumulative_npv: f64,
}

/// One scenario of the batch summary CSV
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct BatchCsvRow<'a> {
    scenario: &'a str,
    years: usize,
    total_revenue: f64,
    net_present_value: f64,
    levelized_cost: f64,
}

fn write_projection_csv(path: &Path, result: &ProjectionResult) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Unable to create {}", path.display()))?;
    write_projection_rows(file, result)
}

fn write_projection_rows<W: Write>(writer: W, result: &ProjectionResult) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in result.rows() {
        csv_writer.serialize(ProjectionCsvRow {
            year: row.year,
            price: row.price,
            revenue: row.revenue,
            present_value: row.present_value,
            cumulative_revenue: row.cumulative_revenue,
            cumulative_npv: row.cumulative_npv,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Summary rows for accepted scenarios; names are quoted as needed
fn write_batch_rows<W: Write>(writer: W, outcomes: &[ScenarioOutcome]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for outcome in outcomes {
        if let Ok(result) = &outcome.result {
            csv_writer.serialize(BatchCsvRow {
                scenario: &outcome.name,
                years: result.len(),
                total_revenue: result.total_revenue,
                net_present_value: result.net_present_value,
                levelized_cost: result.levelized_cost,
            })?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}

fn run_batch(runner: &ScenarioRunner, scenarios: &[NamedScenario], output: Option<&Path>) -> Result<()> {
    let outcomes = runner.run_batch(scenarios);

    println!("{:<24} {:>6} {:>12} {:>12} {:>14}", "Scenario", "Years", "Revenue", "NPV", "Levelized");
    println!("{}", "-".repeat(72));

    let mut rejected = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(result) => println!("{:<24} {:>6} {:>12} {:>12} {:>14}",
                outcome.name,
                result.len(),
                format_currency(result.total_revenue),
                format_currency(result.net_present_value),
                format_levelized_cost(result.levelized_cost),
            ),
            Err(e) => {
                rejected += 1;
                println!("{:<24} rejected: {}", outcome.name, e);
            }
        }
    }
    println!("\n{} scenarios, {} rejected", outcomes.len(), rejected);

    if let Some(path) = output {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        write_batch_rows(file, &outcomes)?;
        println!("Summary written to: {}", path.display());
    }

    Ok(())
}

fn run_sensitivity(runner: &ScenarioRunner, base: &ProjectionInput, escalation: &[f64], discount: &[f64]) -> Result<()> {
    let grid = runner
        .sensitivity(base, escalation, discount)
        .context("Sensitivity run rejected")?;

    println!("Net present value by escalation (rows) and discount rate (columns)\n");
    print!("{:>10}", "");
    for rate in discount {
        print!(" {:>10}", format_percentage(*rate, 1));
    }
    println!();

    for (row, rate) in grid.chunks(discount.len().max(1)).zip(escalation) {
        print!("{:>10}", format_percentage(*rate, 1));
        for point in row {
            print!(" {:>10}", format_currency(point.net_present_value));
        }
        println!();
    }

    Ok(())
}

fn print_risks(analysis: &PpaAnalysis) {
    if !analysis.summary.is_empty() {
        println!("{}\n", analysis.summary);
    }

    let counts = analysis.severity_counts();
    println!("Risks by severity ({} total):", counts.total());
    for severity in Severity::ALL {
        println!("  {:<8} {}", severity.label(), counts.get(severity));
    }

    println!("\nRisks by category:");
    for category in analysis.category_breakdown() {
        println!("  {:<16} {} ({} high)", category.name, category.count, category.high_count);
    }

    let high = analysis.filter(&[Severity::High], &[], "");
    if !high.is_empty() {
        println!("\nHigh severity findings:");
        for risk in high {
            println!("  #{} [{}] {}", risk.id, risk.category, risk.description);
            if !risk.mitigation.is_empty() {
                println!("      Mitigation: {}", risk.mitigation);
            }
        }
    }

    if let Some(terms) = &analysis.financial_terms {
        println!("\nKey financial terms:");
        for field in TermField::ALL {
            println!("  {}: {}", field.label(), terms.display(field));
        }
    }
}
