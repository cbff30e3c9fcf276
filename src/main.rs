//! insights-engine CLI
//!
//! Compute dashboard insights for a budget plan snapshot from the
//! command line.
//!
//! # Usage
//!
//! ```bash
//! # Full insights (recap + upcoming + tips) from a JSON snapshot
//! insights-engine insights --input plan.json
//!
//! # Output as JSON
//! insights-engine insights --input plan.json --format json
//!
//! # Just the previous-period recap
//! insights-engine recap --input plan.json
//!
//! # Generate a random snapshot for testing
//! insights-engine generate --bills 8 --debts 3 --output plan.json
//! ```

use chrono::{Datelike, NaiveDate, Utc};
use insights_engine::core::period::{Period, PeriodContext};
use insights_engine::insights::dashboard::{compute_dashboard_insights, PlanSnapshot};
use insights_engine::insights::recap::compute_period_recap;
use insights_engine::simulation::scenario::{generate_random_plan, ScenarioConfig};
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"insights-engine — financial-obligation insights for budget plans

USAGE:
    insights-engine <COMMAND> [OPTIONS]

COMMANDS:
    insights    Compute recap, upcoming payments, and tips
    recap       Compute only the previous-period recap
    generate    Generate a random plan snapshot (for testing)
    help        Show this message

OPTIONS (insights, recap):
    --input <FILE>      Path to a JSON plan snapshot
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (generate):
    --bills <N>         Bills per period (default: 8)
    --debts <N>         Debt accounts (default: 3)
    --output <FILE>     Write to file instead of stdout

EXAMPLES:
    insights-engine insights --input plan.json
    insights-engine insights --input plan.json --format json
    insights-engine recap --input plan.json
    insights-engine generate --bills 10 --debts 4 --output plan.json"#
    );
}

/// JSON schema for the snapshot file: the plan data plus the evaluation
/// context.
#[derive(serde::Deserialize, serde::Serialize)]
struct PlanFile {
    context: ContextInput,
    #[serde(flatten)]
    snapshot: PlanSnapshot,
}

#[derive(serde::Deserialize, serde::Serialize)]
struct ContextInput {
    year: i32,
    month: u32,
    pay_date: u32,
    today: NaiveDate,
}

fn load_plan(path: &str) -> (PlanSnapshot, PeriodContext) {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    let file: PlanFile = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "context": {{ "year": 2026, "month": 3, "pay_date": 25, "today": "2026-03-10" }},
  "obligations": [
    {{ "id": "ob-1", "name": "Rent", "amount": 900.0, "year": 2026, "month": 3 }}
  ],
  "debts": [],
  "allocations": [],
  "forecasts": []
}}"#
        );
        process::exit(1);
    });

    let period = Period::new(file.context.year, file.context.month);
    let ctx = PeriodContext::checked(period, file.context.pay_date, file.context.today)
        .unwrap_or_else(|e| {
            eprintln!("Invalid context: {}", e);
            process::exit(1);
        });

    (file.snapshot, ctx)
}

fn parse_input_format(args: &[String]) -> (Option<String>, String) {
    let mut input_path = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }
    (input_path, format)
}

fn cmd_insights(args: &[String]) {
    let (input_path, format) = parse_input_format(args);
    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let (snapshot, ctx) = load_plan(&path);
    let insights = compute_dashboard_insights(&snapshot, &ctx);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&insights).unwrap());
        return;
    }

    match &insights.recap {
        Some(recap) => println!("{}\n", recap),
        None => println!("(recap suppressed by caller)\n"),
    }

    println!("=== Upcoming payments ===");
    if insights.upcoming.is_empty() {
        println!("  nothing due");
    }
    for item in &insights.upcoming {
        println!(
            "  {:<24} {:>10.2}  due {}  ({:?}, {} days)",
            item.name, item.amount, item.due_date, item.urgency, item.days_until_due
        );
    }

    println!("\n=== Tips ===");
    if insights.tips.is_empty() {
        println!("  all clear");
    }
    for tip in &insights.tips {
        println!("  [{:>3}] {}", tip.priority.unwrap_or(0), tip.title);
        println!("        {}", tip.detail);
    }
}

fn cmd_recap(args: &[String]) {
    let (input_path, format) = parse_input_format(args);
    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let (snapshot, ctx) = load_plan(&path);
    let previous = ctx.period.prev();
    let recap = compute_period_recap(
        &snapshot.obligations.for_period(previous),
        &ctx.for_period(previous),
    );

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&recap).unwrap());
    } else {
        println!("{}", recap);
    }
}

fn cmd_generate(args: &[String]) {
    let mut config = ScenarioConfig::default();
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--bills" => {
                i += 1;
                config.bills_per_period =
                    args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                        eprintln!("--bills requires a number");
                        process::exit(1);
                    });
            }
            "--debts" => {
                i += 1;
                config.debt_count =
                    args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                        eprintln!("--debts requires a number");
                        process::exit(1);
                    });
            }
            "--output" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file path");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    // The only clock read in the binary; the engine itself gets the
    // date injected through the generated context.
    let today = Utc::now().date_naive();
    let period = Period::new(today.year(), today.month());
    let ctx = PeriodContext::new(period, 25, today);
    let snapshot = generate_random_plan(&config, &ctx);

    let file = PlanFile {
        context: ContextInput {
            year: period.year,
            month: period.month,
            pay_date: ctx.pay_date,
            today,
        },
        snapshot,
    };

    let json = serde_json::to_string_pretty(&file).unwrap();

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!(
            "Generated {} obligations and {} debts → {}",
            file.snapshot.obligations.len(),
            file.snapshot.debts.len(),
            path
        );
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "insights" => cmd_insights(rest),
        "recap" => cmd_recap(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
