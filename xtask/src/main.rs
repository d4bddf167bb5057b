use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "prefix_tree workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the trie benchmarks and write a report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH: &str = "trie_benchmark";
const CRITERION_DIR: &str = "target/criterion";
const REPORT_PATH: &str = "benchmark_results/report.md";

/// Subset of criterion's `benchmark.json`.
#[derive(Deserialize)]
struct BenchmarkInfo {
    group_id: String,
    function_id: Option<String>,
    #[serde(default)]
    throughput: Option<serde_json::Value>,
}

/// Subset of criterion's `estimates.json`.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Operations per second, keyed by group then function.
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!(">>> Running {BENCH}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "--bench", BENCH]);

    if quick {
        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to run bench {BENCH}"))?;
    if !status.success() {
        anyhow::bail!("Benchmark {BENCH} failed");
    }

    println!("Finished {BENCH} in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new(CRITERION_DIR);
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, &mut results)?;

    let report_path = Path::new(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;
    write_report(&mut file, &results)?;

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn write_report(out: &mut impl Write, results: &Results) -> Result<()> {
    writeln!(out, "# Prefix Tree Benchmark Report")?;

    for (group, functions) in results {
        // Relative numbers are against the std hash set of the same group.
        let baseline = functions
            .iter()
            .find(|(name, _)| name.starts_with("std_hashset"))
            .map(|(_, ops)| *ops);

        writeln!(out, "\n## {group}\n")?;
        writeln!(out, "| Function | Ops/s | vs HashSet |")?;
        writeln!(out, "|---|---|---|")?;
        for (function, ops) in functions {
            let rel = match baseline {
                Some(base) if base > 0.0 => format!("**{:.2}x**", ops / base),
                _ => "-".to_string(),
            };
            writeln!(out, "| {function} | {} | {rel} |", format_ops(*ops))?;
        }
    }

    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks criterion's output looking for `<bench>/new/{benchmark,estimates}.json`.
fn collect_results(dir: &Path, results: &mut Results) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("new") {
            collect_results(&path, results)?;
            continue;
        }

        let (Ok(info), Ok(estimates)) = (
            fs::read_to_string(path.join("benchmark.json")),
            fs::read_to_string(path.join("estimates.json")),
        ) else {
            continue;
        };
        let info: BenchmarkInfo = serde_json::from_str(&info)
            .with_context(|| format!("Malformed benchmark.json in {}", path.display()))?;
        let estimates: Estimates = serde_json::from_str(&estimates)
            .with_context(|| format!("Malformed estimates.json in {}", path.display()))?;

        let time_ns = estimates.mean.point_estimate;
        if time_ns <= 0.0 {
            continue;
        }
        let elements = info
            .throughput
            .as_ref()
            .and_then(|t| t.get("Elements"))
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(1.0);

        results
            .entry(info.group_id)
            .or_default()
            .insert(info.function_id.unwrap_or_default(), elements * 1e9 / time_ns);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ops() {
        assert_eq!(format_ops(12.4), "12");
        assert_eq!(format_ops(2_500.0), "2.50K");
        assert_eq!(format_ops(3_000_000.0), "3.00M");
    }

    #[test]
    fn test_parse_criterion_files() {
        let info: BenchmarkInfo = serde_json::from_str(
            r#"{"group_id":"trie_get","function_id":"prefix_tree_contains","value_str":null,
                "throughput":{"Elements":1000},"full_id":"trie_get/prefix_tree_contains",
                "directory_name":"trie_get/prefix_tree_contains","title":"trie_get/prefix_tree_contains"}"#,
        )
        .unwrap();
        assert_eq!(info.group_id, "trie_get");
        assert_eq!(info.function_id.as_deref(), Some("prefix_tree_contains"));

        let estimates: Estimates =
            serde_json::from_str(r#"{"mean":{"point_estimate":2000.0,"standard_error":1.0}}"#).unwrap();
        assert_eq!(estimates.mean.point_estimate, 2000.0);
    }

    #[test]
    fn test_write_report() {
        let mut results = Results::new();
        let group = results.entry("trie_insert".to_string()).or_default();
        group.insert("prefix_tree_insert".to_string(), 2_000_000.0);
        group.insert("std_hashset_insert".to_string(), 1_000_000.0);

        let mut out = Vec::new();
        write_report(&mut out, &results).unwrap();
        let report = String::from_utf8(out).unwrap();

        assert!(report.contains("## trie_insert"));
        assert!(report.contains("| prefix_tree_insert | 2.00M | **2.00x** |"));
        assert!(report.contains("| std_hashset_insert | 1000.00K | **1.00x** |"));
    }
}
