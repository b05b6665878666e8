use std::env;
use std::time::Instant;

use path_mwis::{
    best_total, default_block_len, solve_blocked, PrefixTable,
};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let strategies = strategies();
    let total = strategies.len();

    eprintln!("\n{}", "=".repeat(72));
    eprintln!("Non-Adjacent-Sum Scaling Probe");
    eprintln!("{}", "=".repeat(72));
    eprintln!();
    eprintln!("Runs every solving strategy across increasing input sizes to verify:");
    eprintln!(
        "  • Correctness: results match the direct recurrence (up to size {})",
        options.verify_limit
    );
    eprintln!("  • Performance: wall-clock time scales linearly");
    eprintln!("  • Memory: RSS stays flat for the constant-space strategies");
    eprintln!();
    eprintln!("{}", "=".repeat(72));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    for (idx, strategy) in strategies.iter().enumerate() {
        eprintln!("[{}/{}] Probing strategy '{}'...", idx + 1, total, strategy.name);
        measurements.extend(run_strategy(strategy, &options, &mut sys));
        eprintln!();
    }

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 1_048_576usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest sequence length checked against the direct recurrence (default: 1048576)
  -h, --help                    Print this help message

Examples:
  cargo run --release --bin scale_probe
  cargo run --release --bin scale_probe -- --format table --verify-limit 65536
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a non-negative integer".to_string())
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    strategy: &'static str,
    len: usize,
    result: i64,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

struct Strategy {
    name: &'static str,
    solve: fn(&[i64]) -> i64,
}

fn strategies() -> Vec<Strategy> {
    let mut list = vec![
        Strategy {
            name: "rolling",
            solve: strategy_rolling,
        },
        Strategy {
            name: "prefix_table",
            solve: strategy_prefix_table,
        },
        Strategy {
            name: "blocked_sqrt",
            solve: strategy_blocked_sqrt,
        },
        Strategy {
            name: "blocked_fixed",
            solve: strategy_blocked_fixed,
        },
    ];
    #[cfg(feature = "parallel")]
    list.push(Strategy {
        name: "parallel",
        solve: strategy_parallel,
    });
    list
}

fn strategy_rolling(seq: &[i64]) -> i64 {
    best_total(seq)
}

fn strategy_prefix_table(seq: &[i64]) -> i64 {
    PrefixTable::build(seq).final_best()
}

fn strategy_blocked_sqrt(seq: &[i64]) -> i64 {
    solve_blocked(seq, default_block_len(seq.len()))
}

fn strategy_blocked_fixed(seq: &[i64]) -> i64 {
    solve_blocked(seq, 4096)
}

#[cfg(feature = "parallel")]
fn strategy_parallel(seq: &[i64]) -> i64 {
    path_mwis::solve_parallel(seq, default_block_len(seq.len()))
}

fn run_strategy(strategy: &Strategy, options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[4096, 16384, 65536, 262144, 1048576, 4194304];
    let total = SIZES.len();

    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] size {}... ", idx + 1, total, len);
            let sequence = deterministic_values(len);

            let before = rss_kib(sys);
            let start = Instant::now();
            let result = (strategy.solve)(&sequence);
            let wall_s = start.elapsed().as_secs_f64();
            let after = rss_kib(sys);

            let (verification_status, verification_detail) = if len <= options.verify_limit {
                let baseline = reference_recurrence(&sequence);
                if baseline == result {
                    (VerificationStatus::Passed, None)
                } else {
                    (
                        VerificationStatus::Failed,
                        Some(format!("expected {baseline}, got {result}")),
                    )
                }
            } else {
                (VerificationStatus::NotChecked, None)
            };

            let m = Measurement {
                strategy: strategy.name,
                len,
                result,
                wall_s,
                rss_delta_kib: after.saturating_sub(before),
                verification_status,
                verification_detail,
            };
            eprintln!(
                "{} result={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                m.result,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("{}", "=".repeat(72));
    eprintln!("Probe Summary");
    eprintln!("{}", "=".repeat(72));

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }
    eprintln!(
        "  Runs: {} total, {} passed, {} failed, {} not checked (size > {})",
        measurements.len(),
        passed,
        failed,
        not_checked,
        options.verify_limit
    );

    if failed > 0 {
        eprintln!("  Failed runs:");
        for m in measurements {
            if matches!(m.verification_status, VerificationStatus::Failed) {
                eprintln!(
                    "    ✗ {} (len={}): {}",
                    m.strategy,
                    m.len,
                    m.verification_detail.as_deref().unwrap_or("no detail")
                );
            }
        }
    } else {
        eprintln!("  ✓ Every verified run matched the direct recurrence.");
    }
    eprintln!("{}", "=".repeat(72));
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("strategy,len,result,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{:.6},{},{},\"{}\"",
            m.strategy,
            m.len,
            m.result,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col = "strategy".len();
    for m in measurements {
        col = col.max(m.strategy.len());
    }

    println!(
        "{:<col$}  {:>9}  {:>14}  {:>10}  {:>14}  {:>12}",
        "strategy",
        "len",
        "result",
        "wall_s",
        "rss_delta_kib",
        "status",
        col = col
    );
    println!(
        "{:-<col$}  {:-<9}  {:-<14}  {:-<10}  {:-<14}  {:-<12}",
        "",
        "",
        "",
        "",
        "",
        "",
        col = col
    );
    for m in measurements {
        println!(
            "{:<col$}  {:>9}  {:>14}  {:>10.6}  {:>14}  {:>12}",
            m.strategy,
            m.len,
            m.result,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            col = col
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"strategy\":\"{}\",\"len\":{},\"result\":{},\"wall_s\":{:.6},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.strategy,
            m.len,
            m.result,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// Deterministic mixed-sign values in [-1000, 1000].
fn deterministic_values(len: usize) -> Vec<i64> {
    (0..len)
        .map(|i| {
            let h = (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
            ((h >> 33) % 2001) as i64 - 1000
        })
        .collect()
}

/// The recurrence written out directly, as an independent baseline.
fn reference_recurrence(seq: &[i64]) -> i64 {
    let n = seq.len();
    if n == 0 {
        return 0;
    }
    let mut table = vec![0i64; n + 1];
    table[1] = seq[0];
    for i in 1..n {
        table[i + 1] = table[i].max(table[i - 1] + seq[i]);
    }
    table[n]
}
