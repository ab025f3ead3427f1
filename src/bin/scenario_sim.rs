//! 场景回放
//!
//! 从 JSON 场景文件构建编队，按 tick 注入事件并回放到静止，
//! 以 JSON 输出最终的轿厢状态。

use clap::Parser;
use liftsim_rs::sim::{ScenarioSpec, run_scenario};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "scenario-sim", about = "回放 scenario.json 电梯调度场景")]
struct Args {
    /// 场景文件路径（JSON）
    #[arg(long)]
    scenario: PathBuf,

    /// tick 预算；超出后无论是否静止都结束
    #[arg(long, default_value_t = 1_000)]
    max_ticks: u64,

    /// 紧凑输出（默认为带缩进的 JSON）
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let raw = fs::read_to_string(&args.scenario)
        .unwrap_or_else(|e| panic!("无法读取场景文件 {}: {e}", args.scenario.display()));
    let spec: ScenarioSpec = serde_json::from_str(&raw)
        .unwrap_or_else(|e| panic!("场景文件解析失败 {}: {e}", args.scenario.display()));

    let outcome = run_scenario(&spec, args.max_ticks);

    let rendered = if args.compact {
        serde_json::to_string(&outcome).expect("serialize outcome")
    } else {
        serde_json::to_string_pretty(&outcome).expect("serialize outcome")
    };
    println!("{rendered}");
}
