//! 电梯编队演示
//!
//! 依次运行三个脚本化场景：单个请求、多路并发请求、同向顺路优化。

use clap::Parser;
use liftsim_rs::fleet::{CarId, Controller, Direction};

#[derive(Debug, Parser)]
#[command(name = "lobby-demo", about = "电梯编队仿真演示：厅外呼叫 + 轿厢内呼叫")]
struct Args {
    /// 轿厢数量
    #[arg(long, default_value_t = 3)]
    cars: u32,

    /// 楼层数
    #[arg(long, default_value_t = 10)]
    floors: u32,

    /// 每台轿厢的额定载客数
    #[arg(long, default_value_t = 10)]
    capacity: u32,

    /// 每个场景的 tick 预算
    #[arg(long, default_value_t = 40)]
    max_ticks: u64,
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

    // 场景一：单个请求
    println!("=== 场景一：单个请求 ===");
    let mut controller = Controller::new(args.cars, args.floors, args.capacity);
    report(controller.request_hall_call(5, Direction::Down));
    report(controller.request_car_call(CarId(1), 1));
    controller.run_until_settled(args.max_ticks);
    print_states(&controller);

    // 场景二：多路并发请求
    println!("=== 场景二：多路并发请求 ===");
    let mut controller = Controller::new(args.cars, args.floors, args.capacity);
    report(controller.request_hall_call(7, Direction::Up));
    report(controller.request_hall_call(3, Direction::Down));
    report(controller.request_hall_call(9, Direction::Down));
    report(controller.request_car_call(CarId(1), 10));
    report(controller.request_car_call(CarId(2), 1));
    report(controller.request_car_call(CarId(3), 5));
    controller.run_until_settled(args.max_ticks);
    print_states(&controller);

    // 场景三：同向顺路优化——5 层的上行呼叫应指派给已在上行的 1 号轿厢
    println!("=== 场景三：同向顺路优化 ===");
    let mut controller = Controller::new(2, args.floors, args.capacity);
    report(controller.request_hall_call(1, Direction::Up));
    report(controller.request_car_call(CarId(1), 10));
    controller.step();
    controller.step();
    report(controller.request_hall_call(5, Direction::Up));
    report(controller.request_car_call(CarId(1), 7));
    controller.run_until_settled(args.max_ticks);
    print_states(&controller);
}

fn report<T: std::fmt::Debug>(outcome: Result<T, liftsim_rs::fleet::DispatchError>) {
    match outcome {
        Ok(v) => println!("  ✓ 已受理：{v:?}"),
        Err(err) => println!("  ❌ 已拒绝：{err}"),
    }
}

fn print_states(controller: &Controller) {
    let states = controller.car_states();
    println!(
        "{}",
        serde_json::to_string_pretty(&states).expect("serialize car states")
    );
}
