// ==========================================
// 사주 운명 프로파일 엔진 - CLI 主入口
// ==========================================
// 用法: saju-destiny-engine <YYYY-MM-DD> [HH:MM] [--time-unknown]
//       [--name <姓名>] [--city <城市>]
// 输出: 运命档案 JSON (stdout)
// ==========================================

use anyhow::{bail, Result};
use saju_destiny_engine::{BirthInput, ProfileAssembler, SexagenaryCalendar};

fn main() -> Result<()> {
    saju_destiny_engine::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", saju_destiny_engine::APP_NAME);
    tracing::info!("系统版本: {}", saju_destiny_engine::VERSION);
    tracing::info!("==================================================");

    let input = parse_args(std::env::args().skip(1))?;

    let oracle = SexagenaryCalendar::new();
    let assembler = ProfileAssembler::new(&oracle);
    let profile = assembler.assemble(&input);

    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

/// 命令行参数 → 出生信息输入契约
///
/// 日期/时间串不在此处校验, 畸形值由核心按文档化默认值兜底
fn parse_args(args: impl Iterator<Item = String>) -> Result<BirthInput> {
    let mut input = BirthInput::default();
    let mut args = args.peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--time-unknown" => input.birth_time_unknown = true,
            "--name" => {
                input.name = Some(expect_value(&mut args, "--name")?);
            }
            "--city" => {
                input.birth_city = Some(expect_value(&mut args, "--city")?);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ if arg.starts_with("--") => bail!("未知参数: {arg}"),
            _ if input.birth_date.is_none() => input.birth_date = Some(arg),
            _ if input.birth_time.is_none() => input.birth_time = Some(arg),
            _ => bail!("多余的位置参数: {arg}"),
        }
    }

    if input.birth_date.is_none() {
        print_usage();
        bail!("缺少出生日期参数");
    }

    Ok(input)
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    match args.next() {
        Some(v) => Ok(v),
        None => bail!("参数 {flag} 缺少取值"),
    }
}

fn print_usage() {
    println!("用法: saju-destiny-engine <YYYY-MM-DD> [HH:MM] [--time-unknown] [--name <姓名>] [--city <城市>]");
    println!();
    println!("示例:");
    println!("  saju-destiny-engine 2000-01-01 --time-unknown");
    println!("  saju-destiny-engine 1995-08-17 06:45 --name 김하늘 --city Busan");
}
