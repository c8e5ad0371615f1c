//! nalscan - Annex-B 码流 NAL 单元扫描工具
//!
//! 从 H.264/HEVC 裸码流中切分 NAL 单元, 按头部类型分类,
//! 输出常见类型 (参数集, IDR, SEI 等) 的序号与长度.

mod logging;
mod report;
mod summary;

use clap::Parser;
use std::io;
use std::process;
use std::time::Instant;

use nalscan_codec::{ExcludeSet, NalSyntax, UnitInspector};
use nalscan_core::NalResult;
use nalscan_format::config::{DEFAULT_MAX_UNIT_SIZE, DEFAULT_READ_CHUNK_SIZE};
use nalscan_format::{InputSource, NalScanner, ScanConfig};

use report::{OutputFormat, Reporter};

/// Annex-B 码流 NAL 单元扫描工具
#[derive(Parser, Debug)]
#[command(name = "nalscan", version, about = "Annex-B 码流 NAL 单元扫描工具")]
struct Cli {
    /// 输入文件路径 (省略时读取标准输入)
    inputs: Vec<String>,

    /// 不输出的 NAL 类型 (逗号分隔, 如 "1,6")
    #[arg(long, default_value = "")]
    exclude: String,

    /// 按 HEVC 解析码流
    #[arg(long)]
    hevc: bool,

    /// 单个 NAL 单元的缓冲上限 (字节)
    #[arg(long, default_value_t = DEFAULT_MAX_UNIT_SIZE)]
    max_unit_size: usize,

    /// 单次读取大小 (字节)
    #[arg(long, default_value_t = DEFAULT_READ_CHUNK_SIZE)]
    read_size: usize,

    /// 输入结束时输出最后一个没有后续起始码的单元
    #[arg(long)]
    flush_tail: bool,

    /// 输出 JSON Lines
    #[arg(long)]
    json: bool,

    /// 日志级别 (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// 日志文件目录 (不指定时只输出到 stderr)
    #[arg(long)]
    log_dir: Option<String>,
}

impl Cli {
    fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            syntax: NalSyntax::from_hevc_flag(self.hevc),
            exclude: ExcludeSet::parse(&self.exclude),
            read_chunk_size: self.read_size,
            max_unit_size: self.max_unit_size,
            flush_tail: self.flush_tail,
        }
    }

    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let log_guard = logging::init(cli.verbose, cli.log_dir.as_deref());

    let code = match run(&cli) {
        Ok(()) => 0,
        Err(e) if e.is_broken_pipe() => {
            tracing::debug!("输出管道已关闭, 停止扫描");
            0
        }
        Err(e) => {
            eprintln!("错误: {e}");
            e.exit_code()
        }
    };

    // process::exit 不运行析构, 先落盘日志文件
    drop(log_guard);
    if code != 0 {
        process::exit(code);
    }
}

fn run(cli: &Cli) -> NalResult<()> {
    let config = cli.scan_config();
    let source = InputSource::from_args(&cli.inputs)?;
    tracing::info!(
        "输入: {}, 语法: {}, 排除: {:?}",
        source.name(),
        config.syntax,
        config.exclude.iter().collect::<Vec<_>>()
    );

    // 仅读取标准输入时输出耗时列
    let start = source.is_stdin().then(Instant::now);
    let inspector = UnitInspector::with_builtin_names(config.syntax, config.exclude.clone());
    let mut reporter = Reporter::new(io::stdout().lock(), inspector, cli.output_format(), start);

    let scanner = NalScanner::new(source, &config)?;
    for unit in scanner {
        reporter.handle(&unit?)?;
    }

    let summary = reporter.finish()?;
    summary.log(config.syntax);
    Ok(())
}
