//! 日志初始化模块.
//!
//! 双输出:
//! - console: 写到 stderr (stdout 留给扫描结果), 默认 warn, -v/-vv/-vvv 逐级提升
//! - file: 可选, 无色, 按天滚动, 输出到 `--log-dir` 指定目录
//!
//! NALSCAN_LOG 环境变量可覆盖两者的过滤规则.

use chrono::{Datelike, Local, Timelike};
use std::io::IsTerminal;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, FormatEvent, FormatFields, format::Writer},
    layer::{Layer, SubscriberExt},
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// 日志过滤环境变量
const LOG_ENV: &str = "NALSCAN_LOG";

/// 日志文件前缀
const FILE_PREFIX: &str = "nalscan";

/// 日志级别: 0=warn, 1=info, 2=debug, 3+=trace
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)))
}

/// 构建按天滚动的文件输出层
///
/// 返回的 guard 被丢弃时刷新后台写线程中尚未落盘的日志.
fn file_layer<S>(dir: &str, verbosity: u8) -> Result<(impl Layer<S>, WorkerGuard), String>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    std::fs::create_dir_all(dir).map_err(|e| e.to_string())?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(FILE_PREFIX)
        .filename_suffix("log")
        .build(dir)
        .map_err(|e| e.to_string())?;
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    // 文件至少记录 info
    let layer = fmt::Layer::default()
        .with_writer(non_blocking)
        .with_ansi(false)
        .event_format(LineFormatter { ansi: false })
        .with_filter(build_filter(verbosity.max(1)));
    Ok((layer, guard))
}

/// 初始化日志系统
///
/// - `verbosity`: 由 -v/-vv/-vvv 控制
/// - `log_dir`: 指定时额外写入按天滚动的日志文件
///
/// 写文件时返回 guard, 调用方需持有到进程退出前.
pub fn init(verbosity: u8, log_dir: Option<&str>) -> Option<WorkerGuard> {
    let (file, guard) = match log_dir {
        Some(dir) => match file_layer::<Registry>(dir, verbosity) {
            Ok((layer, guard)) => (Some(layer), Some(guard)),
            Err(e) => {
                eprintln!("警告: 无法创建日志文件 (目录 '{dir}'): {e}");
                (None, None)
            }
        },
        None => (None, None),
    };

    let ansi = std::io::stderr().is_terminal();
    let console_layer = fmt::Layer::default()
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .event_format(LineFormatter { ansi })
        .with_filter(build_filter(verbosity));

    Registry::default().with(file).with(console_layer).init();
    guard
}

/// 行格式: 时间戳 + 级别 + 消息, 终端下级别带颜色
struct LineFormatter {
    ansi: bool,
}

impl<S, N> FormatEvent<S, N> for LineFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let now = Local::now();
        let level = *event.metadata().level();
        write!(
            writer,
            "[{:02}-{:02} {:02}:{:02}:{:02}.{:03}] ",
            now.month(),
            now.day(),
            now.hour(),
            now.minute(),
            now.second(),
            now.timestamp_subsec_millis(),
        )?;
        if self.ansi {
            let color = match level {
                tracing::Level::ERROR => "\x1b[31m",
                tracing::Level::WARN => "\x1b[33m",
                tracing::Level::INFO => "\x1b[32m",
                _ => "\x1b[34m",
            };
            write!(writer, "{color}{level:5}\x1b[0m > ")?;
        } else {
            write!(writer, "{level:5} > ")?;
        }
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn test_file_layer_flushed_on_guard_drop() {
        let dir = tempfile::tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap();
        let (layer, guard) = file_layer::<Registry>(dir_str, 0).unwrap();
        let subscriber = Registry::default().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("扫描完成: 3 个单元");
        });
        drop(guard);

        let files: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(files.len(), 1);
        let name = files[0].file_name().unwrap().to_str().unwrap().to_string();
        assert!(name.starts_with("nalscan.") && name.ends_with(".log"), "{name}");
        let content = std::fs::read_to_string(&files[0]).unwrap();
        assert!(content.contains("INFO  > 扫描完成: 3 个单元"), "{content}");
    }
}
