use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Maps status targets and levels to the symbols the original screens
/// used. Raw prints (target `libris::print`) pass through untouched.
pub struct LibrisFormatter;

impl<S, N> FormatEvent<S, N> for LibrisFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() != "libris::print" {
            let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
                match (meta.target(), *meta.level()) {
                    ("libris::success", _) => ("✓", |s| s.green().bold()),
                    ("libris::fail", _) => ("✗", |s| s.red().bold()),
                    (_, Level::ERROR) => ("✗", |s| s.red().bold()),
                    (_, Level::WARN) => ("⚠", |s| s.yellow().bold()),
                    (_, Level::INFO) => ("➤", |s| s.cyan()),
                    (_, Level::DEBUG) => ("?", |s| s.blue()),
                    (_, Level::TRACE) => ("·", |s| s.dimmed()),
                };
            write!(writer, "{} ", color_func(symbol.into()))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(LibrisFormatter)
        .init();
}
