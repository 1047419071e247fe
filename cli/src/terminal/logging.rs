use std::fmt;

use colored::*;
use evento_common::macros::{PRINT_TARGET, SUCCESS_TARGET};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Filter used when `RUST_LOG` is unset.
///
/// Reports on `evento::print` always pass. `-q` keeps warnings and success
/// lines, `-qq` keeps only errors.
pub fn default_filter(quiet: u8) -> &'static str {
    match quiet {
        0 => "info",
        1 => "warn,evento::print=info,evento::success=info",
        _ => "error,evento::print=info",
    }
}

/// Installs the global subscriber. `RUST_LOG` wins when set.
pub fn init_logging(quiet: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(EventoFormatter)
        .init();
}

pub struct EventoFormatter;

impl<S, N> FormatEvent<S, N> for EventoFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0.unwrap_or_default());
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO if meta.target() == SUCCESS_TARGET => ("[+]", |s| s.green().bold()),
            Level::INFO => ("[*]", |s| s.cyan().bold()),
            Level::WARN => ("[!]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Pulls the `raw_msg` field out of a print event.
#[derive(Default)]
struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "raw_msg" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use evento_common::{info, success, warn};

    use super::*;
    use crate::terminal::print;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn emit_at(quiet: u8) -> String {
        emit_with(default_filter(quiet))
    }

    fn emit_with(directives: &str) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(directives))
            .event_format(EventoFormatter)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            print::line("report line");
            success!("summary line");
            info!("status line");
            warn!("warning line");
        });

        let bytes = capture.0.lock().unwrap();
        let output = String::from_utf8_lossy(&bytes).into_owned();
        output
    }

    #[test]
    fn quiet_levels_keep_the_right_lines() {
        let verbose = emit_at(0);
        for expected in ["report line", "summary line", "status line", "warning line"] {
            assert!(verbose.contains(expected), "-q0 lost {expected}: {verbose}");
        }

        let quiet = emit_at(1);
        assert!(quiet.contains("report line"), "{quiet}");
        assert!(quiet.contains("summary line"), "-q must keep success lines: {quiet}");
        assert!(quiet.contains("warning line"), "{quiet}");
        assert!(!quiet.contains("status line"), "{quiet}");

        let quieter = emit_at(2);
        assert!(quieter.contains("report line"), "{quieter}");
        for hidden in ["summary line", "status line", "warning line"] {
            assert!(!quieter.contains(hidden), "-qq kept {hidden}: {quieter}");
        }
    }

    #[test]
    fn macros_log_on_their_own_targets() {
        let lines = [
            ("evento::print", "report line"),
            ("evento::success", "summary line"),
            ("evento::info", "status line"),
            ("evento::warn", "warning line"),
        ];

        for (target, expected) in lines {
            let output = emit_with(&format!("off,{target}=trace"));
            for (_, other) in lines {
                assert_eq!(output.contains(other), other == expected, "{target}: {output}");
            }
        }
    }

    #[test]
    fn report_lines_have_no_prefix() {
        let output = emit_at(0);
        assert!(output.lines().any(|line| line == "report line"), "{output}");
    }
}
