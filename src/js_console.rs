use crate::core::Value;
use crate::error::JSError;
use crate::js_inspect::{InspectOptions, format_with};
use crate::js_promise::PromiseProbe;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Log,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Log => "log",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

/// Platform output for console messages. The console itself never performs
/// I/O; it renders and forwards.
pub trait ConsoleSink {
    fn write(&mut self, level: Level, msg: &str) -> Result<(), JSError>;
}

/// Sink that writes `[<level>] <msg>` lines to process stdout.
pub struct StdoutSink;

impl ConsoleSink for StdoutSink {
    fn write(&mut self, level: Level, msg: &str) -> Result<(), JSError> {
        use std::io::Write;
        let mut out = std::io::stdout().lock();
        writeln!(out, "[{}] {}", level.as_str(), msg)?;
        Ok(())
    }
}

/// Console facade over the inspector: formats every argument, joins them
/// with `", "` and forwards the line to the platform sink. Invoking any
/// method before a sink is installed is an error, matching the host console
/// contract.
pub struct Console {
    sink: Option<Box<dyn ConsoleSink>>,
    options: InspectOptions,
    probe: Option<Box<dyn PromiseProbe>>,
}

impl Console {
    pub fn new() -> Self {
        Console {
            sink: None,
            options: InspectOptions::default(),
            probe: None,
        }
    }

    pub fn with_options(options: InspectOptions) -> Self {
        Console {
            sink: None,
            options,
            probe: None,
        }
    }

    pub fn set_sink(&mut self, sink: Box<dyn ConsoleSink>) {
        self.sink = Some(sink);
    }

    pub fn set_promise_probe(&mut self, probe: Box<dyn PromiseProbe>) {
        self.probe = Some(probe);
    }

    pub fn log(&mut self, args: &[Value]) -> Result<(), JSError> {
        self.print(Level::Log, args)
    }

    pub fn debug(&mut self, args: &[Value]) -> Result<(), JSError> {
        self.print(Level::Debug, args)
    }

    pub fn info(&mut self, args: &[Value]) -> Result<(), JSError> {
        self.print(Level::Info, args)
    }

    pub fn warn(&mut self, args: &[Value]) -> Result<(), JSError> {
        self.print(Level::Warn, args)
    }

    pub fn error(&mut self, args: &[Value]) -> Result<(), JSError> {
        self.print(Level::Error, args)
    }

    pub fn print(&mut self, level: Level, args: &[Value]) -> Result<(), JSError> {
        log::debug!("console.{} called with {} argument(s)", level.as_str(), args.len());

        let mut msg = String::new();
        for (index, value) in args.iter().enumerate() {
            if index > 0 {
                msg.push_str(", ");
            }
            msg.push_str(&format_with(value, &self.options, self.probe.as_deref()));
        }

        let Some(sink) = self.sink.as_mut() else {
            return Err(JSError::ConsoleSinkNotSet);
        };
        sink.write(level, &msg)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
