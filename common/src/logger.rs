use std::io::Write;
use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Stdout,
    Stderr,
}

pub struct Logger {
    prefix: Option<String>,
    output: LogOutput,
}

impl Logger {
    fn new(prefix: Option<String>, output: LogOutput) -> Self {
        Self { prefix, output }
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    fn write_line<W: Write>(&self, out: &mut W, file: &str, line: u32, message: &str) {
        // Nowhere left to report a failed log write.
        let _ = writeln!(out, "{}", self.format_line(file, line, message));
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        match self.output {
            LogOutput::Stdout => self.write_line(&mut std::io::stdout().lock(), file, line, message),
            LogOutput::Stderr => self.write_line(&mut std::io::stderr().lock(), file, line, message),
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    init_logger_with_output(prefix, LogOutput::Stdout);
}

/// Interactive front ends that draw on stdout send log lines to stderr
/// instead.
pub fn init_logger_with_output(prefix: Option<String>, output: LogOutput) {
    LOGGER.get_or_init(|| Logger::new(prefix, output));
}

/// Writes a line through the global logger. Does nothing until
/// [`init_logger`] has been called, so library code can log freely under test.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
