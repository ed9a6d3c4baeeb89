//! Human-readable seeding progress on stdout, mirrored into the log.

use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Info,
    Done,
    Skipped,
    Failed,
}

impl Status {
    pub fn glyph(&self) -> char {
        match self {
            Status::Info | Status::Done => '✓',
            Status::Skipped => '!',
            Status::Failed => 'x',
        }
    }

    pub fn log_level(&self) -> log::Level {
        match self {
            Status::Failed => log::Level::Error,
            Status::Info | Status::Done | Status::Skipped => log::Level::Info,
        }
    }
}

pub fn format_line(status: Status, message: &str) -> String {
    format!("{} {}", status.glyph(), message)
}

pub trait Progress: Send + Sync {
    fn report(&self, status: Status, message: &str);
}

/// Prints each line to stdout
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn report(&self, status: Status, message: &str) {
        println!("{}", format_line(status, message));
        log::log!(status.log_level(), "{}", message);
    }
}

/// Keeps every line in memory
#[derive(Debug, Default)]
pub struct RecordingProgress {
    lines: Mutex<Vec<(Status, String)>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Status, String)> {
        self.lines.lock().clone()
    }

    pub fn count(&self, status: Status) -> usize {
        self.lines.lock().iter().filter(|(s, _)| *s == status).count()
    }
}

impl Progress for RecordingProgress {
    fn report(&self, status: Status, message: &str) {
        self.lines.lock().push((status, message.to_string()));
    }
}
