//! Command session over one arena.
//!
//! Reads commands line by line, applies them to the arena and writes the
//! transcript to any `Write` sink, so the same code drives the terminal, a
//! script file, or an in-memory buffer in tests.

use std::io::{self, BufRead, Write};

use firstfit_core::error::{AllocError, FreeError};
use firstfit_core::Arena;
use firstfit_telemetry::{EventLogger, MetricsRecorder};
use tracing::{debug, warn};

use crate::commands::{parse_command, Command};
use crate::render::render;

pub const TITLE: &str = "First-Fit Memory Manager";
pub const COMMAND_LIST: &str =
    "Commands: INIT <size>, ALLOC <id> <size>, FREE <id>, INSPECT, STATS, METRICS, HELP, EXIT";

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Interpreter<W: Write> {
    arena: Arena,
    metrics: Option<MetricsRecorder>,
    prompt: Option<String>,
    out: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(arena: Arena, out: W) -> Self {
        Self {
            arena,
            metrics: None,
            prompt: None,
            out,
        }
    }

    pub fn with_metrics(mut self, metrics: Option<MetricsRecorder>) -> Self {
        if let Some(metrics) = &metrics {
            metrics.observe(&self.arena.stats());
        }
        self.metrics = metrics;
        self
    }

    /// Prompt written before each line is read. Without one the session
    /// runs silently, as when replaying a script.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "{TITLE}")?;
        writeln!(self.out, "{COMMAND_LIST}")?;
        writeln!(self.out)
    }

    /// Runs until `EXIT` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        let mut lines = input.lines().enumerate();
        loop {
            if let Some(prompt) = &self.prompt {
                write!(self.out, "{prompt}")?;
                self.out.flush()?;
            }

            let Some((number, line)) = lines.next() else {
                debug!("end of input");
                return Ok(());
            };

            if self.execute_line(&line?, number + 1)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Parses and executes one line. Blank lines are ignored.
    pub fn execute_line(&mut self, line: &str, number: usize) -> io::Result<Flow> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(err) => {
                warn!(line = number, error = ?err, "rejected input");
                writeln!(self.out, "{err}")?;
                writeln!(self.out)?;
                return Ok(Flow::Continue);
            }
        };

        let span = EventLogger::command_span(command.keyword(), number);
        let _entered = span.enter();
        let flow = self.execute(command)?;
        if flow == Flow::Continue {
            writeln!(self.out)?;
        }
        Ok(flow)
    }

    pub fn execute(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Init { capacity } => {
                self.arena.init(capacity);
                self.observe();
                self.write_memory()?;
            }
            Command::Alloc { id, size } => self.alloc(&id, size)?,
            Command::Free { id } => self.free(&id)?,
            Command::Inspect => self.write_memory()?,
            Command::Stats => writeln!(self.out, "Stats: {}", self.arena.stats())?,
            Command::Metrics => self.write_metrics()?,
            Command::Help => {
                writeln!(self.out, "{COMMAND_LIST}")?;
            }
            Command::Exit => {
                writeln!(self.out, "Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn alloc(&mut self, id: &str, size: usize) -> io::Result<()> {
        let outcome = self.arena.allocate(id, size);
        if let Some(metrics) = &self.metrics {
            metrics.record_allocation(&outcome);
        }

        match outcome {
            Ok(region) => {
                self.observe();
                writeln!(self.out, "Allocated {} bytes at {}.", region.size, region.start)?;
                self.write_memory()
            }
            Err(AllocError::OutOfMemory(size)) => {
                writeln!(self.out, "OUT OF MEMORY: Cannot allocate {size} bytes.")
            }
            Err(err @ AllocError::DuplicateId(_)) => writeln!(self.out, "Error: {err}."),
            Err(AllocError::InvalidSize) => writeln!(self.out, "Error: Size must be positive."),
        }
    }

    fn free(&mut self, id: &str) -> io::Result<()> {
        let regions_before = self.arena.free_regions().len();
        let outcome = self.arena.free(id);
        if let Some(metrics) = &self.metrics {
            metrics.record_free(&outcome);
        }

        match outcome {
            Ok(()) => {
                self.observe();
                writeln!(self.out, "Freed {id}.")?;
                // Releasing adds one region; each merge removes one.
                if self.arena.free_regions().len() <= regions_before {
                    writeln!(self.out, "Coalescing...")?;
                }
                self.write_memory()
            }
            Err(err @ FreeError::NotFound(_)) => writeln!(self.out, "Error: {err}."),
        }
    }

    fn write_memory(&mut self) -> io::Result<()> {
        writeln!(self.out, "Memory: {}", render(self.arena.snapshot()))
    }

    fn write_metrics(&mut self) -> io::Result<()> {
        match &self.metrics {
            Some(metrics) => match metrics.gather_metrics() {
                Ok(text) => write!(self.out, "{text}"),
                Err(err) => writeln!(self.out, "Error: {err}."),
            },
            None => writeln!(self.out, "Metrics are disabled."),
        }
    }

    fn observe(&self) {
        if let Some(metrics) = &self.metrics {
            metrics.observe(&self.arena.stats());
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn session() -> Interpreter<Vec<u8>> {
        Interpreter::new(Arena::new(), Vec::new())
    }

    fn output(interpreter: Interpreter<Vec<u8>>) -> String {
        String::from_utf8(interpreter.into_output()).unwrap()
    }

    #[test]
    fn alloc_prints_placement_and_memory() {
        let mut it = session();
        it.execute(Command::Init { capacity: 100 }).unwrap();
        it.execute(Command::Alloc { id: "x".into(), size: 30 }).unwrap();
        assert_eq!(
            output(it),
            "Memory: [0-100: FREE]\n\
             Allocated 32 bytes at 0.\n\
             Memory: [0-32: x] -> [32-100: FREE]\n"
        );
    }

    #[test]
    fn free_reports_coalescing_only_when_merging() {
        let mut it = session();
        it.execute(Command::Init { capacity: 48 }).unwrap();
        for id in ["a", "b", "c"] {
            it.execute(Command::Alloc { id: id.into(), size: 16 }).unwrap();
        }
        let mut it = Interpreter::new(it.arena().clone(), Vec::new());
        it.execute(Command::Free { id: "a".into() }).unwrap();
        it.execute(Command::Free { id: "b".into() }).unwrap();
        assert_eq!(
            output(it),
            "Freed a.\n\
             Memory: [0-16: FREE] -> [16-32: b] -> [32-48: c]\n\
             Freed b.\n\
             Coalescing...\n\
             Memory: [0-32: FREE] -> [32-48: c]\n"
        );
    }

    #[test]
    fn errors_are_reported_not_raised() {
        let mut it = session();
        it.execute(Command::Init { capacity: 10 }).unwrap();
        it.execute(Command::Alloc { id: "a".into(), size: 12 }).unwrap();
        it.execute(Command::Alloc { id: "a".into(), size: 4 }).unwrap();
        it.execute(Command::Alloc { id: "a".into(), size: 4 }).unwrap();
        it.execute(Command::Alloc { id: "z".into(), size: 0 }).unwrap();
        it.execute(Command::Free { id: "q".into() }).unwrap();
        let text = output(it);
        assert!(text.contains("OUT OF MEMORY: Cannot allocate 12 bytes."));
        assert!(text.contains("Error: ID 'a' already allocated."));
        assert!(text.contains("Error: Size must be positive."));
        assert!(text.contains("Error: ID 'q' not found."));
    }

    #[test]
    fn exit_stops_the_session() {
        let mut it = session();
        assert_eq!(it.execute(Command::Exit).unwrap(), Flow::Exit);
        assert_eq!(output(it), "Goodbye!\n");
    }

    #[test]
    fn metrics_follow_operations() {
        let metrics = MetricsRecorder::new().unwrap();
        let mut it = session().with_metrics(Some(metrics.clone()));
        it.execute(Command::Init { capacity: 64 }).unwrap();
        it.execute(Command::Alloc { id: "a".into(), size: 8 }).unwrap();
        it.execute(Command::Free { id: "missing".into() }).unwrap();

        assert_eq!(metrics.allocations.get(), 1);
        assert_eq!(metrics.failures.with_label_values(&["not_found"]).get(), 1);
        assert_eq!(metrics.allocated_bytes.get(), 8);
        assert_eq!(metrics.free_bytes.get(), 56);

        it.execute(Command::Metrics).unwrap();
        assert!(output(it).contains("firstfit_allocations_total 1"));
    }

    #[test]
    fn metrics_command_without_recorder() {
        let mut it = session();
        it.execute(Command::Metrics).unwrap();
        assert_eq!(output(it), "Metrics are disabled.\n");
    }

    #[traced_test]
    #[test]
    fn rejected_lines_are_logged() {
        let mut it = session();
        it.execute_line("BOGUS 1", 7).unwrap();
        assert!(logs_contain("rejected input"));
        assert!(output(it).starts_with("Unknown command: BOGUS"));
    }
}
