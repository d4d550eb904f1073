//! Output formatting utilities.
//!
//! Results go to stdout, one per line or as a JSON array; status messages
//! are colored.

use std::io::{self, BufWriter, Write};

/// How evaluation results are printed.
#[derive(Debug, Clone, Copy)]
pub struct Format {
    json: bool,
}

impl Format {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print every result. Lines are streamed; JSON needs the whole array.
    pub fn results<I>(self, results: I) -> Result<(), String>
    where
        I: Iterator<Item = String>,
    {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());

        if self.json {
            let all: Vec<String> = results.collect();
            serde_json::to_writer(&mut out, &all)
                .map_err(|e| format!("failed to write JSON: {e}"))?;
            writeln!(out).map_err(write_error)?;
        } else {
            for line in results {
                if let Err(e) = writeln!(out, "{line}") {
                    // Downstream closed (e.g. `| head`): stop quietly.
                    if e.kind() == io::ErrorKind::BrokenPipe {
                        return Ok(());
                    }
                    return Err(write_error(e));
                }
            }
        }

        match out.flush() {
            Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(write_error(e)),
            _ => Ok(()),
        }
    }
}

fn write_error(e: io::Error) -> String {
    format!("failed to write output: {e}")
}

/// Print a section heading in green.
pub fn heading(msg: &str) {
    println!("\x1b[32m{msg}\x1b[0m");
}

/// Print a warning message in yellow.
pub fn warning(msg: &str) {
    eprintln!("\x1b[33mwarning:\x1b[0m {msg}");
}

/// Print an error message in red.
pub fn error(msg: &str) {
    eprintln!("\x1b[31merror:\x1b[0m {msg}");
}

/// Print an info message in blue.
pub fn info(msg: &str) {
    eprintln!("\x1b[34minfo:\x1b[0m {msg}");
}
