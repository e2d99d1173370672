//! Terminal stand-in for the spreadsheet: the "selected cell" is the question
//! given on the command line, the "adjacent cell" is the output stream.

use answer_core::error::HostError;
use answer_core::panel::{CellFormat, CellHost};

use std::io::Write;
use std::sync::Mutex;

use log::debug;

pub struct ConsoleHost<W: Write> {
    question: String,
    output: Mutex<W>,
}

impl<W: Write> ConsoleHost<W> {
    pub fn new(question: impl Into<String>, output: W) -> Self {
        Self {
            question: question.into(),
            output: Mutex::new(output),
        }
    }

    pub fn into_output(self) -> W {
        self.output
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write> CellHost for ConsoleHost<W> {
    async fn read_selection(&self) -> Result<String, HostError> {
        Ok(self.question.clone())
    }

    async fn write_answer(&self, text: &str, format: &CellFormat) -> Result<(), HostError> {
        // Cell formatting has no terminal equivalent.
        debug!(
            "Writing answer at offset ({}, {}) with color {}",
            format.row_offset, format.column_offset, format.font_color
        );

        let mut output = self
            .output
            .lock()
            .map_err(|_| HostError::write("output stream lock poisoned"))?;

        writeln!(output, "{text}")
            .and_then(|_| output.flush())
            .map_err(|e| HostError::write(e.to_string()))
    }
}
