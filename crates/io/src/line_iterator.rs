use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;

use streaming_iterator::StreamingIterator;

/// A lending iterator over the non-blank lines of a type implementing Read.
/// Every line is trimmed, and the one-based number of the current line is kept.
///
/// A read error ends the iteration, it is kept and can be retrieved with
/// [LineIterator::take_error].
pub struct LineIterator<T: Read> {
    reader: BufReader<T>,
    buffer: String,
    start: usize,
    end: usize,
    line_number: usize,
    done: bool,
    error: Option<io::Error>,
}

impl<T: Read> LineIterator<T> {
    pub fn new(reader: T) -> LineIterator<T> {
        LineIterator {
            reader: BufReader::new(reader),
            buffer: String::new(),
            start: 0,
            end: 0,
            line_number: 0,
            done: false,
            error: None,
        }
    }

    /// Returns the number of the line returned by the last call to get.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns the error that ended the iteration, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl<T: Read> StreamingIterator for LineIterator<T> {
    type Item = str;

    fn advance(&mut self) {
        loop {
            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
                Ok(n) if n > 0 => {
                    self.line_number += 1;

                    if self.buffer.trim().is_empty() {
                        continue;
                    }

                    self.start = self.buffer.len() - self.buffer.trim_start().len();
                    self.end = self.buffer.trim_end().len();
                    return;
                }
                Ok(_) => {
                    self.done = true;
                    return;
                }
                Err(error) => {
                    self.error = Some(error);
                    self.done = true;
                    return;
                }
            }
        }
    }

    fn get(&self) -> Option<&Self::Item> {
        if self.done {
            None
        } else {
            Some(&self.buffer[self.start..self.end])
        }
    }
}
