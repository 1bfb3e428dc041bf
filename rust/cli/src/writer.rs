//! Streaming dataset writer: one pretty JSON array, or JSON lines.

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::OutputFormat;
use crate::io_utils::ensure_parent_dir;

pub struct RecordWriter<W: Write> {
    inner: BufWriter<W>,
    format: OutputFormat,
    written: usize,
}

impl RecordWriter<File> {
    pub fn create(path: &Path, format: OutputFormat) -> std::io::Result<Self> {
        ensure_parent_dir(path).map_err(std::io::Error::other)?;
        Ok(Self::new(File::create(path)?, format))
    }
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W, format: OutputFormat) -> Self {
        Self {
            inner: BufWriter::new(inner),
            format,
            written: 0,
        }
    }

    pub fn write<T: Serialize>(&mut self, record: &T) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Jsonl => {
                serde_json::to_writer(&mut self.inner, record)?;
                self.inner.write_all(b"\n")?;
            }
            OutputFormat::Json => {
                let sep: &[u8] = if self.written == 0 { b"[\n" } else { b",\n" };
                self.inner.write_all(sep)?;
                serde_json::to_writer_pretty(&mut self.inner, record)?;
            }
        }
        self.written += 1;
        Ok(())
    }

    /// Closes the array (if any) and flushes; returns the record count.
    pub fn finish(mut self) -> std::io::Result<usize> {
        if self.format == OutputFormat::Json {
            let tail: &[u8] = if self.written == 0 { b"[]\n" } else { b"\n]\n" };
            self.inner.write_all(tail)?;
        }
        self.inner.flush()?;
        Ok(self.written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn render(format: OutputFormat, records: &[Value]) -> String {
        let mut buf = Vec::new();
        {
            let mut w = RecordWriter::new(&mut buf, format);
            for r in records {
                w.write(r).unwrap();
            }
            assert_eq!(w.finish().unwrap(), records.len());
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn json_array_is_valid_and_pretty() {
        let text = render(OutputFormat::Json, &[json!({"a": 1}), json!({"a": 2})]);
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert!(text.contains("  \"a\": 1"));
    }

    #[test]
    fn empty_json_array() {
        let text = render(OutputFormat::Json, &[]);
        assert_eq!(text, "[]\n");
    }

    #[test]
    fn jsonl_writes_one_object_per_line() {
        let text = render(OutputFormat::Jsonl, &[json!({"a": 1}), json!({"b": [1, 2]})]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![r#"{"a":1}"#, r#"{"b":[1,2]}"#]);
    }
}
