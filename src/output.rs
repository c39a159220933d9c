//! Totals formatting
//!
//! Two formats: the classic tab-separated line and a JSON object. Neither
//! prints anything when the walk counted nothing, since that only happens
//! after an error that has already been reported.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::counts::Totals;

/// How totals are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Tab,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    path: String,
    #[serde(flatten)]
    totals: &'a Totals,
}

/// Write `totals` for `root` to `out`.
///
/// Tab format is `path\tfiles\tdirs\t`, or
/// `path\tfiles\tfile_bytes\tdirs\tdir_bytes\t` with size accounting.
pub fn write_totals<W: Write>(
    out: &mut W,
    root: &Path,
    totals: &Totals,
    format: OutputFormat,
) -> io::Result<()> {
    if totals.is_empty() {
        return Ok(());
    }

    match format {
        OutputFormat::Tab => match (totals.file_bytes, totals.dir_bytes) {
            (Some(file_bytes), Some(dir_bytes)) => writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}\t",
                root.display(),
                totals.files,
                file_bytes,
                totals.directories,
                dir_bytes
            ),
            _ => writeln!(
                out,
                "{}\t{}\t{}\t",
                root.display(),
                totals.files,
                totals.directories
            ),
        },
        OutputFormat::Json => {
            let report = JsonReport {
                path: root.display().to_string(),
                totals,
            };
            let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
            writeln!(out, "{}", json)
        }
    }
}

/// Print totals to stdout.
pub fn print_totals(root: &Path, totals: &Totals, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_totals(&mut lock, root, totals, format)?;
    lock.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(totals: &Totals, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_totals(&mut buf, Path::new("/r"), totals, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_tab_line() {
        let totals = Totals {
            files: 3,
            directories: 1,
            ..Default::default()
        };
        assert_eq!(render(&totals, OutputFormat::Tab), "/r\t3\t1\t\n");
    }

    #[test]
    fn test_tab_line_with_sizes() {
        let totals = Totals {
            files: 1,
            directories: 1,
            file_bytes: Some(100),
            dir_bytes: Some(4096),
        };
        assert_eq!(render(&totals, OutputFormat::Tab), "/r\t1\t100\t1\t4096\t\n");
    }

    #[test]
    fn test_nothing_printed_when_empty() {
        let totals = Totals::default();
        assert_eq!(render(&totals, OutputFormat::Tab), "");
        assert_eq!(render(&totals, OutputFormat::Json), "");
    }

    #[test]
    fn test_json_output() {
        let totals = Totals {
            files: 3,
            directories: 1,
            ..Default::default()
        };
        let value: serde_json::Value =
            serde_json::from_str(&render(&totals, OutputFormat::Json)).unwrap();
        assert_eq!(value["path"], "/r");
        assert_eq!(value["files"], 3);
        assert_eq!(value["directories"], 1);
        assert!(value.get("file_bytes").is_none());
    }

    #[test]
    fn test_json_output_with_sizes() {
        let totals = Totals {
            files: 1,
            directories: 2,
            file_bytes: Some(100),
            dir_bytes: Some(8192),
        };
        let value: serde_json::Value =
            serde_json::from_str(&render(&totals, OutputFormat::Json)).unwrap();
        assert_eq!(value["file_bytes"], 100);
        assert_eq!(value["dir_bytes"], 8192);
    }
}
