use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Filesystem transport yielding the raw lines of a log file.
pub struct LogFile {
    path: PathBuf,
    reader: BufReader<File>,
}

impl LogFile {
    /// Open `path` for line-by-line reading. Directories are rejected.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let file = File::open(&path)?;
        if file.metadata()?.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "path is a directory",
            ));
        }
        Ok(Self {
            path,
            reader: BufReader::new(file),
        })
    }

    /// Path this log was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Iterate `(line_number, raw_bytes)` pairs, numbering from 1.
    ///
    /// Line terminators (`\n` or `\r\n`) are stripped. Bytes are not decoded,
    /// so invalid UTF-8 surfaces later as a per-line parse failure.
    pub fn numbered_lines(self) -> impl Iterator<Item = (usize, io::Result<Vec<u8>>)> {
        self.reader
            .split(b'\n')
            .enumerate()
            .map(|(idx, line)| {
                let line = line.map(|mut bytes| {
                    if bytes.last() == Some(&b'\r') {
                        bytes.pop();
                    }
                    bytes
                });
                (idx + 1, line)
            })
    }
}

/// True if an open failure means the file does not exist.
pub fn is_not_found(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::NotFound
}

/// True if the line holds nothing but whitespace.
pub fn is_blank(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn numbered_lines_strips_terminators_and_counts_from_one() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("log.json");
        std::fs::write(&path, "first\r\nsecond\n\nlast").unwrap();

        let log = LogFile::open(&path).unwrap();
        assert_eq!(log.path(), path.as_path());
        let lines: Vec<(usize, Vec<u8>)> = log
            .numbered_lines()
            .map(|(number, line)| (number, line.unwrap()))
            .collect();
        assert_eq!(
            lines,
            vec![
                (1, b"first".to_vec()),
                (2, b"second".to_vec()),
                (3, Vec::new()),
                (4, b"last".to_vec()),
            ]
        );
    }

    #[test]
    fn open_reports_not_found_for_missing_file() {
        let temp = tempdir().unwrap();
        let err = LogFile::open(temp.path().join("absent.json"))
            .err()
            .expect("missing file must fail to open");
        assert!(is_not_found(&err));
    }

    #[test]
    fn open_rejects_directories() {
        let temp = tempdir().unwrap();
        let err = LogFile::open(temp.path())
            .err()
            .expect("directory must fail to open");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(!is_not_found(&err));
    }

    #[test]
    fn blank_detection_covers_whitespace_only_lines() {
        assert!(is_blank(b""));
        assert!(is_blank(b"  \t "));
        assert!(!is_blank(b" {} "));
    }
}
