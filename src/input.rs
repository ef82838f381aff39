// URL input for paramx
// One URL per line from a list file or any reader (stdin in the binary)

use crate::error::{ParamxError, ParamxResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read trimmed, non-blank lines from `reader`
pub fn read_urls_from_reader<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            urls.push(trimmed.to_string());
        }
    }
    Ok(urls)
}

pub fn read_urls_from_file(path: &Path) -> ParamxResult<Vec<String>> {
    let file = File::open(path).map_err(|e| ParamxError::io(path, e))?;
    read_urls_from_reader(BufReader::new(file)).map_err(|e| ParamxError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn trims_and_skips_blank_lines() {
        let input = "  https://a.com/?q=1  \n\n\t\nhttps://b.com\r\nhttps://a.com/?q=1\n";
        let urls = read_urls_from_reader(Cursor::new(input)).unwrap();
        assert_eq!(
            urls,
            vec!["https://a.com/?q=1", "https://b.com", "https://a.com/?q=1"]
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_urls_from_file(Path::new("/nonexistent/paramx/urls.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/paramx/urls.txt"));
    }
}
