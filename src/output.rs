// Result output for paramx
// Line-oriented: one matched URL per line, to any writer or a file

use crate::error::{ParamxError, ParamxResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn write_lines<W: Write>(mut writer: W, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}

/// Create (or truncate) `path` and write every line to it
pub fn save_to_file(path: &Path, lines: &[String]) -> ParamxResult<()> {
    let file = File::create(path).map_err(|e| ParamxError::write(path, e))?;
    write_lines(BufWriter::new(file), lines).map_err(|e| ParamxError::write(path, e))
}
