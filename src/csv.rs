use crate::domain::*;
use crate::error::*;
use std::io::prelude::*;

/// One line, values separated by ", ".
pub fn write_csv_line<W: Write>(
    sequence: &Sequence,
    output: &mut W,
) -> SmoothResult<()> {
    let mut values = sequence.buffer().iter();
    if let Some(first) = values.next() {
        write!(output, "{first}")?;
    }
    for r in values {
        write!(output, ", {r}")?;
    }
    writeln!(output)?;
    Ok(())
}

pub fn write_csv<P: AsRef<std::path::Path>>(
    sequence: &Sequence,
    path: &P,
) -> SmoothResult<()> {
    tracing::info!(path = ?path.as_ref(), "writing csv");
    let mut output = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_csv_line(sequence, &mut output)?;
    output.flush()?;
    Ok(())
}
