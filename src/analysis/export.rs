//! Tab-delimited export of a population.

use crate::pcr::Population;
use std::io::Write;

/// Write one record per fragment pair: template bases, a tab, synthesis
/// bases. An absent strand is an empty field. The first line is a header.
pub fn write_fragments<W: Write>(writer: &mut W, population: &Population) -> std::io::Result<()> {
    writeln!(writer, "template\tsynthesis")?;

    for fragment in population.fragments() {
        let template = fragment
            .template()
            .map(ToString::to_string)
            .unwrap_or_default();
        let synthesis = fragment
            .synthesis()
            .map(ToString::to_string)
            .unwrap_or_default();
        writeln!(writer, "{template}\t{synthesis}")?;
    }

    Ok(())
}
