/*!
 * Leak Report
 * Shutdown-time formatting of outstanding allocations
 */

use super::types::LeakReport;
use std::env;
use std::io;

impl LeakReport {
    /// Number of outstanding allocations
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the report: one summary line, then either the per-record
    /// listing (most recent first) or a hint that the listing exists.
    /// Produces no output at all when nothing leaked.
    pub fn write_to<W: io::Write>(&self, verbose: bool, out: &mut W) -> io::Result<()> {
        if self.records.is_empty() {
            return Ok(());
        }
        write!(out, "leaktrace: {} allocations left", self.count())?;
        if verbose {
            writeln!(out, " (most recent first):")?;
            for record in &self.records {
                writeln!(out, "    0x{:x}  {}", record.address, record.site)?;
            }
        } else {
            writeln!(out, " (enable the verbose toggle to see the list)")?;
        }
        Ok(())
    }
}

/// Read a boolean environment toggle: any non-empty value enables it.
///
/// The variable name is the embedder's concern; the registry itself only
/// consumes the resulting bool.
pub fn env_verbose(name: &str) -> bool {
    env::var_os(name).map_or(false, |value| !value.is_empty())
}
