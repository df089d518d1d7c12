use std::io::{self, Write};

use coil::Coil;

/// Render the parsed record as a human-readable summary. Read-only;
/// the record's loop length is authoritative after reconciliation.
pub fn write_report<W: Write>(w: &mut W, coil: &Coil) -> io::Result<()> {
    writeln!(w, "\n --- data structure after parsing ---")?;
    writeln!(w, " current = {}", coil.current)?;
    writeln!(w, " freq = {:.6}", coil.frequency)?;
    writeln!(w, " coil loops:")?;
    writeln!(w, "\t -----------------")?;
    for entry in &coil.loops {
        writeln!(w, "\t radius = {:.2}", entry.radius)?;
        writeln!(w, "\t x_center = {:.2}", entry.x_center)?;
        writeln!(w, "\t y_center = {:.2}", entry.y_center)?;
        writeln!(w, "\t -----------------")?;
    }
    Ok(())
}
