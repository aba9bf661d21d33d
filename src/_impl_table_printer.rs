//! **(internal)** Simple export functions for printing truth tables as plain text.
//!
//! The layout is `R = <title>`, then a header with one `| x ` cell per variable and
//! a final `| R |` cell, then one line per row with `0`/`1` values.

use crate::TruthTable;
use std::io::Write;

impl TruthTable {
    /// Write this table into the output buffer. The `title` (usually the formula as typed
    /// by the user) is printed on the first line.
    pub fn write_table(&self, output: &mut dyn Write, title: &str) -> Result<(), std::io::Error> {
        output.write_all(format!("R = {}\n", title).as_bytes())?;
        for name in self.variables().names() {
            output.write_all(format!("| {} ", name).as_bytes())?;
        }
        output.write_all(b"| R |\n")?;
        for row in self.rows() {
            for value in row.valuation.values() {
                output.write_all(format!("| {} ", u8::from(*value)).as_bytes())?;
            }
            output.write_all(format!("| {} |\n", u8::from(row.result)).as_bytes())?;
        }
        Ok(())
    }

    /// Converts this table into a string.
    ///
    /// See also: [write_table](#method.write_table)
    pub fn to_table_string(&self, title: &str) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        self.write_table(&mut buffer, title)
            .expect("Cannot write truth table to string.");
        String::from_utf8(buffer).expect("Invalid UTF formatting in truth table.")
    }
}
