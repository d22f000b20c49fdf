use std::fmt;

use crate::constants::HEX_DUMP_WIDTH;

/// Write `bytes` as an offset-prefixed hex dump, `HEX_DUMP_WIDTH` bytes per line.
///
/// ```text
/// 0000: e6 0a 0b 0c 0d
/// ```
pub fn write_hex_dump(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for (line, chunk) in bytes.chunks(HEX_DUMP_WIDTH).enumerate() {
        if line > 0 {
            writeln!(f)?;
        }
        write!(f, "{:04x}:", line * HEX_DUMP_WIDTH)?;
        for byte in chunk {
            write!(f, " {}", hex::encode([*byte]))?;
        }
    }
    Ok(())
}

/// Compact single-line rendering used in diagnostics.
pub fn fmt_bytes(b: &[u8]) -> String {
    format!("0x{}", hex::encode(b))
}
