use std::fmt::Write;

/// Format one hex-dump line: a 4-digit address, up to 16 hex bytes split
/// into two groups of eight, and an ASCII gutter where non-printable
/// bytes show as '.'.
pub fn hex_line(start: u16, bytes: &[u8]) -> String {
    let bytes = &bytes[..bytes.len().min(16)];
    let mut line = String::with_capacity(78);
    let _ = write!(line, "{:04X}:", start);

    for (i, byte) in bytes.iter().enumerate() {
        let sep = if i == 8 { "  " } else { " " };
        let _ = write!(line, "{}{:02X}", sep, byte);
    }
    // Pad short lines so the gutter stays aligned.
    for i in bytes.len()..16 {
        let sep = if i == 8 { "  " } else { " " };
        let _ = write!(line, "{}  ", sep);
    }

    line.push_str(" |");
    for byte in bytes {
        line.push(printable(*byte));
    }
    line.push('|');
    line
}

/// Format a block of memory as consecutive 16-byte `hex_line`s.
pub fn hex_dump(start: u16, bytes: &[u8]) -> String {
    bytes
        .chunks(16)
        .enumerate()
        .map(|(i, chunk)| hex_line(start.wrapping_add((i * 16) as u16), chunk))
        .collect::<Vec<_>>()
        .join("\n")
}

fn printable(byte: u8) -> char {
    if (32..=126).contains(&byte) {
        byte as char
    } else {
        '.'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_line_formats_sixteen_bytes() {
        let bytes: Vec<u8> = (0x41..0x51).collect();
        let line = hex_line(0xABCD, &bytes);
        assert_eq!(
            line,
            "ABCD: 41 42 43 44 45 46 47 48  49 4A 4B 4C 4D 4E 4F 50 |ABCDEFGHIJKLMNOP|"
        );
    }

    #[test]
    fn hex_line_marks_non_printable_bytes() {
        let line = hex_line(0x0000, &[0x00, 0x1F, 0x7F, 0x41]);
        assert!(line.ends_with("|...A|"));
    }

    #[test]
    fn hex_line_pads_short_rows() {
        let full = hex_line(0x0000, &[0u8; 16]);
        let short = hex_line(0x0000, &[0u8; 4]);
        let gutter = |s: &str| s.find('|').unwrap();
        assert_eq!(gutter(&full), gutter(&short));
    }

    #[test]
    fn hex_dump_splits_into_lines() {
        let bytes = [0u8; 32];
        let dump = hex_dump(0x0100, &bytes);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0100:"));
        assert!(lines[1].starts_with("0110:"));
    }
}
