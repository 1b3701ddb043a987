use std::io::{self, Write};

pub const HEADER: &str = "\n/* autogenerated by bin2c */\n";
/// Blank line after the closing `}`.
pub const FOOTER: &str = "\n";
pub const BYTES_PER_LINE: usize = 8;

const INDENT: &str = "  ";
const SEPARATOR: &str = ", ";

/// Writes the full declaration of `bytes` named `identifier` into `sink`.
///
/// Layout:
///
/// [HEADER]
/// static const unsigned char [IDENTIFIER][] = {
///   0x.., 0x.., 0x.., 0x.., 0x.., 0x.., 0x.., 0x..,
///   ...
/// }
/// [FOOTER]
///
/// A partial last line is terminated with a newline before the closing
/// brace. An empty input yields no body lines at all.
pub fn write_declaration<W: Write + ?Sized>(
    sink: &mut W,
    identifier: &str,
    bytes: &[u8],
) -> io::Result<()> {
    sink.write_all(HEADER.as_bytes())?;
    writeln!(sink, "static const unsigned char {}[] = {{", identifier)?;

    let count = bytes.len();
    for (i, byte) in bytes.iter().enumerate() {
        if i % BYTES_PER_LINE == 0 {
            sink.write_all(INDENT.as_bytes())?;
        }

        write!(sink, "0x{:02x}", byte)?;

        if i + 1 < count {
            sink.write_all(SEPARATOR.as_bytes())?;
        }

        if i % BYTES_PER_LINE == BYTES_PER_LINE - 1 {
            sink.write_all(b"\n")?;
        }
    }

    if count % BYTES_PER_LINE != 0 {
        sink.write_all(b"\n")?;
    }

    sink.write_all(b"}\n")?;
    sink.write_all(FOOTER.as_bytes())
}

pub fn render_declaration(identifier: &str, bytes: &[u8]) -> String {
    let mut buffer = Vec::new();
    write_declaration(&mut buffer, identifier, bytes).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buffer).into_owned()
}
