use crate::errors::DumpError;

/// Conventional hexdump layout: one offset field, then at most 16 byte values.
pub const BYTES_PER_LINE: usize = 16;

/// Extracts the byte-value tokens from a hex dump, line by line.
/// The first token of each line is the offset and is discarded; anything
/// past the 16th value (usually an ASCII preview column) is ignored.
pub fn dump_to_tokens(dump: &str) -> Vec<&str> {
    let mut values = Vec::new();
    for line in dump.lines() {
        values.extend(line.split_whitespace().skip(1).take(BYTES_PER_LINE));
    }
    values
}

/// Renders a hex dump as a C array fragment named `name`.
pub fn dump_to_c_array(dump: &str, name: &str) -> String {
    render_fragment(&dump_to_tokens(dump), name)
}

/// Strict variant: every token inside the per-line value window must be
/// exactly two hex digits. The offset is still discarded unchecked.
pub fn dump_to_c_array_strict(dump: &str, name: &str) -> Result<String, DumpError> {
    let mut values = Vec::new();
    for (idx, line) in dump.lines().enumerate() {
        for token in line.split_whitespace().skip(1).take(BYTES_PER_LINE) {
            if !is_byte_token(token) {
                return Err(DumpError::BadToken {
                    line: idx + 1,
                    token: token.to_string(),
                });
            }
            values.push(token);
        }
    }
    Ok(render_fragment(&values, name))
}

fn render_fragment(values: &[&str], name: &str) -> String {
    let body = values
        .iter()
        .map(|v| format!("0x{}", v))
        .collect::<Vec<_>>()
        .join(", ");
    format!("const unsigned char {}[] = {{ {} }};", name, body)
}

fn is_byte_token(token: &str) -> bool {
    token.len() == 2 && token.bytes().all(|b| b.is_ascii_hexdigit())
}
