use serde::Serialize;

use crate::convert::BYTES_PER_LINE;

#[derive(Debug, Serialize)]
pub struct ConversionReport {
    pub array_name: String,
    pub input_lines: usize,
    pub data_lines: usize,
    pub bytes: usize,
    pub trailing_tokens_skipped: usize,
}

pub fn build_report(dump: &str, name: &str) -> ConversionReport {
    let mut input_lines = 0;
    let mut data_lines = 0;
    let mut bytes = 0;
    let mut skipped = 0;

    for line in dump.lines() {
        input_lines += 1;
        let tokens = line.split_whitespace().count().saturating_sub(1);
        let taken = tokens.min(BYTES_PER_LINE);
        if taken > 0 {
            data_lines += 1;
            bytes += taken;
        }
        skipped += tokens - taken;
    }

    ConversionReport {
        array_name: name.to_string(),
        input_lines,
        data_lines,
        bytes,
        trailing_tokens_skipped: skipped,
    }
}

pub fn report_to_text(rep: &ConversionReport) -> String {
    let mut out = String::new();
    out.push_str("Conversion\n");
    out.push_str(&format!("  array:   {}\n", rep.array_name));
    out.push_str(&format!(
        "  lines:   {} ({} with data)\n",
        rep.input_lines, rep.data_lines
    ));
    out.push_str(&format!("  bytes:   {}\n", rep.bytes));
    out.push_str(&format!(
        "  skipped: {} trailing token(s)\n",
        rep.trailing_tokens_skipped
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_lines_bytes_and_skipped_tokens() {
        let dump = "00000000 48 65 6c 6c 6f 2c 20 77 6f 72 6c 64 21 20 31 32  |Hello, world! 12|\n\
                    \n\
                    00000010 ff";
        let rep = build_report(dump, "data");
        assert_eq!(rep.input_lines, 3);
        assert_eq!(rep.data_lines, 2);
        assert_eq!(rep.bytes, 17);
        assert_eq!(rep.trailing_tokens_skipped, 3);
    }

    #[test]
    fn serializes_to_json() {
        let rep = build_report("00000000 41 42", "data");
        let json = serde_json::to_string(&rep).unwrap();
        assert!(json.contains("\"bytes\":2"));
        assert!(json.contains("\"array_name\":\"data\""));
    }

    #[test]
    fn text_report_names_the_array() {
        let rep = build_report("00000000 41", "blob");
        let text = report_to_text(&rep);
        assert!(text.contains("blob"));
        assert!(text.contains("bytes:   1"));
    }
}
