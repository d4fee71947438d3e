use colored::*;

pub fn highlight_c(fragment: &str) -> String {
    let mut highlighted = fragment.to_string();
    // Highlight declaration keywords
    for kw in ["const", "unsigned", "char"] {
        highlighted = highlighted.replace(kw, &kw.blue().bold().to_string());
    }
    highlighted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_unchanged_when_colors_disabled() {
        colored::control::set_override(false);
        let fragment = "const unsigned char data[] = { 0x41 };";
        assert_eq!(highlight_c(fragment), fragment);
    }
}
