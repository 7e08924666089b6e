use dioxus::prelude::*;

/// Keep only characters that are safe inside a download attribute.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect()
}

/// Trigger a browser download of base64-encoded bytes via a transient
/// anchor element. The server functions return binary payloads as base64,
/// which slots straight into a data URL.
pub fn save_file(file_name: &str, mime: &str, base64_data: &str) {
    let file_name = sanitize_file_name(file_name);
    document::eval(&format!(
        r#"
        (function() {{
            var link = document.createElement('a');
            link.href = 'data:{mime};base64,{base64_data}';
            link.download = '{file_name}';
            document.body.appendChild(link);
            link.click();
            link.remove();
        }})();
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sanitize_keeps_expected_names() {
        assert_eq!(
            sanitize_file_name("Bulk_RCs_1724900000000.zip"),
            "Bulk_RCs_1724900000000.zip"
        );
        assert_eq!(sanitize_file_name("RC_RJ14AB1234.pdf"), "RC_RJ14AB1234.pdf");
    }

    #[test]
    fn sanitize_strips_quote_and_path_characters() {
        assert_eq!(sanitize_file_name("a'b\"c/../d.pdf"), "abc..d.pdf");
    }
}
