// crates/ssm-env-broker/src/command.rs
// ============================================================================
// Module: Workflow Commands
// Description: Escaping and formatting for runner workflow commands.
// Purpose: Render `::command key=value::data` lines safely.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Workflow commands are single lines written to stdout. Data and property
//! values are percent-escaped so that embedded newlines, `:` and `,` cannot
//! terminate the command early.

// ============================================================================
// SECTION: Escaping
// ============================================================================

/// Escapes the data section of a workflow command.
#[must_use]
pub fn escape_data(value: &str) -> String {
    value.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Escapes a property value of a workflow command.
#[must_use]
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

// ============================================================================
// SECTION: Formatting
// ============================================================================

/// Formats a workflow command line without the trailing newline.
#[must_use]
pub fn format_command(command: &str, properties: &[(&str, &str)], data: &str) -> String {
    let mut line = format!("::{command}");
    if !properties.is_empty() {
        let rendered: Vec<String> = properties
            .iter()
            .map(|(key, value)| format!("{key}={}", escape_property(value)))
            .collect();
        line.push(' ');
        line.push_str(&rendered.join(","));
    }
    line.push_str("::");
    line.push_str(&escape_data(data));
    line
}

#[cfg(test)]
mod tests {
    use super::escape_data;
    use super::escape_property;
    use super::format_command;

    #[test]
    fn data_escaping_covers_percent_and_line_breaks() {
        assert_eq!(escape_data("50%\r\nnext"), "50%25%0D%0Anext");
    }

    #[test]
    fn property_escaping_also_covers_separators() {
        assert_eq!(escape_property("a:b,c%"), "a%3Ab%2Cc%25");
    }

    #[test]
    fn commands_render_properties_and_data() {
        assert_eq!(format_command("add-mask", &[], "s\n1"), "::add-mask::s%0A1");
        assert_eq!(
            format_command("set-env", &[("name", "A:B")], "v"),
            "::set-env name=A%3AB::v"
        );
    }
}
