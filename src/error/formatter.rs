use std::error::Error;
use std::io::IsTerminal;
use std::sync::LazyLock;

use owo_colors::OwoColorize;
use regex::Regex;

use super::rich::RichError;

static API_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([?&]api_?key=)[^&\s]*").expect("valid regex"));

static BEARER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(Authorization:\s*Bearer\s+)\S+").expect("valid regex")
});

/// テキスト中の API キーを伏字にする
///
/// ログ出力とエラー表示の両方から使う。`apikey=` 以外のクエリは残す。
pub fn mask_secrets(text: &str) -> String {
    let masked = API_KEY_RE.replace_all(text, "${1}***");
    BEARER_RE.replace_all(&masked, "${1}***").into_owned()
}

/// Formats RichError for CLI output
pub struct ErrorFormatter {
    verbose: bool,
    use_color: bool,
}

impl ErrorFormatter {
    /// Creates a new ErrorFormatter with default TTY detection
    pub fn new(verbose: bool) -> Self {
        Self::with_color_detection(verbose, Self::default_should_use_color)
    }

    /// Creates a new ErrorFormatter with injectable TTY detection for testing
    pub fn with_color_detection(verbose: bool, detect_color: fn() -> bool) -> Self {
        let use_color = detect_color();
        Self { verbose, use_color }
    }

    fn default_should_use_color() -> bool {
        std::io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err()
    }

    pub fn format(&self, error: &RichError) -> String {
        let mut plain = format!("error[{}]: {}", error.code().as_str(), error.message());

        let context_lines = self.format_context(error);
        if !context_lines.is_empty() {
            plain.push('\n');
            plain.push_str(&context_lines);
        }

        if self.verbose {
            self.append_verbose(&mut plain, error);
        }

        // Apply masking before color
        let masked = mask_secrets(&plain);

        if self.use_color {
            Self::apply_color(&masked)
        } else {
            masked
        }
    }

    fn append_verbose(&self, output: &mut String, error: &RichError) {
        output.push_str("\n  |");
        output.push_str(&format!("\n  | Cause: {}", error.code().cause()));

        output.push_str("\n  |");
        output.push_str("\n  | Remediation:");
        for line in error.code().remediation().lines() {
            output.push_str(&format!("\n  |   {}", line));
        }

        let source_chain = self.format_source_chain(error);
        if !source_chain.is_empty() {
            output.push_str("\n  |");
            output.push_str(&format!("\n  | Source chain:\n{}", source_chain));
        }

        output.push_str("\n  |");
        output.push_str("\n  = note: use `artq --help` for more information");
    }

    fn format_context(&self, error: &RichError) -> String {
        let ctx = error.context();
        let mut lines = Vec::new();

        // url -> resource -> status
        if let Some(url) = &ctx.url {
            lines.push(format!("  --> {}", url));
        }

        if let Some(resource) = &ctx.resource {
            lines.push(format!("  --> resource: {}", resource));
        }

        if let Some(status) = ctx.status {
            lines.push(format!("  --> status: {}", status));
        }

        lines.join("\n")
    }

    fn format_source_chain(&self, error: &RichError) -> String {
        let mut chain = Vec::new();
        let mut current: Option<&(dyn std::error::Error + 'static)> = error.source();

        while let Some(err) = current {
            chain.push(format!("  |   - {}", err));
            current = err.source();
        }

        chain.join("\n")
    }

    fn apply_color(text: &str) -> String {
        let mut result = String::new();

        for line in text.lines() {
            if !result.is_empty() {
                result.push('\n');
            }

            if line.starts_with("error[") {
                let bracket_end = line.find(']').map_or(0, |i| i + 1);
                let (prefix, rest) = line.split_at(bracket_end);
                result.push_str(&format!("{}{}", prefix.red().bold(), rest.bold()));
            } else if line.starts_with("  -->") {
                result.push_str(&line.blue().to_string());
            } else if line.starts_with("  | Cause:") {
                result.push_str(&line.yellow().to_string());
            } else if line.starts_with("  | Remediation:") {
                result.push_str(&line.green().to_string());
            } else if line.starts_with("  = note:") || line.starts_with("  |   -") {
                result.push_str(&line.dimmed().to_string());
            } else {
                result.push_str(line);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::code::ErrorCode;
    use crate::error::rich::ErrorContext;

    fn no_color() -> bool {
        false
    }

    #[test]
    fn format_simple_with_context() {
        let formatter = ErrorFormatter::with_color_detection(false, no_color);
        let url = reqwest::Url::parse("https://api.harvardartmuseums.org/object").unwrap();
        let context = ErrorContext::for_url(&url).with_status(503);
        let error = RichError::new(ErrorCode::Net001, "Connection failed").with_context(context);

        let output = formatter.format(&error);
        assert!(output.contains("error[NET001]"));
        assert!(output.contains("  --> https://api.harvardartmuseums.org/object"));
        assert!(output.contains("  --> resource: object"));
        assert!(output.contains("  --> status: 503"));
        assert!(!output.contains("Cause:"));
    }

    #[test]
    fn format_verbose() {
        let formatter = ErrorFormatter::with_color_detection(true, no_color);
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "underlying error");
        let error = RichError::new(ErrorCode::Io001, "Failed to read")
            .caused_by(crate::error::ArtqError::Io(io_error));

        let output = formatter.format(&error);
        assert!(output.contains("Cause:"));
        assert!(output.contains("Remediation:"));
        assert!(output.contains("Source chain:"));
        assert!(output.contains("underlying error"));
        assert!(output.contains("note: use `artq --help`"));
    }

    #[test]
    fn masks_api_key_but_keeps_filters() {
        let formatter = ErrorFormatter::with_color_detection(false, no_color);
        let error = RichError::new(
            ErrorCode::Api002,
            "GET https://api.harvardartmuseums.org/object?apikey=s3cr3t&keyword=cat failed",
        );

        let output = formatter.format(&error);
        assert!(output.contains("apikey=***"), "output was: {}", output);
        assert!(output.contains("keyword=cat"), "output was: {}", output);
        assert!(!output.contains("s3cr3t"), "output was: {}", output);
    }

    #[test]
    fn mask_secrets_handles_bearer_and_empty_key() {
        assert_eq!(
            mask_secrets("Authorization: Bearer abc.def"),
            "Authorization: Bearer ***"
        );
        assert_eq!(mask_secrets("/century?apikey=&size=5"), "/century?apikey=***&size=5");
    }

    #[test]
    fn no_color_output_has_no_ansi() {
        let formatter = ErrorFormatter::with_color_detection(false, || false);
        let output = formatter.format(&RichError::new(ErrorCode::Net001, "Test"));
        assert!(!output.contains("\x1b["));
    }
}
