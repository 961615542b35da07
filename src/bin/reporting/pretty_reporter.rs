use colored::*;
use portlit::semantics::Analysis;
use portlit::*;

/// Lines of context shown around the offending line.
const CONTEXT_LINES: usize = 2;

pub struct PrettyReporter;

impl PrettyReporter {
    fn level_color(level: DiagnosticLevel) -> Color {
        match level {
            DiagnosticLevel::Error => Color::BrightRed,
            DiagnosticLevel::Warning => Color::Yellow,
        }
    }

    fn header(diagnostic: &Diagnostic) -> String {
        let name: &'static str = diagnostic.into();
        let color = Self::level_color(diagnostic.level());
        let message_row = format!(
            "{}: {} {}",
            diagnostic.level().to_string().color(color).bold(),
            diagnostic.to_string().bold(),
            format!("[{}]", name).bright_black(),
        );
        let uri_row = format!("  --> {}", diagnostic.span().start);

        format!("{}\n{}\n", message_row, uri_row.bright_black())
    }

    fn code_frame(diagnostic: &Diagnostic, source: Arc<Source>) -> String {
        let span = diagnostic.span();
        let line = span.start.line - 1;
        let first_line = line.saturating_sub(CONTEXT_LINES);
        let last_line = (line + CONTEXT_LINES).min(source.line_count().saturating_sub(1));

        let mut formatted_lines = String::new();

        for n in first_line..=last_line {
            let text = source.line_text(n).unwrap_or("");
            let text = if n == line {
                Self::highlight(text, span, Self::level_color(diagnostic.level()))
            } else {
                text.to_string()
            };
            formatted_lines.push_str(Self::code_frame_line(&text, n + 1).as_str());
            formatted_lines.push('\n');
        }

        formatted_lines
    }

    fn highlight(text: &str, span: &Span, color: Color) -> String {
        let chars: Vec<char> = text.chars().collect();
        let start = (span.start.character - 1).min(chars.len());
        let end = if span.end.line == span.start.line {
            (span.end.character - 1).max(start).min(chars.len())
        } else {
            chars.len()
        };

        let before: String = chars[..start].iter().collect();
        let marked: String = chars[start..end].iter().collect();
        let after: String = chars[end..].iter().collect();

        format!("{}{}{}", before, marked.color(color).underline(), after)
    }

    fn code_frame_line(line: &str, n: usize) -> String {
        let line_number_column = format!("{:>4} |", n);

        format!("{} {}", line_number_column.bright_black(), line)
    }
}

impl Reporter for PrettyReporter {
    fn report(diagnostics: &[Diagnostic], analysis: &Analysis) {
        for diagnostic in diagnostics {
            let mut result = String::new();
            result.push_str(Self::header(diagnostic).as_str());
            if let Some(source) = analysis.source(&diagnostic.span().start.uri) {
                result.push_str(Self::code_frame(diagnostic, source).as_str());
            }
            println!("{}", result);
        }

        let errors = diagnostics
            .iter()
            .filter(|d| d.level() == DiagnosticLevel::Error)
            .count();
        let warnings = diagnostics.len() - errors;
        if !diagnostics.is_empty() {
            eprintln!(
                "{} {} and {} {} emitted",
                errors,
                if errors == 1 { "error" } else { "errors" },
                warnings,
                if warnings == 1 { "warning" } else { "warnings" },
            );
        }
    }
}
