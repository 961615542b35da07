use crate::literal::*;
use crate::semantics::*;
use crate::*;

pub struct NonPortableInteger;

impl NonPortableInteger {
    /// Classifies every distinct occurrence the host knows about. Repeated
    /// keys and occurrences whose width is not yet known are skipped.
    pub fn check_occurrences<H: LiteralHost + ?Sized>(
        host: &H,
        mode: ReportMode,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let mut seen = HashSet::new();

        for occurrence in host.literal_occurrences() {
            if !seen.insert(occurrence.key.clone()) {
                trace!("Already classified {:?}", occurrence.key);
                continue;
            }

            let value = match occurrence.value {
                Some(ref value) => value,
                None => {
                    debug!("Width of `{}` at {} is dependent", occurrence.text, occurrence.span);
                    continue;
                }
            };

            Self::check_literal(&occurrence, value, mode, diagnostics);
        }
    }

    fn check_literal(
        occurrence: &LiteralOccurrence,
        value: &TypedValue,
        mode: ReportMode,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        match classify_literal(&occurrence.text, value, mode) {
            Ok(verdict) if verdict.is_clean() => {}
            Ok(verdict) => {
                diagnostics.push(Diagnostic::NonPortableInteger(
                    occurrence.span.clone(),
                    verdict,
                ));
            }
            Err(LiteralError::Skippable(spelling)) => {
                debug!("Skipping `{}` at {}", spelling, occurrence.span);
            }
            Err(error) => {
                error!("{} at {}", error, occurrence.span);
                diagnostics.push(Diagnostic::MalformedLiteral(
                    occurrence.span.clone(),
                    error,
                ));
            }
        }
    }
}

impl Checker for NonPortableInteger {
    fn name(&self) -> &'static str {
        "non-portable-integer"
    }

    fn check(&self, analysis: &Analysis, diagnostics: &mut Vec<Diagnostic>) {
        Self::check_occurrences(analysis, analysis.config.mode, diagnostics);
    }
}
