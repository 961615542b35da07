use crate::literal::{LiteralText, TypedValue};
use crate::semantics::*;
use crate::syntax::Unit;
use crate::*;

pub struct Analysis {
    pub units: Vec<Unit>,
    pub config: Config,
}

impl Analysis {
    pub fn new(sources: Vec<Arc<Source>>, config: Config) -> Analysis {
        let units = sources
            .into_iter()
            .map(|source| {
                info!("Scanning {}", source);
                Unit::scan(source, config.data_model)
            })
            .collect();

        Analysis { units, config }
    }

    pub fn source(&self, uri: &URI) -> Option<Arc<Source>> {
        self.units
            .iter()
            .find(|u| &u.source.uri == uri)
            .map(|u| u.source.clone())
    }

    /// Diagnostics produced while scanning the sources.
    pub fn syntax_diagnostics(&self) -> Vec<Diagnostic> {
        self.units
            .iter()
            .flat_map(|u| u.diagnostics.iter().cloned())
            .collect()
    }

    pub fn check(&self) -> Vec<Diagnostic> {
        let mut diagnostics = vec![];

        for checker in checkers::checkers().iter() {
            timed(checker.name(), || checker.check(self, &mut diagnostics));
        }

        diagnostics
    }

    /// Scanning and checking diagnostics, ordered by position.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics = self.syntax_diagnostics();
        diagnostics.extend(self.check());
        diagnostics.sort_by(|a, b| {
            let (a, b) = (&a.span().start, &b.span().start);
            (a.uri.to_string(), a.offset).cmp(&(b.uri.to_string(), b.offset))
        });
        diagnostics
    }

    pub fn failed(&self, diagnostics: &[Diagnostic]) -> bool {
        Diagnostic::failed(diagnostics) || (self.config.deny_warnings && !diagnostics.is_empty())
    }
}

impl LiteralHost for Analysis {
    fn literal_occurrences(&self) -> Vec<LiteralOccurrence> {
        let model = self.config.data_model;

        self.units
            .iter()
            .flat_map(|unit| unit.literals.iter())
            .map(|scanned| {
                let span = scanned.token.span.clone();
                let value = TypedValue {
                    magnitude: scanned.literal.value.clone(),
                    negated: scanned.negated,
                    bit_width: scanned.type_.bit_width(model),
                };
                LiteralOccurrence {
                    key: OccurrenceKey::at(&span),
                    text: LiteralText::new(scanned.token.lexeme()),
                    value: Some(value),
                    span,
                }
            })
            .collect()
    }
}

#[cfg(debug_assertions)]
const SLOW_CHECKER_WARNING_LIMIT: std::time::Duration = std::time::Duration::from_millis(50);

#[allow(unused_variables)]
fn timed<T, F: FnOnce() -> T>(name: &str, f: F) -> T {
    #[cfg(debug_assertions)]
    {
        let now = std::time::Instant::now();
        let result = f();
        if now.elapsed() > SLOW_CHECKER_WARNING_LIMIT {
            warn!("Checker {:?} took {:?}.", name, now.elapsed());
        }
        result
    }

    #[cfg(not(debug_assertions))]
    {
        f()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(code: &str) -> Analysis {
        Analysis::new(vec![Source::test(code)], Config::default())
    }

    #[test]
    fn occurrences_carry_value_and_width() {
        let analysis = analysis("long x = -0x80'00'00'00;");
        let occurrences = analysis.literal_occurrences();
        assert_eq!(occurrences.len(), 1);

        let occurrence = &occurrences[0];
        assert_eq!(occurrence.text, LiteralText::new("0x80'00'00'00"));
        assert_eq!(occurrence.span.start.character, 11);
        assert_eq!(
            occurrence.value,
            Some(TypedValue::new(0x8000_0000u32, 32).negate())
        );
    }

    #[test]
    fn diagnostics_are_ordered_by_position() {
        let analysis = analysis("int a = 0x7FFFFFFF; int b = 09; int c = 0x80000000;");
        let columns: Vec<_> = analysis
            .diagnostics()
            .iter()
            .map(|d| d.span().start.character)
            .collect();
        assert_eq!(columns, vec![9, 29, 41]);
    }

    #[test]
    fn padded_literals_are_warnings() {
        let analysis = analysis(
            "int a = 0x0000000000000001; int b = 0x0000000000000000; int c = 0000000000000644;",
        );
        let diagnostics = analysis.diagnostics();
        let names: Vec<&'static str> = diagnostics.iter().map(|d| d.into()).collect();
        assert_eq!(
            names,
            vec!["NonPortableInteger", "NonPortableInteger", "NonPortableInteger"]
        );
        assert!(!analysis.failed(&diagnostics));
    }

    #[test]
    fn warnings_fail_only_when_denied() {
        let mut analysis = analysis("int a = 0x7FFFFFFF;");
        let diagnostics = analysis.diagnostics();
        assert!(!analysis.failed(&diagnostics));

        analysis.config.deny_warnings = true;
        assert!(analysis.failed(&diagnostics));
    }
}
