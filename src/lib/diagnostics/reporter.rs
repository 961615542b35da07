use crate::semantics::Analysis;
use crate::*;

pub trait Reporter {
    fn report(diagnostics: &[Diagnostic], analysis: &Analysis);
}

pub struct BasicReporter;

impl Reporter for BasicReporter {
    fn report(diagnostics: &[Diagnostic], _analysis: &Analysis) {
        for diagnostic in diagnostics {
            let name: &'static str = diagnostic.into();
            println!(
                "{}: {}: {} [{}]",
                diagnostic.span(),
                diagnostic.level(),
                diagnostic,
                name
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_reporter_prints_every_diagnostic() {
        let analysis = Analysis::new(
            vec![Source::test("int a = 0x7FFFFFFF; int b = 09;")],
            Config::default(),
        );
        let diagnostics = analysis.diagnostics();
        assert_eq!(diagnostics.len(), 2);

        BasicReporter::report(&diagnostics, &analysis);
    }
}
