//! Constraint checking scenarios for native words, loanwords and splits.

use finnsyll_tests::prelude::*;

mod native_words {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("native_words")
            .fixtures("constraints.syll")
            .step("native_word", |a| a.clean().well_formed().score(8))
            .step("disharmonic", |a| {
                a.violates(Constraint::Harmonic)
                    .passes(Constraint::Native)
                    .ill_formed()
            })
            .step("complex_coda", |a| {
                a.violates(Constraint::SonSeq)
                    .violates(Constraint::MinWord)
                    .passes(Constraint::Native)
                    .passes(Constraint::WordFinal)
                    .segment_violates(0, Constraint::SonSeq)
            })
            // ng is the native velar nasal, so the g is not foreign
            .step("velar_nasal", |a| a.clean().well_formed())
            .step("non_coronal_final", |a| {
                a.violates(Constraint::WordFinal)
                    .violates(Constraint::Native)
                    .segment_violates(1, Constraint::WordFinal)
                    .ill_formed()
            })
    }

    #[test]
    fn test_native_word_constraints() {
        scenario().run().unwrap();
    }
}

mod candidate_splits {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("candidate_splits")
            .fixtures("constraints.syll")
            // VVC is only checked per syllable
            .step("vvc_segment", |a| {
                a.clean()
                    .passes(Constraint::NotVvc)
                    .segment_violates(0, Constraint::NotVvc)
                    .ill_formed()
            })
            .step("good_split", |a| {
                a.well_formed().score(8).matches(&["kaup.pa", "kau.ppa"])
            })
            .step("bad_split", |a| {
                a.ill_formed()
                    .score(7)
                    .segment_violates(1, Constraint::SonSeq)
            })
    }

    #[test]
    fn test_candidate_split_scores() {
        scenario().run().unwrap();
    }
}

mod loanwords {
    use super::*;

    pub fn strict() -> Scenario {
        Scenario::new("loanwords_strict")
            .fixtures("constraints.syll")
            .step("loan_cluster", |a| {
                a.violates(Constraint::Native).violates(Constraint::SonSeq)
            })
            .step("loan_vowels", |a| {
                a.violates(Constraint::Native).violates(Constraint::Harmonic)
            })
    }

    pub fn lenient_loans() -> Scenario {
        Scenario::new("loanwords_lenient")
            .fixtures("constraints.syll")
            .config(CheckerConfig::loanwords())
            // rising onset, falling coda
            .step("loan_cluster", |a| {
                a.violates(Constraint::Native).passes(Constraint::SonSeq)
            })
            .step("loan_vowels", |a| {
                a.violates(Constraint::Native).passes(Constraint::Harmonic)
            })
            // natively spelled words get no exemption
            .step("disharmonic", |a| a.violates(Constraint::Harmonic))
    }

    #[test]
    fn test_loanwords_strict() {
        strict().run().unwrap();
    }

    #[test]
    fn test_loanwords_with_exemptions() {
        lenient_loans().run().unwrap();
    }
}

mod soft_constraints {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("soft_constraints")
            .fixtures("constraints.syll")
            .config(CheckerConfig::lenient())
            // every violation is a warning, so nothing is ill-formed
            .step("complex_coda", |a| {
                a.violates(Constraint::SonSeq)
                    .well_formed()
                    .custom(|analysis| analysis.report.score() < analysis.report.checks)
            })
            .step("bad_split", |a| a.well_formed().score(7))
    }

    #[test]
    fn test_soft_constraints_never_reject() {
        scenario().run().unwrap();
    }
}

mod disabled_constraints {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("disabled_constraints")
            .fixtures("constraints.syll")
            .config(CheckerConfig::new().with_enabled([Constraint::Native, Constraint::Harmonic]))
            .step("complex_coda", |a| a.clean().well_formed().score(2))
            .step("bad_split", |a| a.well_formed().score(2))
    }

    #[test]
    fn test_disabled_constraints_are_skipped() {
        scenario().run().unwrap();
    }
}
