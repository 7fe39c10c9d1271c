//! One checker shared by many threads gives the same answers as one thread.

use std::thread;

use finnsyll_constraint::ConstraintChecker;
use finnsyll_syllable::word_weights;
use finnsyll_tests::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_shared_checker_across_threads() {
    let checker = ConstraintChecker::new(CheckerConfig::loanwords());

    let mut generator = WordGenerator::new(99);
    let inputs: Vec<String> = (0..400)
        .map(|_| generator.syllabification(1, 4).0.to_string())
        .chain(["blues", "zy.de.co", "kau.ppa", "aat.to"].map(String::from))
        .collect();

    let sequential: Vec<(String, usize, bool)> = inputs
        .iter()
        .map(|input| {
            let report = checker.check_syllabification(&input.as_str().into());
            (word_weights(input), report.score(), report.is_well_formed())
        })
        .collect();

    let parallel: Vec<(String, usize, bool)> = thread::scope(|s| {
        let handles: Vec<_> = inputs
            .chunks(50)
            .map(|chunk| {
                let checker = &checker;
                s.spawn(move || {
                    chunk
                        .iter()
                        .map(|input| {
                            let report = checker.check_syllabification(&input.as_str().into());
                            (word_weights(input), report.score(), report.is_well_formed())
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(parallel, sequential);
}
