//! Syllable weight, sonority and decomposition scenarios.

use finnsyll_tests::prelude::*;

mod weights {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("weights")
            .fixtures("weights.syll")
            .step("light_open", |a| a.weights("L.L"))
            .step("closed_final", |a| a.weights("L.H"))
            .step("diphthongs", |a| a.weights("H.H"))
            .step("front_vowels", |a| a.weights("H.L"))
            .step("long_vowel_onsetless", |a| a.weights("H.H.L"))
            // the vowelless segment degrades alone
            .step("vowelless_segment", |a| a.weights("L.?.L"))
            .step("single_syllable", |a| a.weights("H"))
            .step("capitals", |a| a.weights("H.H.L"))
    }

    #[test]
    fn test_weights_per_syllable() {
        scenario().run().unwrap();
    }
}

mod sonority {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("sonority")
            .fixtures("weights.syll")
            .step("light_open", |a| a.sonority("kA.lA"))
            .step("closed_final", |a| a.sonority("kA.lAn"))
            .step("diphthongs", |a| a.sonority("kAi.kEn"))
            .step("front_vowels", |a| a.sonority("pÖy.tÄ"))
            .step("long_vowel_onsetless", |a| a.sonority("Aa.vIk.kO"))
            .step("vowelless_segment", |a| a.sonority("kA.?.lA"))
            .step("capitals", |a| a.sonority("kAu.pUn.kI"))
    }

    #[test]
    fn test_sonority_peaks() {
        scenario().run().unwrap();
    }
}

mod decomposition {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("decomposition")
            .fixtures("weights.syll")
            .step("light_open", |a| a.parts("k|a|.l|a|"))
            .step("front_vowels", |a| a.parts("p|öy|.t|ä|"))
            .step("long_vowel_onsetless", |a| a.parts("|aa|.v|i|k.k|o|"))
            .step("vowelless_segment", |a| a.parts("k|a|.?.l|a|"))
            .step("single_syllable", |a| a.parts("k|au|p"))
            .step("capitals", |a| a.parts("k|au|.p|u|n.k|i|"))
    }

    #[test]
    fn test_onset_nucleus_coda() {
        scenario().run().unwrap();
    }
}
