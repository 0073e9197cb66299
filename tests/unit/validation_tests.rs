/*!
 * Behavior tests for the validation engine through the public API
 */

use platecheck::{load_rule_sets, AggregateValidator, RejectReason};

use crate::common::{two_jurisdiction_records, two_jurisdiction_validator};

#[test]
fn test_validate_withLatinOcrReading_shouldCorrectAndAcceptAsRussian() {
    let validator = two_jurisdiction_validator();

    let result = validator.validate("a123bc77");

    assert!(result.accepted);
    assert_eq!(result.country_code.as_deref(), Some("RU"));
    assert_eq!(result.country_name.as_deref(), Some("Russia"));
    assert_eq!(result.format_name.as_deref(), Some("standard"));
    assert_eq!(result.normalized_text, "А123ВС77");
    assert_eq!(result.raw_text, "a123bc77");
}

#[test]
fn test_validate_withEmptyInput_shouldRejectEmpty() {
    let validator = two_jurisdiction_validator();

    let result = validator.validate("");

    assert!(!result.accepted);
    assert_eq!(result.reason, Some(RejectReason::Empty));
}

#[test]
fn test_validate_withGlobalStopWord_shouldRejectBeforeJurisdictions() {
    let validator = two_jurisdiction_validator();

    let result = validator.validate("TEST");

    assert!(!result.accepted);
    assert_eq!(result.reason, Some(RejectReason::StopWord));
    assert!(result.country_code.is_none());
}

#[test]
fn test_validate_withUniformRun_shouldRejectUniformSequence() {
    let validator = two_jurisdiction_validator();

    let result = validator.validate("AAAA");

    assert!(!result.accepted);
}

#[test]
fn test_validate_withKazakhPlate_shouldFallThroughToSecondJurisdiction() {
    let validator = two_jurisdiction_validator();

    let result = validator.validate("123 BNL 02");

    assert!(result.accepted);
    assert_eq!(result.country_code.as_deref(), Some("KZ"));
    assert_eq!(result.normalized_text, "123BNL02");
}

#[test]
fn test_validate_acceptedFormatName_shouldExistInMatchingJurisdiction() {
    let validator = two_jurisdiction_validator();

    for candidate in ["a123bc77", "ав12345", "123BNL02"] {
        let result = validator.validate(candidate);
        assert!(result.accepted, "expected acceptance for {:?}", candidate);

        let code = result.country_code.as_deref().expect("accepted result has code");
        let format_name = result.format_name.as_deref().expect("accepted result has format");
        let jurisdiction = validator
            .jurisdictions()
            .iter()
            .find(|j| j.code() == code)
            .expect("code must identify a configured jurisdiction");
        assert!(
            jurisdiction.formats().iter().any(|f| f.name() == format_name),
            "format {:?} not configured for {}",
            format_name,
            code
        );
    }
}

#[test]
fn test_normalize_aggressive_shouldBeIdempotentThroughRuleSets() {
    let rule_sets = load_rule_sets::<&str>(&two_jurisdiction_records(), None).unwrap();

    for rules in &rule_sets {
        for raw in ["a-123 bc.77", "123 BNL 02", "№?!", "ТАКСИ", "o000oo"] {
            let once = rules.normalize(raw, true);
            let twice = rules.normalize(&once, true);
            assert_eq!(once, twice, "{} normalize not idempotent for {:?}", rules.code(), raw);
        }
    }
}

#[test]
fn test_jurisdictionStopWord_matchingAFormat_shouldStillBeRejected() {
    // "АВ12345" matches the RU taxi format; configure it as a stop word.
    let mut records = two_jurisdiction_records();
    records[0].stop_words.push("АВ12345".to_string());
    let rule_sets = load_rule_sets::<&str>(&records, None).unwrap();
    let validator = AggregateValidator::new(rule_sets, &[] as &[&str]);

    let result = validator.validate("ab12345");

    assert!(!result.accepted);
}

#[test]
fn test_normalizeForVote_withEquivalentReadings_shouldYieldSameKey() {
    let validator = two_jurisdiction_validator();

    let key_raw = validator.normalize_for_vote("a-123-bc");
    let key_clean = validator.normalize_for_vote("A123BC");

    assert_eq!(key_raw, key_clean);
}

#[test]
fn test_normalizeForVote_shouldNotDropOutOfCharsetCharacters() {
    let validator = two_jurisdiction_validator();

    let key = validator.normalize_for_vote("a123*77");

    assert!(key.contains('*'));
}

#[test]
fn test_validate_withDigitCounter_shouldRejectWhenSequencesDisallowed() {
    // A jurisdiction whose 4-digit format would otherwise match "1234".
    let mut records = two_jurisdiction_records();
    records[1].formats[0].regex = r"^\d{4}$".to_string();

    let rule_sets = load_rule_sets(&records, Some(&["KZ"])).unwrap();
    let validator = AggregateValidator::new(rule_sets, &[] as &[&str]);

    let counter = validator.validate("1234");
    assert!(!counter.accepted);
    assert_eq!(counter.reason, Some(RejectReason::DigitCounterSequence));

    // The same format accepts a non-monotonic value.
    let plain = validator.validate("1372");
    assert!(plain.accepted);
}
