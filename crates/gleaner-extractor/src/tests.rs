//! Integration tests for the extraction pipeline

#[cfg(test)]
mod tests {
    use crate::{Extractor, ExtractorConfig};
    use gleaner_domain::{schema, Record, Tier};

    fn extractor() -> Extractor {
        Extractor::new(ExtractorConfig::default())
    }

    #[test]
    fn test_empty_input_yields_defaults() {
        let result = extractor().extract("", &schema::EVALUATION);
        assert_eq!(result.tier, Tier::Default);
        assert_eq!(result.record, Record::defaults(&schema::EVALUATION));
        assert!(result.diagnostic.is_some());
    }

    #[test]
    fn test_binary_garbage_yields_a_record() {
        let garbage: String = (0u8..=255).map(|b| b as char).collect();
        for schema in [
            &schema::QUESTION_SET,
            &schema::EVALUATION,
            &schema::RESUME_FIELDS,
            &schema::JD_FIELDS,
        ] {
            let result = extractor().extract(&garbage, schema);
            assert_eq!(result.record.len(), schema.fields.len());
        }
    }

    #[test]
    fn test_large_input_yields_a_record() {
        let big = "prose without braces ".repeat(100_000);
        let result = extractor().extract(&big, &schema::EVALUATION);
        assert_eq!(result.tier, Tier::Default);
    }

    #[test]
    fn test_exact_json_matches_direct_decode() {
        let reply = r#"{
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "555-0100",
            "education": ["University of London"],
            "experience": ["Analytical Engine Project"],
            "skills": ["Mathematics", "Compilers"]
        }"#;
        let result = extractor().extract(reply, &schema::RESUME_FIELDS);
        assert_eq!(result.tier, Tier::ExactJson);
        assert_eq!(result.record.text("name"), Some("Ada Lovelace"));
        assert_eq!(result.record.text("email"), Some("ada@example.com"));
        assert_eq!(
            result.record.text_list("skills"),
            Some(&["Mathematics".to_string(), "Compilers".to_string()][..])
        );
    }

    #[test]
    fn test_scores_clamp_regardless_of_raw_value() {
        for (reply, expected) in [
            (r#"{"score": -5}"#, 1),
            (r#"{"score": 99}"#, 10),
            (r#"{"score": 7}"#, 7),
        ] {
            let result = extractor().extract(reply, &schema::EVALUATION);
            assert!(result.tier.is_json());
            assert_eq!(result.record.integer("score"), Some(expected));
        }
    }

    #[test]
    fn test_missing_final_brace_is_repaired() {
        let result = extractor().extract(r#"{"score": 7, "feedback": "ok""#, &schema::EVALUATION);
        assert_eq!(result.tier, Tier::RepairedJson);
        assert_eq!(result.record.integer("score"), Some(7));
        assert_eq!(result.record.text("feedback"), Some("ok"));
    }

    #[test]
    fn test_fenced_json_parses_exactly() {
        let reply = "```json\n{\"title\":\"Eng\"}\n```";
        let result = extractor().extract(reply, &schema::JD_FIELDS);
        assert_eq!(result.tier, Tier::ExactJson);
        assert_eq!(result.record.text("title"), Some("Eng"));
    }

    #[test]
    fn test_labeled_text_falls_back_to_scraping() {
        let reply = "Score: 8. Feedback: Good answer overall.\n\nSuggestions: add examples.";
        let result = extractor().extract(reply, &schema::EVALUATION);
        assert_eq!(result.tier, Tier::HeuristicText);
        assert_eq!(result.record.integer("score"), Some(8));
        assert!(result
            .record
            .text("feedback")
            .unwrap()
            .contains("Good answer overall."));
        assert!(result
            .record
            .text("suggestions")
            .unwrap()
            .contains("add examples."));
    }

    #[test]
    fn test_null_list_normalizes_to_empty() {
        let result = extractor().extract(r#"{"skills": null}"#, &schema::RESUME_FIELDS);
        assert_eq!(result.tier, Tier::ExactJson);
        assert_eq!(result.record.text_list("skills"), Some(&[][..]));
    }

    #[test]
    fn test_refusal_yields_all_defaults() {
        let reply = "I cannot help with that.";
        for schema in [
            &schema::QUESTION_SET,
            &schema::EVALUATION,
            &schema::RESUME_FIELDS,
            &schema::JD_FIELDS,
        ] {
            let result = extractor().extract(reply, schema);
            assert_eq!(result.tier, Tier::Default, "schema '{}'", schema.name);
            assert_eq!(result.record, Record::defaults(schema));
        }
    }

    #[test]
    fn test_question_set_recovered_from_prose_wrapped_json() {
        let reply = "Sure! Here are the questions:\n\
            {\"questions\": [\
            {\"id\": 1, \"content\": \"Why Rust?\", \"category\": \"skills\"},\
            {\"id\": 2, \"content\": \"Hardest bug?\", \"category\": \"experience\"}\
            ]}\nLet me know if you need more.";
        let result = extractor().extract(reply, &schema::QUESTION_SET);
        assert_eq!(result.tier, Tier::ExactJson);
        let questions = result.record.items("questions").unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].text("content"), Some("Hardest bug?"));
    }

    #[test]
    fn test_multiple_defects_repaired_cumulatively() {
        // A control character and a missing closing brace at once.
        let reply = "{\"score\": 9, \"feedback\": \"sharp\"\u{0007}";
        let result = extractor().extract(reply, &schema::EVALUATION);
        assert_eq!(result.tier, Tier::RepairedJson);
        assert_eq!(result.record.integer("score"), Some(9));
        assert_eq!(result.record.text("feedback"), Some("sharp"));
    }

    #[test]
    fn test_strict_preset_rejects_malformed_input() {
        let strict = Extractor::new(ExtractorConfig::strict());
        let result = strict.extract(r#"{"score": 7"#, &schema::EVALUATION);
        assert_eq!(result.tier, Tier::Default);
        assert_eq!(result.record, Record::defaults(&schema::EVALUATION));

        let result = strict.extract(r#"{"score": 7}"#, &schema::EVALUATION);
        assert_eq!(result.tier, Tier::ExactJson);
    }

    #[test]
    fn test_every_downgraded_tier_carries_a_diagnostic() {
        let cases = [
            r#"{"score": 7, "feedback": "ok""#, // repaired
            "Score: 8.",                        // heuristic
            "nothing to see here",              // default
        ];
        for reply in cases {
            let result = extractor().extract(reply, &schema::EVALUATION);
            if result.tier != Tier::ExactJson {
                assert!(result.diagnostic.is_some(), "no diagnostic for {:?}", reply);
            }
        }
    }
}

#[cfg(test)]
mod proptests {
    use crate::{Extractor, ExtractorConfig};
    use gleaner_domain::{schema, Tier};
    use proptest::prelude::*;

    proptest! {
        /// Property: extraction is total; any input yields a full record
        #[test]
        fn test_extract_never_panics(input in ".*") {
            let extractor = Extractor::new(ExtractorConfig::default());
            let result = extractor.extract(&input, &schema::EVALUATION);
            prop_assert_eq!(result.record.len(), schema::EVALUATION.fields.len());
        }

        /// Property: valid JSON surrounded by brace-free prose still
        /// parses exactly
        #[test]
        fn test_prose_wrapping_preserves_exact_tier(
            prefix in "[a-z ,.]{0,40}",
            suffix in "[a-z ,.]{0,40}",
        ) {
            let reply = format!("{}{}{}", prefix, r#"{"score": 7}"#, suffix);
            let extractor = Extractor::new(ExtractorConfig::default());
            let result = extractor.extract(&reply, &schema::EVALUATION);
            prop_assert_eq!(result.tier, Tier::ExactJson);
            prop_assert_eq!(result.record.integer("score"), Some(7));
        }

        /// Property: bounded integers are in range whatever the reply says
        #[test]
        fn test_clamp_law(raw_score: i64) {
            let reply = format!(r#"{{"score": {}}}"#, raw_score);
            let extractor = Extractor::new(ExtractorConfig::default());
            let result = extractor.extract(&reply, &schema::EVALUATION);
            let score = result.record.integer("score").unwrap();
            prop_assert!((1..=10).contains(&score));
        }
    }
}
