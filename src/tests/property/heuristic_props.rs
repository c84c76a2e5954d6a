//! Property-based tests for the heuristic parser

use proptest::prelude::*;

use crate::core::game_spec::heuristic::{self, PLACEHOLDER_TITLE};
use crate::core::game_spec::{GameSpec, GameType, SpecGenerator};
use crate::tests::common::config_without_key;

// ============================================================================
// Strategies
// ============================================================================

/// Free text mixing words the parser looks for with arbitrary filler.
fn arb_idea() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        Just("3D".to_string()),
        Just("2d".to_string()),
        Just("Unreal".to_string()),
        Just("godot".to_string()),
        Just("SHOOTER".to_string()),
        Just("rpg".to_string()),
        Just("role".to_string()),
        Just("platform".to_string()),
        "[a-zA-Z0-9 ]{0,12}",
        any::<String>(),
    ];
    prop::collection::vec(word, 0..8).prop_map(|words| words.join(" "))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: every input produces a valid spec
    #[test]
    fn prop_parse_is_total(text in any::<String>()) {
        let spec = heuristic::parse(&text);
        prop_assert!(spec.validate(true).is_ok());
        prop_assert_eq!(spec.title.as_str(), PLACEHOLDER_TITLE);
        prop_assert_eq!(spec.description.as_str(), text.trim());
        prop_assert!(spec.key_features.is_empty());
    }

    /// Property: the spec survives a mapping round trip through validation
    #[test]
    fn prop_parse_output_revalidates(text in arb_idea()) {
        let spec = heuristic::parse(&text);
        let again = GameSpec::from_mapping(spec.to_mapping(), true).unwrap();
        prop_assert_eq!(again, spec);
    }

    /// Property: same input, same output
    #[test]
    fn prop_parse_is_deterministic(text in arb_idea()) {
        prop_assert_eq!(heuristic::parse(&text), heuristic::parse(&text));
    }

    /// Property: 3D exactly when the text mentions "3d"
    #[test]
    fn prop_game_type_follows_keyword(text in arb_idea()) {
        let expected = if text.to_lowercase().contains("3d") {
            GameType::ThreeD
        } else {
            GameType::TwoD
        };
        prop_assert_eq!(heuristic::parse(&text).game_type, expected);
    }

    /// Property: "shooter" wins over every later genre rule
    #[test]
    fn prop_shooter_has_priority(prefix in "[a-z ]{0,20}", suffix in "[a-z ]{0,20}") {
        let text = format!("{prefix} rpg platform {suffix} Shooter");
        let genre = heuristic::parse(&text).genre;
        prop_assert_eq!(genre.as_str(), "shooter");
    }

    /// Property: "rpg" wins over "platform" when no shooter is mentioned
    #[test]
    fn prop_rpg_beats_platform(prefix in "[a-c ]{0,20}") {
        let text = format!("{prefix} platform RPG");
        let genre = heuristic::parse(&text).genre;
        prop_assert_eq!(genre.as_str(), "rpg");
    }

    /// Property: the engine is always one of the known three
    #[test]
    fn prop_engine_is_known(text in arb_idea()) {
        let engine = heuristic::parse(&text).engine;
        prop_assert!(["unity", "unreal", "godot"].contains(&engine.as_str()));
    }

    /// Property: heuristic-only generation is exactly the parser
    #[test]
    fn prop_generate_without_llm_equals_parse(text in arb_idea()) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let generator = SpecGenerator::new(config_without_key());
        let spec = runtime.block_on(generator.generate(&text, false));
        prop_assert_eq!(spec, heuristic::parse(&text));
    }
}
