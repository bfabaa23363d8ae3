//! RON frame grammar - deep nesting with heavily repeated references.
//!
//! Four `$UUID` references per operation, two `$INT` per UUID, make this
//! the stress case for group-name uniquification across levels.

use braid_tests::prelude::*;

mod frames {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("ron_frames")
            .grammar("ron.grammar")
            .step("frame", "#id`=1#id`=1@}^0.1", |e| e.matches())
            .step("frame_with_uuid_list", "#id`,``=1@2^0.2", |e| e.matches())
    }

    #[test]
    fn test_sample_frames_match() {
        scenario().run().unwrap();
    }
}

mod naming {
    use super::*;

    // Every capture-group name in the composed root must be distinct, even
    // with the same child inlined many times at different levels.
    #[test]
    fn test_composed_root_has_unique_group_names() {
        let grammar = load_grammar("ron.grammar").unwrap();
        let names: Vec<&str> = grammar.root().group_names().collect();
        assert!(!names.is_empty());

        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len(), "duplicate group name in {names:?}");
    }

    // Numbered duplicates inherited from an inner compilation are
    // renumbered by the outer one instead of piling up suffixes.
    #[test]
    fn test_inherited_suffixes_coalesce() {
        let grammar = load_grammar("ron.grammar").unwrap();
        let uuid = grammar.compiled("UUID").unwrap();
        let uuid_names: Vec<&str> = uuid.group_names().collect();
        assert!(uuid_names.contains(&"UUID_INT"));
        assert!(uuid_names.contains(&"UUID_INT_1"));

        let op = grammar.compiled("OP").unwrap();
        let op_names: Vec<&str> = op.group_names().collect();
        assert!(op_names.contains(&"OP_UUID_INT"));
        assert!(op_names.contains(&"OP_UUID_INT_1"));
        assert!(!op_names.iter().any(|n| n.ends_with("_1_1")));
    }
}
