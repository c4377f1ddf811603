//! Graph property tests.
//!
//! Partner symmetry, removal completeness, sanitizer idempotence and
//! offspring idempotence over the mutation engine.

use pedigree_graph::{merge, sanitize};
use pedigree_mutation::{
    add_member, infer_automatic_child, link_partners, remove_member, MutationExecutor,
};
use pedigree_session::default_family;
use pedigree_tests::prelude::*;
use serde_json::json;

mod symmetry {
    use super::*;

    #[test]
    fn test_symmetry_survives_a_mutation_sequence() {
        // GIVEN
        let mut members = default_family();

        // WHEN a mixed sequence of mutations runs
        members = add_member(
            &members,
            NewMember::new("Sofia", "woman").with_partners([MemberId(4), MemberId(6)]),
        )
        .unwrap();
        assert!(is_symmetric(&members));

        members = link_partners(&members, MemberId(5), MemberId(0)).unwrap();
        assert!(is_symmetric(&members));

        members = remove_member(&members, MemberId(4)).unwrap();
        assert!(is_symmetric(&members));

        let outcome = MutationExecutor::new(&members)
            .add_partner(MemberId(6), "Mia")
            .unwrap();
        members = outcome.members;

        // THEN
        assert!(is_symmetric(&members));
    }
}

mod removal {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_reference_remains() {
        for id in 0..7 {
            let members = remove_member(&default_family(), MemberId(id)).unwrap();
            assert_eq!(members.len(), 6);
            assert!(members.iter().all(|member| !member.references(MemberId(id))));
        }
    }
}

mod sanitizer {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_idempotent_on_messy_input() {
        // GIVEN
        let raw = json!([
            { "id": "3", "name": "A", "gender": "man", "partners": [3, "4", 4, "x"], "color": "red" },
            { "id": -1, "name": "negative" },
            { "id": 4, "name": 7, "gender": true, "parent1Id": "nope", "parent2Id": 3 },
            { "id": 3, "name": "duplicate" },
            "garbage"
        ]);

        // WHEN
        let once = sanitize(&raw);
        let twice = sanitize(&serde_json::to_value(&once).unwrap());

        // THEN
        assert_eq!(twice, once);
        assert_eq!(once.len(), 2);
        assert_eq!(once[0].partners, vec![MemberId(4)]);
        assert_eq!(once[1].name, "7");
        assert_eq!(once[1].parent1_id, None);
        assert_eq!(once[1].parent2_id, Some(MemberId(3)));
    }

    #[test]
    fn test_merge_unions_partners() {
        let defaults = vec![Member::new(MemberId(1), "A", "man").with_partners([MemberId(2)])];
        let stored = vec![Member::new(MemberId(1), "A2", "man").with_partners([MemberId(3)])];

        let merged = merge(&stored, &defaults);

        assert_eq!(merged[0].name, "A2");
        assert_eq!(merged[0].partners, vec![MemberId(2), MemberId(3)]);
    }
}

mod offspring {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_link_then_infer_creates_exactly_one_child() {
        // GIVEN
        let members = link_partners(&unlinked_couple(), MemberId(1), MemberId(2)).unwrap();

        // WHEN inference runs twice
        let first = infer_automatic_child(&members, MemberId(1), MemberId(2));
        let second = infer_automatic_child(&first.members, MemberId(2), MemberId(1));

        // THEN
        let children = second
            .members
            .iter()
            .filter(|member| member.has_parent_pair(MemberId(1), MemberId(2)))
            .count();
        assert_eq!(children, 1);
        assert!(first.child_name.is_some());
        assert!(second.child_name.is_none());
    }
}
