//! Multi-partner reconciliation tests.
//!
//! These tests seed a member with several partners through the mock seeders
//! and check that reconciliation restores every partnership exactly once.

use pedigree_reconcile::{add_missing_marriages, fix_spouse_identities, reconcile};
use pedigree_session::Seeder;
use pedigree_tests::prelude::*;

fn jasper_session() -> TreeSession {
    let config = TreeConfig::default().with_root(MemberId(1));
    TreeSession::with_members(&jasper_family(), config)
}

mod identity_repair {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_misattributed_spouses_are_renamed_in_partner_order() {
        // GIVEN four marriages all labelled with Jasper himself
        let index = CanonicalIndex::from_members(&jasper_family());
        let mut node = HierarchyNode::new(MemberId(1), "Jasper");
        for _ in 0..4 {
            node = node.with_marriage(Marriage::childless(SpouseDescriptor::new(
                MemberId(1),
                "Jasper",
            )));
        }

        // WHEN
        let fixed = fix_spouse_identities(&node, &index);

        // THEN
        assert_eq!(
            fixed.spouse_names(),
            vec!["Pareja1", "Pareja2", "Pareja3", "Pareja4"]
        );
    }

    #[test]
    fn test_seeded_children_stay_with_repaired_marriages() {
        // GIVEN the misattributing seeder's output
        let session = jasper_session();
        let request = session.begin_render().unwrap();
        let seeded = MisattributingSeeder
            .seed(&request.members, request.root)
            .unwrap();

        // WHEN
        let hierarchy = session.finish_render(&request, &seeded).unwrap();

        // THEN the first marriage keeps its child under the first partner
        let root = &hierarchy.roots[0];
        let marriages = root.marriage_list();
        assert_eq!(marriages[0].spouse.as_ref().unwrap().name, "Pareja1");
        assert_eq!(marriages[0].children[0].name, "Hijo1");
        assert_eq!(marriages[1].spouse.as_ref().unwrap().name, "Pareja2");
        assert_eq!(marriages[1].children[0].name, "Hija2");
    }
}

mod completeness {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_childless_partners_are_appended() {
        // GIVEN marriages only for the partners with children
        let members = jasper_family();
        let seeded = ChildGroupSeeder.seed(&members, MemberId(1)).unwrap();
        let index = CanonicalIndex::from_members(&members);

        // WHEN
        let completed = add_missing_marriages(&seeded.roots[0], &index);

        // THEN
        let marriages = completed.marriage_list();
        assert_eq!(marriages.len(), 4);
        assert_eq!(marriages[2].spouse.as_ref().unwrap().id, MemberId(12));
        assert_eq!(marriages[3].spouse.as_ref().unwrap().id, MemberId(13));
        assert!(marriages[2].children.is_empty());
    }

    #[test]
    fn test_every_partner_once_after_render() {
        for hierarchy in [
            jasper_session().render(&ChildGroupSeeder).unwrap(),
            jasper_session().render(&MisattributingSeeder).unwrap(),
        ] {
            assert_eq!(
                hierarchy.roots[0].spouse_ids(),
                vec![MemberId(10), MemberId(11), MemberId(12), MemberId(13)]
            );
        }
    }
}

mod no_op {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_correct_hierarchy_is_returned_equal() {
        // GIVEN a seeded hierarchy already completed once
        let members = jasper_family();
        let index = CanonicalIndex::from_members(&members);
        let seeded = ChildGroupSeeder.seed(&members, MemberId(1)).unwrap();
        let once = reconcile(&seeded, &index);

        // WHEN reconciled again
        let twice = reconcile(&once, &index);

        // THEN
        assert_eq!(twice, once);
    }

    #[test]
    fn test_seeded_input_is_untouched() {
        let members = jasper_family();
        let index = CanonicalIndex::from_members(&members);
        let seeded = MisattributingSeeder.seed(&members, MemberId(1)).unwrap();
        let before = seeded.clone();

        let _ = reconcile(&seeded, &index);

        assert_eq!(seeded, before);
    }
}
