//! Built-in sample family.

use pedigree_core::{Member, MemberId};

/// Member the tree is anchored at when nothing else is configured.
pub const DEFAULT_ROOT_ID: MemberId = MemberId(0);

/// Key under which the canonical member list is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "pedigreeTreeData";

/// Three generations: a couple, their son and his partner, and three grandchildren.
pub fn default_family() -> Vec<Member> {
    let id = MemberId::new;
    vec![
        Member::new(id(0), "Niclas Superlongsurname", "man").with_partners([id(1)]),
        Member::new(id(1), "Iliana", "woman")
            .with_nickname("Illi")
            .with_partners([id(0)]),
        Member::new(id(2), "James", "man")
            .with_parents(Some(id(0)), Some(id(1)))
            .with_partners([id(3)]),
        Member::new(id(3), "Alexandra", "woman").with_partners([id(2)]),
        Member::new(id(4), "Eric", "man").with_parents(Some(id(3)), Some(id(2))),
        Member::new(id(5), "Jane", "woman").with_parents(Some(id(2)), Some(id(3))),
        Member::new(id(6), "Jasper", "man").with_parents(Some(id(2)), Some(id(3))),
    ]
}
