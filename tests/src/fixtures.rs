//! Member fixtures.

use pedigree_core::{Member, MemberId};

/// Jasper (1, man) partnered with Pareja1..Pareja4 (10..13, women).
///
/// Only Pareja1 and Pareja2 have children with him: Hijo1 (100) and
/// Hija2 (101).
pub fn jasper_family() -> Vec<Member> {
    let partners = [MemberId(10), MemberId(11), MemberId(12), MemberId(13)];
    let mut members = vec![Member::new(MemberId(1), "Jasper", "man").with_partners(partners)];
    for (n, id) in partners.iter().enumerate() {
        members.push(
            Member::new(*id, format!("Pareja{}", n + 1), "woman").with_partners([MemberId(1)]),
        );
    }
    members.push(
        Member::new(MemberId(100), "Hijo1", "man")
            .with_parents(Some(MemberId(1)), Some(MemberId(10))),
    );
    members.push(
        Member::new(MemberId(101), "Hija2", "woman")
            .with_parents(Some(MemberId(1)), Some(MemberId(11))),
    );
    members
}

/// Two unlinked members of opposite gender, ids 1 (man) and 2 (woman).
pub fn unlinked_couple() -> Vec<Member> {
    vec![
        Member::new(MemberId(1), "Eric", "man"),
        Member::new(MemberId(2), "Jane", "woman"),
    ]
}

/// True if every partner link between existing members is mirrored.
pub fn is_symmetric(members: &[Member]) -> bool {
    members.iter().all(|member| {
        member.partners.iter().all(|partner| {
            members
                .iter()
                .find(|other| other.id == *partner)
                .map_or(true, |other| other.has_partner(member.id))
        })
    })
}
