//! Mock seeders reproducing the known defects of the external layout step.

use std::collections::HashSet;

use pedigree_core::{Hierarchy, HierarchyNode, Marriage, Member, MemberId, SpouseDescriptor};
use pedigree_session::Seeder;
use thiserror::Error;

/// Seeder failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("root member {0} not found")]
    RootNotFound(MemberId),
}

/// Derives marriages only from shared children.
///
/// A partner with whom a member has no recorded child does not appear.
/// Children with a single known parent are grouped under a marriage without
/// a spouse.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChildGroupSeeder;

impl ChildGroupSeeder {
    fn node(
        &self,
        members: &[Member],
        member: &Member,
        visited: &mut HashSet<MemberId>,
    ) -> HierarchyNode {
        let mut node = HierarchyNode::new(member.id, member.name.clone());
        if !visited.insert(member.id) {
            return node;
        }

        let children: Vec<&Member> = members
            .iter()
            .filter(|child| child.parent_ids().any(|parent| parent == member.id))
            .collect();

        let mut groups: Vec<(Option<MemberId>, Vec<&Member>)> = Vec::new();
        for child in children {
            let other = child.parent_ids().find(|parent| *parent != member.id);
            match groups.iter_mut().find(|(spouse, _)| *spouse == other) {
                Some((_, group)) => group.push(child),
                None => groups.push((other, vec![child])),
            }
        }

        for (spouse, group) in groups {
            let spouse = spouse.and_then(|id| members.iter().find(|m| m.id == id));
            let children = group
                .into_iter()
                .map(|child| self.node(members, child, visited))
                .collect();
            node = node.with_marriage(Marriage {
                spouse: spouse.map(SpouseDescriptor::from_member),
                children,
                extra: Default::default(),
            });
        }
        node
    }
}

impl Seeder for ChildGroupSeeder {
    type Error = SeedError;

    fn seed(&self, members: &[Member], root: MemberId) -> Result<Hierarchy, SeedError> {
        let root = members
            .iter()
            .find(|member| member.id == root)
            .ok_or(SeedError::RootNotFound(root))?;
        let mut visited = HashSet::new();
        Ok(Hierarchy::new(vec![self.node(members, root, &mut visited)]))
    }
}

/// [`ChildGroupSeeder`] that then labels every spouse with the owning
/// member's own id and name.
#[derive(Debug, Clone, Copy, Default)]
pub struct MisattributingSeeder;

fn misattribute(node: &HierarchyNode) -> HierarchyNode {
    let marriages = node.marriages.as_ref().map(|marriages| {
        marriages
            .iter()
            .map(|marriage| Marriage {
                spouse: marriage
                    .spouse
                    .as_ref()
                    .map(|_| SpouseDescriptor::new(node.id, node.name.clone())),
                children: marriage.children.iter().map(misattribute).collect(),
                extra: marriage.extra.clone(),
            })
            .collect()
    });
    HierarchyNode {
        marriages,
        ..node.clone()
    }
}

impl Seeder for MisattributingSeeder {
    type Error = SeedError;

    fn seed(&self, members: &[Member], root: MemberId) -> Result<Hierarchy, SeedError> {
        let seeded = ChildGroupSeeder.seed(members, root)?;
        Ok(Hierarchy::new(seeded.roots.iter().map(misattribute).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::jasper_family;

    #[test]
    fn test_child_groups_only() {
        let hierarchy = ChildGroupSeeder.seed(&jasper_family(), MemberId(1)).unwrap();

        assert_eq!(hierarchy.roots[0].spouse_names(), vec!["Pareja1", "Pareja2"]);
    }

    #[test]
    fn test_misattribution() {
        let hierarchy = MisattributingSeeder.seed(&jasper_family(), MemberId(1)).unwrap();

        assert_eq!(hierarchy.roots[0].spouse_names(), vec!["Jasper", "Jasper"]);
    }

    #[test]
    fn test_missing_root() {
        let err = ChildGroupSeeder.seed(&[], MemberId(3)).unwrap_err();
        assert_eq!(err, SeedError::RootNotFound(MemberId(3)));
    }
}
