//! Tree session.

use pedigree_core::{Hierarchy, Member, MemberId};
use pedigree_graph::{
    find_parent_cycle, merge, prepare_for_seeding, sanitize, sanitize_members, CanonicalIndex,
};
use pedigree_mutation::{next_id, MutationExecutor, NewMember, RelationOutcome};
use pedigree_reconcile::{reconcile, reconcile_json};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::TreeConfig;
use crate::error::{SessionError, SessionResult};
use crate::generation::Generation;
use crate::result::{RelationSummary, RenderRequest};
use crate::seeder::Seeder;
use crate::transfer::{parse_import, render_export};

/// Owner of the canonical member list.
///
/// Mutations go through the mutation engine and replace the list as a whole;
/// a failed mutation leaves it untouched. Each committed change advances the
/// generation.
#[derive(Debug, Clone)]
pub struct TreeSession {
    config: TreeConfig,
    members: Vec<Member>,
    generation: Generation,
}

impl TreeSession {
    /// Create a session holding the configured default members.
    pub fn new(config: TreeConfig) -> Self {
        Self {
            members: config.defaults.clone(),
            config,
            generation: Generation::new(),
        }
    }

    /// Create a session over an explicit member list.
    pub fn with_members(members: &[Member], config: TreeConfig) -> Self {
        Self {
            members: sanitize_members(members),
            config,
            generation: Generation::new(),
        }
    }

    /// Restore a session from a persisted snapshot.
    ///
    /// The snapshot is sanitized and merged over the configured defaults.
    /// A missing, unreadable or empty snapshot yields the defaults.
    pub fn restore(stored: Option<&str>, config: TreeConfig) -> Self {
        let Some(text) = stored else {
            debug!(key = %config.storage_key, "no stored tree, using defaults");
            return Self::new(config);
        };

        let raw: Value = match serde_json::from_str(text) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    key = %config.storage_key,
                    %err,
                    "stored tree is not valid JSON, using defaults"
                );
                return Self::new(config);
            }
        };

        let stored = sanitize(&raw);
        if stored.is_empty() {
            warn!(key = %config.storage_key, "stored tree has no valid members, using defaults");
            return Self::new(config);
        }

        let members = merge(&stored, &config.defaults);
        info!(members = members.len(), "restored tree");
        Self {
            members,
            config,
            generation: Generation::new(),
        }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Canonical lookup over the current members.
    pub fn index(&self) -> CanonicalIndex {
        CanonicalIndex::from_members(&prepare_for_seeding(&self.members))
    }

    /// Back to the configured defaults.
    pub fn reset(&mut self) {
        let defaults = self.config.defaults.clone();
        self.commit(defaults);
        info!("tree reset to defaults");
    }

    // ==================== Mutations ====================

    /// Add a member, returning its id.
    pub fn add_member(&mut self, data: NewMember) -> SessionResult<MemberId> {
        let id = match data.id {
            Some(id) => id,
            None => next_id(&self.members)?,
        };
        let next = self.executor().add(data.with_id(id))?;
        self.commit(next);
        Ok(id)
    }

    pub fn remove_member(&mut self, id: MemberId) -> SessionResult<()> {
        let next = self.executor().remove(id)?;
        self.commit(next);
        Ok(())
    }

    pub fn edit_member(&mut self, id: MemberId, name: &str, gender: &str) -> SessionResult<()> {
        let next = self.executor().edit(id, name, gender)?;
        self.commit(next);
        Ok(())
    }

    /// Link two partners. Returns the name of an automatically added child.
    pub fn link_partners(&mut self, a: MemberId, b: MemberId) -> SessionResult<Option<String>> {
        let outcome = self.executor().link(a, b)?;
        self.commit(outcome.members);
        Ok(outcome.child_name)
    }

    pub fn add_partner(&mut self, id: MemberId, name: &str) -> SessionResult<RelationSummary> {
        let outcome = self.executor().add_partner(id, name)?;
        Ok(self.commit_relation(outcome))
    }

    pub fn add_child(
        &mut self,
        father: MemberId,
        mother: MemberId,
        name: &str,
        gender: &str,
    ) -> SessionResult<RelationSummary> {
        let outcome = self.executor().add_child(father, mother, name, gender)?;
        Ok(self.commit_relation(outcome))
    }

    pub fn add_parent(
        &mut self,
        child: MemberId,
        name: &str,
        gender: &str,
    ) -> SessionResult<RelationSummary> {
        let outcome = self.executor().add_parent(child, name, gender)?;
        Ok(self.commit_relation(outcome))
    }

    fn executor(&self) -> MutationExecutor<'_> {
        MutationExecutor::new(&self.members).with_policy(self.config.offspring.clone())
    }

    fn commit(&mut self, members: Vec<Member>) {
        self.members = members;
        let generation = self.generation.advance();
        debug!(generation = generation.value(), members = self.members.len(), "tree updated");
    }

    fn commit_relation(&mut self, outcome: RelationOutcome) -> RelationSummary {
        let summary = RelationSummary {
            related: outcome.related,
            created: outcome.created,
            offspring: outcome.offspring,
        };
        self.commit(outcome.members);
        summary
    }

    // ==================== Import / export ====================

    /// Replace the tree with an imported document. Returns the member count.
    ///
    /// On error the current tree is kept.
    pub fn import_json(&mut self, text: &str) -> SessionResult<usize> {
        let members = parse_import(text)?;
        let count = members.len();
        self.commit(members);
        info!(members = count, "imported tree");
        Ok(count)
    }

    pub fn export_json(&self) -> SessionResult<String> {
        Ok(render_export(&self.members)?)
    }

    // ==================== Rendering ====================

    /// Snapshot the tree for seeding.
    ///
    /// The configured root is used when it exists; otherwise the first
    /// member. Parent cycles are reported but rendered as far as the seeder
    /// manages.
    pub fn begin_render(&self) -> SessionResult<RenderRequest> {
        let members = prepare_for_seeding(&self.members);
        let root = self.resolve_root(&members)?;

        if let Some(cycle) = find_parent_cycle(&members) {
            let path: Vec<String> = cycle.iter().map(ToString::to_string).collect();
            warn!(cycle = %path.join(" -> "), "parent cycle in tree, rendering best-effort");
        }

        let index = CanonicalIndex::from_members(&members);
        Ok(RenderRequest {
            generation: self.generation,
            root,
            members,
            index,
        })
    }

    /// Reconcile a seeded hierarchy, unless the tree changed since `request`.
    pub fn finish_render(&self, request: &RenderRequest, seeded: &Hierarchy) -> Option<Hierarchy> {
        if !self.is_current(request) {
            return None;
        }
        Some(reconcile(seeded, &request.index))
    }

    /// [`finish_render`](Self::finish_render) for untyped seeder output.
    pub fn finish_render_json(&self, request: &RenderRequest, seeded: &Value) -> Option<Value> {
        if !self.is_current(request) {
            return None;
        }
        Some(reconcile_json(seeded, &request.index))
    }

    /// Seed and reconcile the current tree in one step.
    pub fn render<S: Seeder>(&self, seeder: &S) -> SessionResult<Hierarchy> {
        let request = self.begin_render()?;
        let seeded = seeder
            .seed(&request.members, request.root)
            .map_err(|err| SessionError::seed(err.to_string()))?;
        let hierarchy = reconcile(&seeded, &request.index);
        info!(root = %request.root, roots = hierarchy.roots.len(), "rendered tree");
        Ok(hierarchy)
    }

    fn is_current(&self, request: &RenderRequest) -> bool {
        if request.generation != self.generation {
            info!(
                requested = request.generation.value(),
                current = self.generation.value(),
                "discarding stale render"
            );
            return false;
        }
        true
    }

    fn resolve_root(&self, members: &[Member]) -> SessionResult<MemberId> {
        let configured = self.config.root_id;
        if members.iter().any(|member| member.id == configured) {
            return Ok(configured);
        }
        let fallback = members.first().ok_or(SessionError::EmptyGraph)?.id;
        warn!(%configured, %fallback, "root member missing, anchoring at first member");
        Ok(fallback)
    }
}

impl Default for TreeSession {
    fn default() -> Self {
        Self::new(TreeConfig::default())
    }
}
