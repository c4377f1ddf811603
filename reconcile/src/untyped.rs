//! Reconciliation of untyped seeder output.
//!
//! Seeders hand back plain JSON. The tree is walked as JSON and each node is
//! decoded on its own, with its children held back, so a malformed node costs
//! only its own subtree the repair.

use pedigree_core::HierarchyNode;
use pedigree_graph::CanonicalIndex;
use serde_json::{Map, Value};
use tracing::warn;

use crate::engine::reconcile_node;

/// Reconcile a JSON array of hierarchy roots.
///
/// Nodes that fail to decode are returned unchanged together with their
/// subtree. Non-array input is returned unchanged.
pub fn reconcile_json(raw: &Value, index: &CanonicalIndex) -> Value {
    let Value::Array(roots) = raw else {
        warn!("seeded hierarchy is not an array, passing through");
        return raw.clone();
    };

    Value::Array(roots.iter().map(|root| reconcile_value(root, index)).collect())
}

fn reconcile_value(raw: &Value, index: &CanonicalIndex) -> Value {
    let Some((shallow, children)) = split_children(raw) else {
        warn!("malformed hierarchy node, passing through");
        return raw.clone();
    };

    let node: HierarchyNode = match serde_json::from_value(shallow) {
        Ok(node) => node,
        Err(err) => {
            warn!(%err, "malformed hierarchy node, passing through");
            return raw.clone();
        }
    };
    if !index.contains(node.id) {
        return raw.clone();
    }

    let mut repaired = match serde_json::to_value(reconcile_node(&node, index)) {
        Ok(value) => value,
        Err(err) => {
            warn!(node = %node.id, %err, "could not encode reconciled node, passing through");
            return raw.clone();
        }
    };

    // Marriages keep their positions; appended ones come after and are childless
    if let Some(marriages) = repaired.get_mut("marriages").and_then(Value::as_array_mut) {
        for (marriage, kids) in marriages.iter_mut().zip(children) {
            let (Some(marriage), Some(kids)) = (marriage.as_object_mut(), kids) else {
                continue;
            };
            let kids = match kids {
                Value::Array(kids) => Value::Array(
                    kids.iter().map(|kid| reconcile_value(kid, index)).collect(),
                ),
                other => other,
            };
            marriage.insert("children".into(), kids);
        }
    }
    repaired
}

/// A copy of `raw` with every marriage's children emptied, plus the removed
/// children per marriage. `None` when the marriage list has the wrong shape.
fn split_children(raw: &Value) -> Option<(Value, Vec<Option<Value>>)> {
    let mut node: Map<String, Value> = raw.as_object()?.clone();
    let mut children = Vec::new();

    match node.get_mut("marriages") {
        None | Some(Value::Null) => {}
        Some(Value::Array(marriages)) => {
            for marriage in marriages.iter_mut() {
                let marriage = marriage.as_object_mut()?;
                let kids = marriage.remove("children");
                if kids.is_some() {
                    marriage.insert("children".into(), Value::Array(Vec::new()));
                }
                children.push(kids);
            }
        }
        Some(_) => return None,
    }

    Some((Value::Object(node), children))
}
