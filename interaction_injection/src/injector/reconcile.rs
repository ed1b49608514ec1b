//! Per-object reconciliation against the host.

use game_world::{BehaviorType, Host, InteractionRef, ObjectId};
use tracing::trace;

use crate::error::Result;

/// Summary of one injection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InjectionReport {
    /// Objects whose interaction sets were examined.
    pub objects_visited: usize,
    /// Interactions appended across those objects.
    pub interactions_added: usize,
}

impl InjectionReport {
    /// Fold another report into this one.
    pub fn merge(&mut self, other: InjectionReport) {
        self.objects_visited += other.objects_visited;
        self.interactions_added += other.interactions_added;
    }
}

/// Summary of one removal pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemovalReport {
    pub objects_visited: usize,
    pub interactions_removed: usize,
}

/// Apply the injection rule to one object.
///
/// Each interaction is appended unless the object already exposes its behavior
/// type. A match skips only that interaction; the rest are still considered, in
/// order.
pub fn inject_into<H: Host + ?Sized>(
    host: &mut H,
    object: ObjectId,
    interactions: &[InteractionRef],
) -> Result<InjectionReport> {
    let mut report = InjectionReport {
        objects_visited: 1,
        interactions_added: 0,
    };

    for interaction in interactions {
        let behavior = interaction.behavior();
        if host.has_behavior(object, &behavior)? {
            trace!(target: "injection", "Object {} already has {}", object, behavior);
            continue;
        }

        host.add_interaction(object, interaction.clone())?;
        report.interactions_added += 1;
    }

    Ok(report)
}

/// Remove every entry of a behavior type from one object.
///
/// Works from a snapshot of the object's set and removes matches from the live
/// set by identity, so the host's collection is never mutated while iterated.
pub fn strip_behavior<H: Host + ?Sized>(
    host: &mut H,
    object: ObjectId,
    behavior: &BehaviorType,
) -> Result<usize> {
    let snapshot = host.interactions(object)?;
    let mut removed = 0;

    for entry in snapshot.iter().filter(|e| &e.behavior() == behavior) {
        host.remove_interaction(object, entry)?;
        removed += 1;
    }

    if removed > 0 {
        trace!(target: "injection", "Removed {} x{} from object {}", behavior, removed, object);
    }
    Ok(removed)
}
