//! The in-memory entity store and relationship graph.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::RwLock;

use serde_json::{Map, Value, json};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::schema::{self, EntityType, RelationDef, RelationKey};
use crate::types::Instance;
use crate::validate::{self, IdPolicy};

/// A relationship edge in canonical orientation.
///
/// `left` and `right` hold ids of the types given by
/// [`RelationKey::left_type`] and [`RelationKey::right_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Edge {
    key: RelationKey,
    left: u64,
    right: u64,
}

#[derive(Debug, Default)]
struct Inner {
    counters: BTreeMap<EntityType, u64>,
    things: BTreeMap<EntityType, BTreeMap<u64, Instance>>,
    edges: BTreeSet<Edge>,
}

/// The in-memory entity and relationship store.
///
/// A single `RwLock` guards all state; share the store via `Arc`. IDs are
/// allocated from a monotonically increasing per-type counter and are never
/// reused, so deleting id 5 and asking for it again reports not-found rather
/// than resurrecting anything.
#[derive(Debug, Default)]
pub struct ThingStore {
    inner: RwLock<Inner>,
}

impl ThingStore {
    /// Creates an empty store.
    pub fn new() -> ThingStore {
        ThingStore::default()
    }

    /// Creates an instance from a payload, assigning a fresh id.
    ///
    /// Defaults are applied for omitted optional fields. Unknown fields,
    /// missing or empty mandatory fields and mistyped values are rejected
    /// with aggregated [`StoreError::Validation`] messages. Content is never
    /// deduplicated: two identical payloads yield two instances.
    pub fn create(&self, ty: EntityType, payload: &Map<String, Value>) -> StoreResult<Instance> {
        let values = validate::document(ty, payload, IdPolicy::Reject)?;

        let mut inner = self.lock_write();
        let counter = inner.counters.entry(ty).or_insert(0);
        *counter += 1;
        let id = *counter;

        let mut instance = Instance::with_defaults(ty, id);
        for (name, value) in values {
            instance.set(name, value);
        }

        debug!(entity = ty.plural(), id, "instance created");
        inner
            .things
            .entry(ty)
            .or_default()
            .insert(id, instance.clone());
        Ok(instance)
    }

    /// Fetches an instance by its id route segment.
    pub fn get(&self, ty: EntityType, id: &str) -> StoreResult<Instance> {
        let inner = self.lock_read();
        lookup(&inner, ty, id).cloned()
    }

    /// Returns every instance of a type. Ordering is not part of the contract.
    pub fn list(&self, ty: EntityType) -> Vec<Instance> {
        let inner = self.lock_read();
        inner
            .things
            .get(&ty)
            .map(|m| m.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Merge update: only supplied fields are overwritten.
    pub fn amend(
        &self,
        ty: EntityType,
        id: &str,
        payload: &Map<String, Value>,
    ) -> StoreResult<Instance> {
        let values = validate::partial(ty, payload)?;

        let mut inner = self.lock_write();
        let numeric = lookup(&inner, ty, id)?.id;
        let instance = inner
            .things
            .get_mut(&ty)
            .and_then(|m| m.get_mut(&numeric))
            .ok_or_else(|| not_found(ty, id))?;
        for (name, value) in values {
            instance.set(name, value);
        }
        debug!(entity = ty.plural(), id = numeric, "instance amended");
        Ok(instance.clone())
    }

    /// Replace update: mandatory fields must be present in the payload and
    /// omitted optional fields reset to their defaults.
    ///
    /// A replace lacking a mandatory field fails even where a merge to the
    /// same id would have succeeded by leaving the old value intact; the
    /// asymmetry between the two verbs is part of the contract.
    pub fn replace(
        &self,
        ty: EntityType,
        id: &str,
        payload: &Map<String, Value>,
    ) -> StoreResult<Instance> {
        let values = validate::document(ty, payload, IdPolicy::Ignore)?;

        let mut inner = self.lock_write();
        let numeric = lookup(&inner, ty, id)?.id;
        let mut replacement = Instance::with_defaults(ty, numeric);
        for (name, value) in values {
            replacement.set(name, value);
        }
        debug!(entity = ty.plural(), id = numeric, "instance replaced");
        inner
            .things
            .entry(ty)
            .or_default()
            .insert(numeric, replacement.clone());
        Ok(replacement)
    }

    /// Deletes an instance and every relationship edge incident to it.
    ///
    /// Deleting the same id twice reports not-found on the second call.
    pub fn delete(&self, ty: EntityType, id: &str) -> StoreResult<()> {
        let mut inner = self.lock_write();
        let numeric = lookup(&inner, ty, id)?.id;
        inner.things.entry(ty).or_default().remove(&numeric);
        inner.edges.retain(|e| !incident(e, ty, numeric));
        debug!(entity = ty.plural(), id = numeric, "instance deleted");
        Ok(())
    }

    /// Adds a relationship edge between a parent and a child instance.
    ///
    /// Linking an already-linked pair is a no-op. The relation name must be
    /// one of the routes in [`schema::RELATIONS`].
    pub fn link(
        &self,
        parent: EntityType,
        parent_id: &str,
        relation: &RelationDef,
        child_id: &str,
    ) -> StoreResult<()> {
        let mut inner = self.lock_write();
        let parent_numeric = lookup(&inner, parent, parent_id)
            .map_err(|_| parent_not_found(parent, parent_id, relation.name))?
            .id;
        let child_numeric = lookup(&inner, relation.child, child_id)
            .map_err(|_| StoreError::ChildNotFound {
                id: child_id.to_string(),
            })?
            .id;

        let edge = orient(relation, parent_numeric, child_numeric);
        debug!(
            parent = parent.plural(),
            parent_id = parent_numeric,
            relation = relation.name,
            child_id = child_numeric,
            "edge created"
        );
        inner.edges.insert(edge);
        Ok(())
    }

    /// Removes one relationship edge.
    ///
    /// A structurally non-numeric parent id is reported as
    /// [`StoreError::MalformedParentId`] (surfaced to clients as 400, a
    /// preserved quirk of the original service); a well-formed but absent
    /// edge is [`StoreError::EdgeNotFound`].
    pub fn unlink(
        &self,
        parent: EntityType,
        parent_id: &str,
        relation: &RelationDef,
        child_id: &str,
    ) -> StoreResult<()> {
        let edge_not_found = || StoreError::EdgeNotFound {
            entity: parent,
            id: parent_id.to_string(),
            relation: relation.name.to_string(),
            child_id: child_id.to_string(),
        };

        let Some(parent_numeric) = parse_id(parent_id) else {
            return Err(StoreError::MalformedParentId {
                entity: parent,
                id: parent_id.to_string(),
                relation: relation.name.to_string(),
                child_id: child_id.to_string(),
            });
        };
        let Some(child_numeric) = parse_id(child_id) else {
            return Err(edge_not_found());
        };

        let mut inner = self.lock_write();
        let edge = orient(relation, parent_numeric, child_numeric);
        if inner.edges.remove(&edge) {
            debug!(
                parent = parent.plural(),
                parent_id = parent_numeric,
                relation = relation.name,
                child_id = child_numeric,
                "edge removed"
            );
            Ok(())
        } else {
            Err(edge_not_found())
        }
    }

    /// Lists the instances related to a parent through one relation route.
    ///
    /// Reports [`StoreError::ParentNotFound`] for an absent parent; callers
    /// decide whether to surface that or degrade to an empty listing.
    pub fn related(
        &self,
        parent: EntityType,
        parent_id: &str,
        relation: &RelationDef,
    ) -> StoreResult<Vec<Instance>> {
        let inner = self.lock_read();
        let parent_numeric = lookup(&inner, parent, parent_id)
            .map_err(|_| parent_not_found(parent, parent_id, relation.name))?
            .id;

        let children = inner.things.get(&relation.child);
        Ok(child_ids(&inner.edges, relation, parent_numeric)
            .filter_map(|id| children.and_then(|m| m.get(&id)).cloned())
            .collect())
    }

    /// Returns, for every relation route owned by this type, the ids linked
    /// to the given instance. Relations with no edges are omitted.
    pub fn memberships(&self, ty: EntityType, id: u64) -> Vec<(&'static RelationDef, Vec<u64>)> {
        let inner = self.lock_read();
        ty.relations()
            .filter_map(|def| {
                let ids: Vec<u64> = child_ids(&inner.edges, def, id).collect();
                if ids.is_empty() { None } else { Some((def, ids)) }
            })
            .collect()
    }

    fn lock_read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

/// Parses an id route segment. IDs are strictly numeric; anything else,
/// whitespace padding included, can never name an instance.
fn parse_id(segment: &str) -> Option<u64> {
    segment.parse().ok()
}

fn not_found(ty: EntityType, id: &str) -> StoreError {
    StoreError::NotFound {
        entity: ty,
        id: id.to_string(),
    }
}

fn parent_not_found(ty: EntityType, id: &str, relation: &str) -> StoreError {
    StoreError::ParentNotFound {
        entity: ty,
        id: id.to_string(),
        relation: relation.to_string(),
    }
}

fn lookup<'a>(inner: &'a Inner, ty: EntityType, id: &str) -> Result<&'a Instance, StoreError> {
    parse_id(id)
        .and_then(|numeric| inner.things.get(&ty).and_then(|m| m.get(&numeric)))
        .ok_or_else(|| not_found(ty, id))
}

/// Builds the canonical edge for a route-visible (parent, child) pair.
fn orient(relation: &RelationDef, parent_id: u64, child_id: u64) -> Edge {
    let (left, right) = if relation.parent_is_left {
        (parent_id, child_id)
    } else {
        (child_id, parent_id)
    };
    Edge {
        key: relation.key,
        left,
        right,
    }
}

fn incident(edge: &Edge, ty: EntityType, id: u64) -> bool {
    (edge.key.left_type() == ty && edge.left == id)
        || (edge.key.right_type() == ty && edge.right == id)
}

/// Iterates the ids on the child side of a relation for one parent.
fn child_ids<'a>(
    edges: &'a BTreeSet<Edge>,
    relation: &'a RelationDef,
    parent_id: u64,
) -> impl Iterator<Item = u64> + 'a {
    edges.iter().filter_map(move |e| {
        if e.key != relation.key {
            return None;
        }
        if relation.parent_is_left && e.left == parent_id {
            Some(e.right)
        } else if !relation.parent_is_left && e.right == parent_id {
            Some(e.left)
        } else {
            None
        }
    })
}

impl ThingStore {
    /// Seeds the canonical demo fixture the original service boots with:
    /// two todos filed as tasks of an "Office Work" project, and "Office" /
    /// "Home" categories with both todos filed under "Office".
    pub fn seed_demo_data(&self) -> StoreResult<()> {
        let scan = self.create(EntityType::Todo, &fixture(json!({"title": "scan paperwork"})))?;
        let file = self.create(EntityType::Todo, &fixture(json!({"title": "file paperwork"})))?;
        let office_work =
            self.create(EntityType::Project, &fixture(json!({"title": "Office Work"})))?;
        let office = self.create(EntityType::Category, &fixture(json!({"title": "Office"})))?;
        let _home = self.create(EntityType::Category, &fixture(json!({"title": "Home"})))?;

        let tasks = schema::relation(EntityType::Project, "tasks").expect("tasks relation");
        let filed = schema::relation(EntityType::Todo, "categories").expect("categories relation");

        let project_id = office_work.id.to_string();
        let office_id = office.id.to_string();
        self.link(EntityType::Project, &project_id, tasks, &scan.id.to_string())?;
        self.link(EntityType::Project, &project_id, tasks, &file.id.to_string())?;
        self.link(EntityType::Todo, &scan.id.to_string(), filed, &office_id)?;
        self.link(EntityType::Todo, &file.id.to_string(), filed, &office_id)?;
        Ok(())
    }
}

fn fixture(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
