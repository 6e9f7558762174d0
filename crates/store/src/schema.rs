//! Static entity and relationship schemas.
//!
//! Entity types are modeled as a tagged enum with an associated ordered
//! field-schema list rather than reflection: each field carries its kind,
//! mandatory flag and wire representation. Relationship routes are defined
//! in a single table mapping route-visible names onto canonical edge sets.

/// The entity families managed by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityType {
    /// A project, optionally holding todos as tasks.
    Project,
    /// A to-do item.
    Todo,
    /// A category that projects and todos can be filed under.
    Category,
}

/// The value kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form text. Defaults to the empty string.
    Text,
    /// A boolean flag. Defaults to false.
    Flag,
}

/// How a field is represented on the wire.
///
/// The original service serializes booleans inconsistently across entity
/// families: project flags travel as the strings `"true"`/`"false"` while a
/// todo's `doneStatus` is a native JSON boolean. External clients depend on
/// this, so the representation is part of the schema rather than a single
/// serializer decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireForm {
    /// Serialized as a JSON string.
    Text,
    /// Serialized as a native JSON boolean.
    Bool,
}

/// Schema for a single entity field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    /// Field name as it appears in payloads and responses.
    pub name: &'static str,
    /// Value kind.
    pub kind: FieldKind,
    /// Whether the field must be present and non-empty on create/replace.
    pub mandatory: bool,
    /// Wire representation of the field value.
    pub wire: WireForm,
}

const PROJECT_FIELDS: &[FieldSchema] = &[
    FieldSchema {
        name: "title",
        kind: FieldKind::Text,
        mandatory: false,
        wire: WireForm::Text,
    },
    FieldSchema {
        name: "completed",
        kind: FieldKind::Flag,
        mandatory: false,
        wire: WireForm::Text,
    },
    FieldSchema {
        name: "active",
        kind: FieldKind::Flag,
        mandatory: false,
        wire: WireForm::Text,
    },
    FieldSchema {
        name: "description",
        kind: FieldKind::Text,
        mandatory: false,
        wire: WireForm::Text,
    },
];

const TODO_FIELDS: &[FieldSchema] = &[
    FieldSchema {
        name: "title",
        kind: FieldKind::Text,
        mandatory: true,
        wire: WireForm::Text,
    },
    FieldSchema {
        name: "doneStatus",
        kind: FieldKind::Flag,
        mandatory: false,
        wire: WireForm::Bool,
    },
    FieldSchema {
        name: "description",
        kind: FieldKind::Text,
        mandatory: false,
        wire: WireForm::Text,
    },
];

const CATEGORY_FIELDS: &[FieldSchema] = &[
    FieldSchema {
        name: "title",
        kind: FieldKind::Text,
        mandatory: true,
        wire: WireForm::Text,
    },
    FieldSchema {
        name: "description",
        kind: FieldKind::Text,
        mandatory: false,
        wire: WireForm::Text,
    },
];

impl EntityType {
    /// All entity types, in declaration order.
    pub const ALL: [EntityType; 3] = [EntityType::Project, EntityType::Todo, EntityType::Category];

    /// Singular name, as used in per-verb error messages.
    pub fn singular(self) -> &'static str {
        match self {
            EntityType::Project => "project",
            EntityType::Todo => "todo",
            EntityType::Category => "category",
        }
    }

    /// Plural name, as used in route segments and envelopes.
    pub fn plural(self) -> &'static str {
        match self {
            EntityType::Project => "projects",
            EntityType::Todo => "todos",
            EntityType::Category => "categories",
        }
    }

    /// Resolves a route segment to an entity type.
    pub fn from_plural(segment: &str) -> Option<EntityType> {
        EntityType::ALL.into_iter().find(|t| t.plural() == segment)
    }

    /// The ordered field schemas for this entity type.
    pub fn fields(self) -> &'static [FieldSchema] {
        match self {
            EntityType::Project => PROJECT_FIELDS,
            EntityType::Todo => TODO_FIELDS,
            EntityType::Category => CATEGORY_FIELDS,
        }
    }

    /// Looks up a single field schema by name.
    pub fn field(self, name: &str) -> Option<&'static FieldSchema> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// The relationship routes whose parent is this entity type.
    pub fn relations(self) -> impl Iterator<Item = &'static RelationDef> {
        RELATIONS.iter().filter(move |r| r.parent == self)
    }
}

/// Identifies one of the canonical (undirected) edge sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RelationKey {
    /// project ⇄ todo membership (`tasks` / `tasksof`).
    ProjectTasks,
    /// project ⇄ category membership.
    ProjectCategories,
    /// todo ⇄ category membership.
    TodoCategories,
}

impl RelationKey {
    /// The entity type stored on the left side of edges with this key.
    pub fn left_type(self) -> EntityType {
        match self {
            RelationKey::ProjectTasks | RelationKey::ProjectCategories => EntityType::Project,
            RelationKey::TodoCategories => EntityType::Todo,
        }
    }

    /// The entity type stored on the right side of edges with this key.
    pub fn right_type(self) -> EntityType {
        match self {
            RelationKey::ProjectTasks => EntityType::Todo,
            RelationKey::ProjectCategories | RelationKey::TodoCategories => EntityType::Category,
        }
    }
}

/// A route-visible relationship definition.
///
/// `tasks` and `tasksof` are the two directions of the same canonical edge
/// set; linking through either is observable through both.
#[derive(Debug)]
pub struct RelationDef {
    /// Entity type owning the route (`/<parent>/:id/<name>`).
    pub parent: EntityType,
    /// Route-visible relation name.
    pub name: &'static str,
    /// Entity type on the other end; also keys the listing envelope.
    pub child: EntityType,
    /// Canonical edge set this route reads and writes.
    pub key: RelationKey,
    /// Whether the parent occupies the left side of the canonical edge.
    pub parent_is_left: bool,
}

/// All relationship routes.
pub const RELATIONS: &[RelationDef] = &[
    RelationDef {
        parent: EntityType::Project,
        name: "tasks",
        child: EntityType::Todo,
        key: RelationKey::ProjectTasks,
        parent_is_left: true,
    },
    RelationDef {
        parent: EntityType::Todo,
        name: "tasksof",
        child: EntityType::Project,
        key: RelationKey::ProjectTasks,
        parent_is_left: false,
    },
    RelationDef {
        parent: EntityType::Project,
        name: "categories",
        child: EntityType::Category,
        key: RelationKey::ProjectCategories,
        parent_is_left: true,
    },
    RelationDef {
        parent: EntityType::Todo,
        name: "categories",
        child: EntityType::Category,
        key: RelationKey::TodoCategories,
        parent_is_left: true,
    },
];

/// Looks up the relationship route for a parent type and relation name.
pub fn relation(parent: EntityType, name: &str) -> Option<&'static RelationDef> {
    RELATIONS.iter().find(|r| r.parent == parent && r.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_round_trip() {
        for ty in EntityType::ALL {
            assert_eq!(EntityType::from_plural(ty.plural()), Some(ty));
        }
        assert_eq!(EntityType::from_plural("widgets"), None);
        assert_eq!(EntityType::from_plural("todo"), None);
    }

    #[test]
    fn test_mandatory_fields() {
        assert!(EntityType::Todo.field("title").unwrap().mandatory);
        assert!(EntityType::Category.field("title").unwrap().mandatory);
        assert!(!EntityType::Project.field("title").unwrap().mandatory);
    }

    #[test]
    fn test_wire_forms_differ_across_families() {
        // Project flags travel as strings, a todo's doneStatus as a native bool.
        assert_eq!(EntityType::Project.field("completed").unwrap().wire, WireForm::Text);
        assert_eq!(EntityType::Todo.field("doneStatus").unwrap().wire, WireForm::Bool);
    }

    #[test]
    fn test_tasks_and_tasksof_share_an_edge_set() {
        let tasks = relation(EntityType::Project, "tasks").unwrap();
        let tasksof = relation(EntityType::Todo, "tasksof").unwrap();
        assert_eq!(tasks.key, tasksof.key);
        assert!(tasks.parent_is_left);
        assert!(!tasksof.parent_is_left);
        assert_eq!(tasks.child, EntityType::Todo);
        assert_eq!(tasksof.child, EntityType::Project);
    }

    #[test]
    fn test_unknown_relation() {
        assert!(relation(EntityType::Category, "tasks").is_none());
        assert!(relation(EntityType::Project, "tasksof").is_none());
    }
}
