//! Declarative routing tables for vocabulary translation.
//!
//! Which fields carry controlled-vocabulary terms is data, not code. Adding a
//! vocabulary field to a metadata profile means adding its name to one of the
//! tables below; the collector and the transformer walk these tables
//! generically.

/// Suffix marking the language-tagged companion of a base field
/// (e.g. `title_translated` next to `title`).
pub const TRANSLATED_SUFFIX: &str = "_translated";

/// Field holding the free-form keyword collection of an entity.
pub const TAGS_FIELD: &str = "tags";

/// Fields whose own value is a language-tagged map, collapsed in place.
pub const LANGUAGE_VALUE_FIELDS: &[&str] = &[
    "population_coverage",
    "provenance",
    "publisher_note",
    "rights",
];

/// Vocabulary fields of a dataset (package).
pub const PACKAGE_FIELDS: &[&str] = &[
    "access_rights",
    "applicable_legislation",
    "code_values",
    "coding_system",
    "conforms_to",
    "dcat_type",
    "frequency",
    "has_version",
    "health_category",
    "health_theme",
    "language",
    "legal_basis",
    "personal_data",
    "provenance_activity",
    "purpose",
    "qualified_attribution",
    "qualified_relation",
    "spatial_uri",
    "status",
    "theme",
    "type_of_data",
];

/// Vocabulary fields of a distribution (resource).
pub const RESOURCE_FIELDS: &[&str] = &[
    "access_rights",
    "applicable_legislation",
    "compress_format",
    "conforms_to",
    "format",
    "language",
    "license",
    "media_type",
    "package_format",
    "status",
];

/// Vocabulary fields of an access service attached to a resource.
pub const ACCESS_SERVICE_FIELDS: &[&str] = &[
    "access_rights",
    "applicable_legislation",
    "conforms_to",
    "format",
    "language",
    "license",
];

/// Child fields that must themselves be routed when their parent is routed.
///
/// The table is a directed graph over field names. It is walked depth-first;
/// the walk terminates because both this table and the record are finite.
pub const NESTED_FIELDS: &[(&str, &[&str])] = &[
    ("actedOnBehalfOf", &["type"]),
    ("provenance_activity", &["type", "wasAssociatedWith"]),
    ("qualified_attribution", &["role"]),
    ("qualified_relation", &["role"]),
    ("wasAssociatedWith", &["type", "actedOnBehalfOf"]),
];

/// Routed child fields of `field`, or `None` when `field` is a plain
/// vocabulary field.
pub fn nested_children(field: &str) -> Option<&'static [&'static str]> {
    NESTED_FIELDS
        .iter()
        .find(|(parent, _)| *parent == field)
        .map(|(_, children)| *children)
}

/// Kind of metadata entity a record represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Package,
    Resource,
    AccessService,
}

impl EntityKind {
    /// Vocabulary fields routed for this kind of entity.
    pub fn routed_fields(self) -> &'static [&'static str] {
        match self {
            EntityKind::Package => PACKAGE_FIELDS,
            EntityKind::Resource => RESOURCE_FIELDS,
            EntityKind::AccessService => ACCESS_SERVICE_FIELDS,
        }
    }

    /// Collection key holding child entities, and their kind.
    pub fn children(self) -> Option<(&'static str, EntityKind)> {
        match self {
            EntityKind::Package => Some(("resources", EntityKind::Resource)),
            EntityKind::Resource => Some(("access_services", EntityKind::AccessService)),
            EntityKind::AccessService => None,
        }
    }

    pub fn is_routed(self, field: &str) -> bool {
        self.routed_fields().contains(&field)
    }
}
