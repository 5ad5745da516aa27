//! Fixed table of default link functions
//!
//! | Relation   | No resource      | Resource with id    | Resource without id |
//! |------------|------------------|---------------------|---------------------|
//! | self       | `{base}/{name}`  | `{base}/{name}/{id}`| `{base}/{name}`     |
//! | collection | `{base}/{name}`  | `{base}/{name}`     | `{base}/{name}`     |
//! | create     | `{base}/{name}`  | `{base}/{name}`     | `{base}/{name}`     |
//! | show       | -                | `{base}/{name}/{id}`| -                   |
//! | update     | -                | `{base}/{name}/{id}`| -                   |
//! | delete     | -                | `{base}/{name}/{id}`| -                   |

use std::fmt;

/// One of the six default relations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    SelfLink,
    Collection,
    Create,
    Show,
    Update,
    Delete,
}

impl LinkKind {
    /// Every default relation, in table order
    pub const ALL: [LinkKind; 6] = [
        LinkKind::SelfLink,
        LinkKind::Collection,
        LinkKind::Create,
        LinkKind::Show,
        LinkKind::Update,
        LinkKind::Delete,
    ];

    /// Look up a default relation by name
    pub fn from_relation(relation: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.relation() == relation)
    }

    /// Relation name used as the key in link maps
    pub fn relation(self) -> &'static str {
        match self {
            LinkKind::SelfLink => "self",
            LinkKind::Collection => "collection",
            LinkKind::Create => "create",
            LinkKind::Show => "show",
            LinkKind::Update => "update",
            LinkKind::Delete => "delete",
        }
    }

    /// Render this relation's URL
    ///
    /// `identifier` is `None` when no resource was supplied and `Some("")`
    /// when a resource was supplied but has no resolvable identifier.
    /// Returns `None` when the relation does not apply.
    pub fn render(
        self,
        base_url: &str,
        resource_name: &str,
        identifier: Option<&str>,
    ) -> Option<String> {
        let collection = || format!("{base_url}/{resource_name}");
        let item = identifier
            .filter(|id| !id.is_empty())
            .map(|id| format!("{base_url}/{resource_name}/{id}"));

        match self {
            LinkKind::SelfLink => Some(item.unwrap_or_else(collection)),
            LinkKind::Collection | LinkKind::Create => Some(collection()),
            LinkKind::Show | LinkKind::Update | LinkKind::Delete => item,
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.relation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://api.test/v1";

    fn render_all(identifier: Option<&str>) -> Vec<Option<String>> {
        LinkKind::ALL
            .iter()
            .map(|kind| kind.render(BASE, "widgets", identifier))
            .collect()
    }

    #[test]
    fn test_without_resource() {
        let collection = Some("http://api.test/v1/widgets".to_string());
        assert_eq!(
            render_all(None),
            vec![collection.clone(), collection.clone(), collection, None, None, None]
        );
    }

    #[test]
    fn test_with_identifier() {
        let collection = Some("http://api.test/v1/widgets".to_string());
        let item = Some("http://api.test/v1/widgets/42".to_string());
        assert_eq!(
            render_all(Some("42")),
            vec![item.clone(), collection.clone(), collection, item.clone(), item.clone(), item]
        );
    }

    #[test]
    fn test_with_empty_identifier() {
        let collection = Some("http://api.test/v1/widgets".to_string());
        assert_eq!(
            render_all(Some("")),
            vec![collection.clone(), collection.clone(), collection, None, None, None]
        );
    }

    #[test]
    fn test_relation_names_roundtrip() {
        for kind in LinkKind::ALL {
            assert_eq!(LinkKind::from_relation(kind.relation()), Some(kind));
            assert_eq!(kind.to_string(), kind.relation());
        }
        assert_eq!(LinkKind::from_relation("archive"), None);
        assert_eq!(LinkKind::from_relation("Self"), None);
    }
}
