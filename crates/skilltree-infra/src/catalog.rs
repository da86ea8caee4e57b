//! Skill catalog loading.
//!
//! Builds the [`SkillGraph`] from either the built-in catalog or a TOML file
//! named in `config.toml`.

use std::path::Path;

use skilltree_core::skill::{SkillCatalog, SkillGraph};
use skilltree_types::error::CatalogError;

/// Read and validate a TOML catalog file.
pub async fn load_catalog_file(path: &Path) -> Result<SkillCatalog, CatalogError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CatalogError::Io(format!("{}: {e}", path.display())))?;
    SkillCatalog::from_toml_str(&content)
}

/// Build the skill graph, using the custom catalog when one is configured.
///
/// A missing or invalid custom catalog is an error. There is no fallback to
/// the built-in trees.
pub async fn load_skill_graph(catalog_path: Option<&Path>) -> Result<SkillGraph, CatalogError> {
    match catalog_path {
        Some(path) => {
            let catalog = load_catalog_file(path).await?;
            tracing::debug!(path = %path.display(), skills = catalog.len(), "Loaded custom skill catalog");
            SkillGraph::new(catalog)
        }
        None => SkillGraph::builtin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skilltree_types::skill::Category;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_builtin_when_no_path() {
        let graph = load_skill_graph(None).await.unwrap();
        assert_eq!(graph.skills(Category::Pull).len(), 10);
    }

    #[tokio::test]
    async fn test_custom_catalog_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("catalog.toml");
        tokio::fs::write(
            &path,
            r#"
[[core]]
id = "plank"
display_name = "Plank (60s)"
xp_value = 2

[[core]]
id = "sidePlank"
display_name = "Side Plank (30s)"
xp_value = 3
prerequisites = ["plank"]
"#,
        )
        .await
        .unwrap();

        let graph = load_skill_graph(Some(&path)).await.unwrap();
        assert_eq!(graph.skills(Category::Core).len(), 2);
        assert!(graph.skills(Category::Pull).is_empty());
    }

    #[tokio::test]
    async fn test_missing_catalog_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_skill_graph(Some(&tmp.path().join("nope.toml")))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[tokio::test]
    async fn test_cyclic_catalog_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("catalog.toml");
        tokio::fs::write(
            &path,
            r#"
[[legs]]
id = "a"
display_name = "A"
xp_value = 1
prerequisites = ["b"]

[[legs]]
id = "b"
display_name = "B"
xp_value = 1
prerequisites = ["a"]
"#,
        )
        .await
        .unwrap();

        assert!(matches!(
            load_skill_graph(Some(&path)).await,
            Err(CatalogError::Cycle { category: Category::Legs, .. })
        ));
    }
}
