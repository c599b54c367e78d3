//! Static category tree used for drill-down navigation.
//!
//! The tree is display data. Product filtering compares category strings
//! literally and never consults it, so a path that names no node simply
//! matches nothing.

use serde::{Deserialize, Serialize};

/// A node in the category forest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryNode {
    /// Display title, also the value products carry at this level.
    pub title: String,
    /// Ordered child nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    /// Create a leaf node.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
        }
    }

    /// Append a child node.
    pub fn with_child(mut self, child: CategoryNode) -> Self {
        self.children.push(child);
        self
    }

    /// Check if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn child(&self, title: &str) -> Option<&CategoryNode> {
        self.children.iter().find(|c| c.title == title)
    }
}

/// The category forest. Serialized as a bare array of root nodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CategoryTree {
    pub roots: Vec<CategoryNode>,
}

impl CategoryTree {
    /// Create a tree from its root nodes.
    pub fn new(roots: Vec<CategoryNode>) -> Self {
        Self { roots }
    }

    /// Find the node reached by walking `path` title by title.
    ///
    /// Returns `None` for an empty path or when any segment names no node.
    pub fn node_at<S: AsRef<str>>(&self, path: &[S]) -> Option<&CategoryNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.roots.iter().find(|n| n.title == first.as_ref())?;
        for segment in rest {
            node = node.child(segment.as_ref())?;
        }
        Some(node)
    }

    /// Check whether every segment of `path` names a node.
    pub fn contains_path<S: AsRef<str>>(&self, path: &[S]) -> bool {
        path.is_empty() || self.node_at(path).is_some()
    }

    /// Titles selectable one level below `path`.
    ///
    /// An empty path yields the root titles; an unknown path yields nothing.
    pub fn options_at<S: AsRef<str>>(&self, path: &[S]) -> Vec<&str> {
        let nodes = if path.is_empty() {
            &self.roots
        } else {
            match self.node_at(path) {
                Some(node) => &node.children,
                None => return Vec::new(),
            }
        };
        nodes.iter().map(|n| n.title.as_str()).collect()
    }

    /// Depth of the deepest branch (0 for an empty tree).
    pub fn depth(&self) -> usize {
        fn depth_of(node: &CategoryNode) -> usize {
            1 + node.children.iter().map(depth_of).max().unwrap_or(0)
        }
        self.roots.iter().map(depth_of).max().unwrap_or(0)
    }

    /// Check if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> CategoryTree {
        CategoryTree::new(vec![
            CategoryNode::new("Электроника").with_child(
                CategoryNode::new("Аудио")
                    .with_child(CategoryNode::new("Наушники"))
                    .with_child(CategoryNode::new("Колонки")),
            ),
            CategoryNode::new("Одежда"),
        ])
    }

    #[test]
    fn test_node_at() {
        let tree = tree();
        let node = tree.node_at(&["Электроника", "Аудио"]).unwrap();
        assert_eq!(node.title, "Аудио");
        assert_eq!(node.children.len(), 2);

        assert!(tree.node_at(&["Электроника", "Нет"]).is_none());
        assert!(tree.node_at::<&str>(&[]).is_none());
    }

    #[test]
    fn test_options_at() {
        let tree = tree();
        assert_eq!(tree.options_at::<&str>(&[]), vec!["Электроника", "Одежда"]);
        assert_eq!(
            tree.options_at(&["Электроника", "Аудио"]),
            vec!["Наушники", "Колонки"]
        );
        assert!(tree.options_at(&["Одежда"]).is_empty());
        assert!(tree.options_at(&["Мебель"]).is_empty());
    }

    #[test]
    fn test_contains_path_is_case_sensitive() {
        let tree = tree();
        assert!(tree.contains_path::<&str>(&[]));
        assert!(tree.contains_path(&["Электроника", "Аудио", "Колонки"]));
        assert!(!tree.contains_path(&["электроника"]));
    }

    #[test]
    fn test_depth() {
        assert_eq!(tree().depth(), 3);
        assert_eq!(CategoryTree::default().depth(), 0);
    }

    #[test]
    fn test_deserialize_bare_array() {
        let json = r#"[{"title": "Дом", "children": [{"title": "Кухня"}]}, {"title": "Сад"}]"#;
        let tree: CategoryTree = serde_json::from_str(json).unwrap();
        assert_eq!(tree.roots.len(), 2);
        assert!(tree.roots[1].is_leaf());
        assert_eq!(tree.options_at(&["Дом"]), vec!["Кухня"]);
    }
}
