//! Builds the nested directory/file record that mirrors a traversal.
//!
//! Nodes are created lazily as included paths are observed and are never
//! removed. Children keep the order in which they were first seen.

use serde::Serialize;

/// Whether a node is a directory or a file leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Directory,
    File,
}

/// One node of the structural record.
///
/// Serializes as `{"name", "type", "children"}`; file leaves omit `children`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// The empty root directory, named `root`.
    pub fn root() -> Self {
        Self::directory("root")
    }

    fn directory(name: &str) -> Self {
        Self {
            name: name.to_string(),
            node_type: NodeType::Directory,
            children: Some(Vec::new()),
        }
    }

    fn file(name: &str) -> Self {
        Self {
            name: name.to_string(),
            node_type: NodeType::File,
            children: None,
        }
    }

    /// Child nodes in insertion order; always empty for files.
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn is_dir(&self) -> bool {
        self.node_type == NodeType::Directory
    }

    /// Returns the directory node for `parts`, creating missing ancestors.
    ///
    /// An empty `parts` returns `self`. Only directory children are matched
    /// by name, so a file and a directory of the same name can coexist.
    ///
    /// # Examples
    /// ```
    /// use aidigest::tree::TreeNode;
    ///
    /// let mut tree = TreeNode::root();
    /// tree.insert_directory(&["src", "bin"]).insert_file("main.rs");
    /// tree.insert_directory(&["src"]).insert_file("lib.rs");
    ///
    /// let src = &tree.children()[0];
    /// assert_eq!(src.name, "src");
    /// let names: Vec<_> = src.children().iter().map(|c| c.name.as_str()).collect();
    /// assert_eq!(names, ["bin", "lib.rs"]);
    /// ```
    pub fn insert_directory<S: AsRef<str>>(&mut self, parts: &[S]) -> &mut TreeNode {
        let mut current = self;
        for part in parts {
            let part = part.as_ref();
            let children = current.children.get_or_insert_with(Vec::new);
            let idx = match children
                .iter()
                .position(|child| child.is_dir() && child.name == part)
            {
                Some(idx) => idx,
                None => {
                    children.push(TreeNode::directory(part));
                    children.len() - 1
                }
            };
            current = &mut children[idx];
        }
        current
    }

    /// Appends a file leaf. Repeated names are not de-duplicated.
    pub fn insert_file(&mut self, name: &str) {
        self.children
            .get_or_insert_with(Vec::new)
            .push(TreeNode::file(name));
    }

    /// Inserts the ancestors and leaf for a `/`-separated relative path.
    pub fn insert_path(&mut self, relative_path: &str) {
        let mut parts: Vec<&str> = relative_path.split('/').filter(|p| !p.is_empty()).collect();
        if let Some(file_name) = parts.pop() {
            self.insert_directory(&parts).insert_file(file_name);
        }
    }

    /// Counts file leaves below this node.
    pub fn file_count(&self) -> usize {
        match self.node_type {
            NodeType::File => 1,
            NodeType::Directory => self.children().iter().map(TreeNode::file_count).sum(),
        }
    }
}

impl Default for TreeNode {
    fn default() -> Self {
        Self::root()
    }
}
