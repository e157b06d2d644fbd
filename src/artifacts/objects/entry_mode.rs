/// File mode of a tree entry, decoded from the decimal token in the body.
///
/// Only the directory/leaf split matters for traversal, but the full set of
/// mode values is modeled so an unknown token is a hard decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    Directory,
    Regular,
    Executable,
    Symlink,
    GitLink,
}

impl EntryMode {
    pub fn as_str(&self) -> &str {
        match self {
            EntryMode::Directory => "40000",
            EntryMode::Regular => "100644",
            EntryMode::Executable => "100755",
            EntryMode::Symlink => "120000",
            EntryMode::GitLink => "160000",
        }
    }

    pub fn from_tree_token(token: &str) -> Option<Self> {
        match token {
            "40000" => Some(EntryMode::Directory),
            "100644" => Some(EntryMode::Regular),
            "100755" => Some(EntryMode::Executable),
            "120000" => Some(EntryMode::Symlink),
            "160000" => Some(EntryMode::GitLink),
            _ => None,
        }
    }

    /// Whether this entry points at a nested tree.
    pub fn is_tree(&self) -> bool {
        matches!(self, EntryMode::Directory)
    }
}

impl std::fmt::Display for EntryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::artifacts::objects::entry_mode::EntryMode;

    #[test]
    fn decodes_known_mode_tokens() {
        assert_eq!(EntryMode::from_tree_token("40000"), Some(EntryMode::Directory));
        assert_eq!(EntryMode::from_tree_token("100644"), Some(EntryMode::Regular));
        assert_eq!(EntryMode::from_tree_token("100755"), Some(EntryMode::Executable));
        assert_eq!(EntryMode::from_tree_token("120000"), Some(EntryMode::Symlink));
        assert_eq!(EntryMode::from_tree_token("160000"), Some(EntryMode::GitLink));
    }

    #[test]
    fn rejects_unknown_mode_tokens() {
        assert_eq!(EntryMode::from_tree_token("100600"), None);
        assert_eq!(EntryMode::from_tree_token(""), None);
    }

    #[test]
    fn only_directories_are_trees() {
        assert!(EntryMode::Directory.is_tree());
        assert!(!EntryMode::Regular.is_tree());
        assert!(!EntryMode::Executable.is_tree());
        assert!(!EntryMode::Symlink.is_tree());
        assert!(!EntryMode::GitLink.is_tree());
    }
}
