//! Node name resolution

use std::env;
use std::fs;

/// Resolve the local node's name from the environment or the OS.
///
/// Resolved once at store construction; the node scope key is fixed for
/// the store's lifetime.
pub fn get_node_name() -> String {
    // 1. Kubernetes downward-API style override
    if let Ok(name) = env::var("NODE_NAME") {
        let name = name.trim().to_string();
        if !name.is_empty() {
            return name;
        }
    }

    // 2. Shell-provided hostname
    if let Ok(name) = env::var("HOSTNAME") {
        let name = name.trim().to_string();
        if !name.is_empty() {
            return name;
        }
    }

    // 3. Kernel hostname
    if let Ok(content) = fs::read_to_string("/etc/hostname") {
        let name = content.trim();
        if !name.is_empty() {
            return name.to_string();
        }
    }

    "localhost".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_name_is_never_empty() {
        assert!(!get_node_name().is_empty());
    }
}
