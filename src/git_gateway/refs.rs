//! Ref classification.
//!
//! Turns the ref tokens git prints in log decorations (`HEAD -> main`,
//! `origin/main`, `refs/heads/topic`) into structured [`Ref`] values.

/// Prefix of local branch refs
pub const LOCAL_BRANCH_PREFIX: &str = "refs/heads/";

/// Token git prints for a detached HEAD
pub const DETACHED_HEAD: &str = "HEAD";

/// Decoration prefix for tags
const TAG_PREFIX: &str = "tag: ";

/// A branch label attached to a commit.
///
/// Identity is `path`. Local branches live at `refs/heads/<name>`; remote
/// tracking branches keep their decoration form `<remote>/<name>` and are
/// read-only mirrors of the branch on that remote.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ref {
    pub name: String,
    pub path: String,
    pub remote: Option<String>,
}

impl Ref {
    /// A local branch
    pub fn local(name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: format!("{}{}", LOCAL_BRANCH_PREFIX, name),
            remote: None,
        }
    }

    /// A remote tracking branch
    pub fn remote(remote: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: format!("{}/{}", remote, name),
            remote: Some(remote.to_string()),
        }
    }

    pub fn is_local(&self) -> bool {
        self.remote.is_none()
    }

    /// Check if this is a tracking branch of the given remote
    pub fn is_on_remote(&self, remote: &str) -> bool {
        self.remote.as_deref() == Some(remote)
    }

    /// Name as shown to the user: `main` or `origin/main`
    pub fn display_name(&self) -> &str {
        if self.is_local() {
            &self.name
        } else {
            &self.path
        }
    }
}

/// Parse a single decoration token.
///
/// Returns `None` for tokens that are not branches: the detached `HEAD`
/// marker, a remote's symbolic `HEAD`, and tags. Remote prefixes are checked in
/// order and the first match wins, so remote names must not be prefixes of one
/// another.
pub fn parse_ref(token: &str, remotes: &[String]) -> Option<Ref> {
    let mut token = token.trim();
    if let Some((_, target)) = token.split_once("->") {
        token = target.trim();
    }

    if token.starts_with(TAG_PREFIX) {
        return None;
    }

    let name = match token.strip_prefix(LOCAL_BRANCH_PREFIX) {
        Some(stripped) => stripped,
        None => {
            for remote in remotes {
                let Some(name) = token
                    .strip_prefix(remote.as_str())
                    .and_then(|rest| rest.strip_prefix('/'))
                else {
                    continue;
                };

                if name == DETACHED_HEAD {
                    return None;
                }
                return Some(Ref::remote(remote, name));
            }
            token
        }
    };

    if name == DETACHED_HEAD || name.is_empty() {
        return None;
    }

    Some(Ref::local(name))
}
