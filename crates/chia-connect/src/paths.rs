//! Filesystem conventions: the Chia root directory and the SSL credential
//! layout underneath it.
//!
//! The root is `$CHIA_ROOT` when set, otherwise `~/.chia/mainnet`. Each
//! service keeps its client credentials at
//! `<root>/config/ssl/<service>/private_<service>.{key,crt}`.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::debug;

use crate::service::ServiceName;

/// Environment variable overriding the default Chia root directory.
pub const CHIA_ROOT_ENV: &str = "CHIA_ROOT";

static CHIA_ROOT: OnceLock<PathBuf> = OnceLock::new();

/// Expand a leading `~` to the user's home directory.
///
/// Only a bare `~` or a `~` immediately followed by a path separator is
/// expanded; `~user` forms pass through untouched, as does everything else.
/// When the home directory cannot be determined the input is returned
/// unchanged. The home directory is looked up fresh on every call: a
/// descriptor may be built long before its credentials are read, and the
/// environment can change in between.
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => rest,
        _ => return Cow::Borrowed(path),
    };
    match dirs::home_dir() {
        Some(home) => Cow::Owned(format!("{}{rest}", home.display())),
        None => Cow::Borrowed(path),
    }
}

/// The process-wide Chia root directory.
///
/// Resolved once on first call and cached for the rest of the process via
/// [`OnceLock`], so a fresh process picks up environment changes but a
/// running one never re-reads them. Concurrent first calls may race the
/// computation; the assignment itself is atomic and both sides compute the
/// same value.
pub fn chia_root() -> &'static Path {
    CHIA_ROOT.get_or_init(|| {
        let root = resolve_root(std::env::var(CHIA_ROOT_ENV).ok().as_deref());
        debug!(root = %root.display(), "Resolved Chia root");
        root
    })
}

/// The resolution rule behind [`chia_root`], parameterized on the override.
///
/// A non-empty override is resolved to an absolute path against the current
/// directory. Without one, the root is `.chia/mainnet` under the home
/// directory; when no home directory can be determined the current
/// directory stands in, keeping the result deterministic.
pub fn resolve_root(override_root: Option<&str>) -> PathBuf {
    match override_root {
        Some(root) if !root.is_empty() => absolutize(Path::new(root)),
        _ => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".chia")
            .join("mainnet"),
    }
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Default private key path for a service:
/// `<root>/config/ssl/<service>/private_<service>.key`.
pub fn default_key_path(service: ServiceName) -> PathBuf {
    ssl_dir(service).join(format!("private_{service}.key"))
}

/// Default certificate path for a service:
/// `<root>/config/ssl/<service>/private_<service>.crt`.
pub fn default_cert_path(service: ServiceName) -> PathBuf {
    ssl_dir(service).join(format!("private_{service}.crt"))
}

fn ssl_dir(service: ServiceName) -> PathBuf {
    chia_root().join("config").join("ssl").join(service.as_str())
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn paths_without_a_marker_pass_through() {
        assert_eq!(expand_tilde("/etc/hosts"), "/etc/hosts");
        assert_eq!(expand_tilde("relative/path"), "relative/path");
        assert_eq!(expand_tilde(""), "");
    }

    #[test]
    fn bare_tilde_resolves_to_home_without_trailing_separator() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde("~"), home.display().to_string());
    }

    #[test]
    fn tilde_with_separator_keeps_the_separator() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(
            expand_tilde("~/sub/dir"),
            format!("{}/sub/dir", home.display())
        );
    }

    #[test]
    fn user_qualified_tilde_is_not_expanded() {
        assert_eq!(expand_tilde("~user/x"), "~user/x");
        assert_eq!(expand_tilde("~~"), "~~");
    }

    #[test]
    fn expansion_is_idempotent() {
        let once = expand_tilde("~/credentials.key").into_owned();
        let twice = expand_tilde(&once);
        assert_eq!(twice, once);
    }

    #[test]
    fn override_root_wins() {
        assert_eq!(
            resolve_root(Some("/tmp/customroot")),
            PathBuf::from("/tmp/customroot")
        );
    }

    #[test]
    fn relative_override_is_made_absolute() {
        let root = resolve_root(Some("some/relative/root"));
        assert!(root.is_absolute());
        assert!(root.ends_with("some/relative/root"));
    }

    #[test]
    fn empty_override_falls_back_to_default() {
        assert_eq!(resolve_root(Some("")), resolve_root(None));
    }

    #[test]
    fn default_root_lives_under_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(resolve_root(None), home.join(".chia").join("mainnet"));
    }

    #[test]
    fn credential_paths_follow_the_ssl_layout() {
        let key = default_key_path(ServiceName::FullNode);
        let cert = default_cert_path(ServiceName::FullNode);
        assert!(key.ends_with("config/ssl/full_node/private_full_node.key"));
        assert!(cert.ends_with("config/ssl/full_node/private_full_node.crt"));
        assert!(key.starts_with(chia_root()));
    }

    #[test]
    fn chia_root_is_stable_across_calls() {
        assert_eq!(chia_root(), chia_root());
    }
}
