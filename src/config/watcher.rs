//! Route table hot reload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::AppConfig;

/// Watches the configuration file and sends every valid new version.
///
/// Invalid edits are logged and dropped; the receiver only ever sees
/// configurations that passed validation.
pub struct ConfigWatcher {
    path: PathBuf,
    updates: mpsc::UnboundedSender<AppConfig>,
}

impl ConfigWatcher {
    /// Returns the watcher and the receiving end of the update channel.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<AppConfig>) {
        let (updates, rx) = mpsc::unbounded_channel();
        let watcher = Self {
            path: path.to_path_buf(),
            updates,
        };
        (watcher, rx)
    }

    /// Start watching. The returned handle must be kept alive.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let Self { path, updates } = self;
        let watched = path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                    reload(&path, &updates);
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = %e, "Config watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&watched, RecursiveMode::NonRecursive)?;
        tracing::info!(path = ?watched, "Watching route table");
        Ok(watcher)
    }
}

fn reload(path: &Path, updates: &mpsc::UnboundedSender<AppConfig>) {
    match load_config(path) {
        Ok(config) => {
            tracing::info!(routes = config.routes.len(), "Route table changed, reloading");
            if updates.send(config).is_err() {
                tracing::debug!("Reload receiver dropped");
            }
        }
        Err(e) => tracing::error!(error = %e, "Ignoring invalid route table"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_sends_only_valid_configs() {
        let dir = std::env::temp_dir().join(format!("hsh-watch-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("routes.toml");
        let (watcher, mut rx) = ConfigWatcher::new(&file);

        std::fs::write(&file, "[router]\nindex = \"nope\"\n").unwrap();
        reload(&watcher.path, &watcher.updates);
        assert!(rx.try_recv().is_err());

        std::fs::write(&file, "[[routes]]\npattern = \"/a\"\n").unwrap();
        reload(&watcher.path, &watcher.updates);
        let config = rx.try_recv().unwrap();
        assert_eq!(config.routes[0].pattern, "/a");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
