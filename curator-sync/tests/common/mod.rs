//! Shared fixtures: real git repositories on disk, remotes addressed by path.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use git2::{Commit, Oid, Repository, Signature};
use tempfile::TempDir;

/// Unencrypted ed25519 key from `ssh-keygen`; local-path remotes never ask for credentials.
pub const TEST_KEY: &str = include_str!("../fixtures/id_ed25519");

/// A non-bare "remote" repository with one initial commit.
pub fn init_upstream(dir: &Path) -> Repository {
    let repo = Repository::init(dir).expect("init upstream");
    commit_file(&repo, "README.md", "# upstream\n", "initial commit");
    repo
}

/// Write `file`, stage it and commit on HEAD.
pub fn commit_file(repo: &Repository, file: &str, contents: &str, message: &str) -> Oid {
    let workdir = repo.workdir().expect("non-bare repo");
    fs::write(workdir.join(file), contents).expect("write file");

    let mut index = repo.index().expect("index");
    index.add_path(Path::new(file)).expect("stage");
    index.write().expect("write index");
    let tree_id = index.write_tree().expect("write tree");
    let tree = repo.find_tree(tree_id).expect("find tree");

    let sig = Signature::now("Curator Test", "test@example.com").expect("signature");
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .expect("commit")
}

/// Clone `upstream` (by filesystem path) into `dest`.
pub fn clone_from(upstream: &Path, dest: &Path) -> Repository {
    let url = upstream.to_str().expect("utf-8 path");
    Repository::clone(url, dest).expect("clone")
}

pub fn head_id(repo: &Repository) -> Oid {
    repo.head()
        .expect("head")
        .target()
        .expect("direct head")
}

pub fn write_key(dir: &Path) -> PathBuf {
    let path = dir.join("id_rsa");
    fs::write(&path, TEST_KEY).expect("write key");
    path
}

/// Write a config file listing `repos` under `storage`.
pub fn write_config(dir: &Path, key: &Path, storage: &Path, repos: &[&str]) -> PathBuf {
    let list = repos
        .iter()
        .map(|r| format!("\"{r}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let contents = format!(
        "[ssh]\nrsa_file = \"{}\"\n\n[storage]\npath = \"{}\"\n\n[git]\nrepos = [{list}]\n",
        key.display(),
        storage.display()
    );
    let path = dir.join("config.toml");
    fs::write(&path, contents).expect("write config");
    path
}

/// Workspace with a storage root, a key and a scratch area for upstreams.
pub struct Workspace {
    pub root: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let root = TempDir::new().expect("tempdir");
        fs::create_dir_all(root.path().join("storage")).expect("storage");
        fs::create_dir_all(root.path().join("upstreams")).expect("upstreams");
        Self { root }
    }

    pub fn storage(&self) -> PathBuf {
        self.root.path().join("storage")
    }

    pub fn upstream_path(&self, name: &str) -> PathBuf {
        self.root.path().join("upstreams").join(name)
    }

    pub fn key(&self) -> PathBuf {
        write_key(self.root.path())
    }

    pub fn config(&self, repos: &[&str]) -> PathBuf {
        let key = self.key();
        write_config(self.root.path(), &key, &self.storage(), repos)
    }

    /// Upstream + mirror clone for `name`; returns (upstream, mirror).
    pub fn mirrored(&self, name: &str) -> (Repository, Repository) {
        let upstream = init_upstream(&self.upstream_path(name));
        let mirror = clone_from(&self.upstream_path(name), &self.storage().join(name));
        (upstream, mirror)
    }
}
