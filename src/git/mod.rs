use std::error::Error;
use std::path::Path;

use git2::{Commit, Oid, Repository, Sort};

use crate::contrib::{ContributionKind, ContributionSource};

/// Local repository access: the original (oldest) commit author and a
/// batched stream of commit authors for contribution counting.
pub struct GitRepo {
    repo: Repository,
}

impl std::fmt::Debug for GitRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepo")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl GitRepo {
    pub fn open(path: &Path) -> Result<Self, Box<dyn Error>> {
        let repo = Repository::discover(path)
            .map_err(|e| format!("not a git repository (or any parent): {e}"))?;
        Ok(Self { repo })
    }

    /// Author of the oldest commit reachable from HEAD — the seed for
    /// team boundary derivation. `None` for an empty repository.
    pub fn original_author(&self) -> Result<Option<String>, Box<dyn Error>> {
        let mut revwalk = self.repo.revwalk()?;
        if revwalk.push_head().is_err() {
            // Unborn HEAD: no commits yet.
            return Ok(None);
        }
        revwalk.set_sorting(Sort::TIME | Sort::REVERSE)?;
        match revwalk.next() {
            Some(oid) => {
                let commit = self.repo.find_commit(oid?)?;
                Ok(Some(author_name(&commit)))
            }
            None => Ok(None),
        }
    }

    /// Turn the repository into a commit-author contribution source.
    ///
    /// The walk is pinned once as commit ids (newest first); author
    /// signatures are resolved batch by batch as the source is drained.
    pub fn into_commit_source(self) -> Result<GitCommitSource, Box<dyn Error>> {
        let mut oids = Vec::new();
        {
            let mut revwalk = self.repo.revwalk()?;
            if revwalk.push_head().is_ok() {
                revwalk.set_sorting(Sort::TIME)?;
                for oid in revwalk {
                    oids.push(oid?);
                }
            }
        }
        Ok(GitCommitSource {
            repo: self.repo,
            oids: oids.into_iter(),
        })
    }
}

fn author_name(commit: &Commit) -> String {
    commit.author().name().unwrap_or("unknown").to_string()
}

/// Commit authors from the local history, one entry per commit.
pub struct GitCommitSource {
    repo: Repository,
    oids: std::vec::IntoIter<Oid>,
}

impl ContributionSource for GitCommitSource {
    fn kind(&self) -> ContributionKind {
        ContributionKind::Commit
    }

    fn next_batch(&mut self, max: usize) -> Result<Vec<String>, Box<dyn Error>> {
        let mut batch = Vec::with_capacity(max.min(self.oids.len()));
        for oid in self.oids.by_ref().take(max) {
            let commit = self.repo.find_commit(oid)?;
            batch.push(author_name(&commit));
        }
        Ok(batch)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
