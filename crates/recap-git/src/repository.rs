//! Git repository wrapper.

use std::path::Path;

use chrono::{DateTime, FixedOffset, TimeZone};
use git2::{Repository as Git2Repo, Sort};
use recap_commit::RawCommit;
use tracing::debug;

use crate::{GitError, GitResult};

/// A Git repository wrapper.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Opens a repository at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or is not a valid Git repository.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GitError::RepoNotFound(path.to_path_buf()));
        }
        let inner = Git2Repo::open(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.workdir().unwrap_or_else(|| self.inner.path())
    }

    /// Returns up to `max_count` commits reachable from `HEAD`, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NoCommits`] if `HEAD` has no commit yet, or an error if the
    /// history cannot be read.
    pub fn recent_commits(&self, max_count: usize) -> GitResult<Vec<RawCommit>> {
        if self.inner.is_empty()? {
            return Err(GitError::NoCommits);
        }

        let mut revwalk = self.inner.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push_head()?;

        let mut commits = Vec::new();
        for oid in revwalk.take(max_count) {
            let oid = oid?;
            let commit = self.inner.find_commit(oid)?;

            let hash = oid.to_string();
            let date = commit_time(&commit.time())
                .ok_or_else(|| GitError::InvalidTime(hash.clone()))?;
            let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();
            let author = commit.author();

            commits.push(RawCommit::new(
                hash,
                message,
                author.name().unwrap_or("Unknown"),
                author.email().unwrap_or(""),
                date,
            ));
        }

        debug!(count = commits.len(), max_count, "read commits from HEAD");
        Ok(commits)
    }
}

/// Converts a git timestamp into a date carrying the committer's offset.
fn commit_time(time: &git2::Time) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(time.offset_minutes().checked_mul(60)?)?;
    offset.timestamp_opt(time.seconds(), 0).single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository as Git2Repository, Signature, Time};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, Repository) {
        let temp_dir = TempDir::new().unwrap();
        let git2_repo = Git2Repository::init(temp_dir.path()).unwrap();

        // Configure user for commits
        let mut config = git2_repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();

        let repo = Repository { inner: git2_repo };
        (temp_dir, repo)
    }

    fn create_commit_at(repo: &Repository, message: &str, time: &Time) -> git2::Oid {
        let sig = Signature::new("Test User", "test@example.com", time).unwrap();
        let tree_id = {
            let mut index = repo.inner.index().unwrap();
            index.write_tree().unwrap()
        };
        let tree = repo.inner.find_tree(tree_id).unwrap();

        let parent = repo.inner.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        repo.inner
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    fn create_commits(repo: &Repository, messages: &[&str]) {
        for (seconds, message) in (1_600_000_000_i64..).zip(messages) {
            create_commit_at(repo, message, &Time::new(seconds, 0));
        }
    }

    #[test]
    fn test_open_valid_repo() {
        let (temp_dir, _repo) = create_test_repo();
        let result = Repository::open(temp_dir.path());
        assert!(result.is_ok());
    }

    #[test]
    fn test_open_missing_path() {
        let result = Repository::open("/nonexistent/path/to/repo");
        assert!(matches!(result, Err(GitError::RepoNotFound(_))));
    }

    #[test]
    fn test_open_not_a_repo() {
        let temp_dir = TempDir::new().unwrap();
        let result = Repository::open(temp_dir.path());
        assert!(matches!(result, Err(GitError::NotARepo(_))));
    }

    #[test]
    fn test_path() {
        let (temp_dir, repo) = create_test_repo();
        let path = repo.path();
        // Use canonicalize to resolve symlinks (macOS /var -> /private/var)
        let expected = temp_dir.path().canonicalize().unwrap();
        let actual = path.canonicalize().unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_recent_commits_unborn_head() {
        let (_temp_dir, repo) = create_test_repo();
        let result = repo.recent_commits(100);
        assert!(matches!(result, Err(GitError::NoCommits)));
    }

    #[test]
    fn test_recent_commits_most_recent_first() {
        let (_temp_dir, repo) = create_test_repo();
        create_commits(&repo, &["First commit", "Second commit", "Third commit"]);

        let commits = repo.recent_commits(100).unwrap();
        let subjects: Vec<_> = commits.iter().map(RawCommit::subject).collect();
        assert_eq!(subjects, vec!["Third commit", "Second commit", "First commit"]);
    }

    #[test]
    fn test_recent_commits_capped() {
        let (_temp_dir, repo) = create_test_repo();
        create_commits(&repo, &["one", "two", "three", "four"]);

        let commits = repo.recent_commits(2).unwrap();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].subject(), "four");
        assert_eq!(commits[1].subject(), "three");
    }

    #[test]
    fn test_recent_commits_zero() {
        let (_temp_dir, repo) = create_test_repo();
        create_commits(&repo, &["one"]);

        assert!(repo.recent_commits(0).unwrap().is_empty());
    }

    #[test]
    fn test_commits_contain_correct_data() {
        let (_temp_dir, repo) = create_test_repo();
        let oid = create_commit_at(
            &repo,
            "feat: add feature\n\nWith a body",
            &Time::new(1_600_000_000, -300),
        );

        let commits = repo.recent_commits(100).unwrap();
        assert_eq!(commits.len(), 1);

        let commit = &commits[0];
        assert_eq!(commit.hash, oid.to_string());
        assert_eq!(commit.subject(), "feat: add feature");
        assert_eq!(commit.author, "Test User");
        assert_eq!(commit.email, "test@example.com");
        assert_eq!(commit.date.timestamp(), 1_600_000_000);
        assert_eq!(commit.date.offset().local_minus_utc(), -300 * 60);
    }

    #[test]
    fn test_commit_time_keeps_offset() {
        let date = commit_time(&Time::new(0, 330)).unwrap();
        assert_eq!(date.to_rfc3339(), "1970-01-01T05:30:00+05:30");
    }
}
