use assert_fs::TempDir;
use bitquery::prelude::*;
use chrono::{DateTime, FixedOffset};
use fake::Fake;
use fake::faker::internet::en::FreeEmail;
use fake::faker::name::en::Name;

/// 2024-01-01 10:00:00 +0000, the time of the first commit in every test repository
const BASE_SECONDS: i64 = 1_704_103_200;

pub fn at(minute: i64) -> DateTime<FixedOffset> {
    DateTime::from_timestamp(BASE_SECONDS + minute * 60, 0)
        .expect("timestamp in range")
        .fixed_offset()
}

pub fn random_identity() -> Identity {
    Identity::new(Name().fake::<String>(), FreeEmail().fake::<String>())
}

/// A repository in a temporary directory with a clock that ticks one minute per commit
pub struct TestRepo {
    // keeps the directory alive for as long as the repository is used
    _dir: TempDir,
    repository: Repository,
    author: Identity,
    committer: Identity,
    minute: i64,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let repository = Repository::init(dir.path()).expect("Failed to init repository");
        let identity = Identity::new("Test Committer", "committer@example.com");

        TestRepo {
            _dir: dir,
            repository,
            author: identity.clone(),
            committer: identity,
            minute: 0,
        }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn set_author(&mut self, identity: &Identity) {
        self.author = identity.clone();
    }

    pub fn set_committer(&mut self, identity: &Identity) {
        self.committer = identity.clone();
    }

    /// Minute at which the next commit will be written
    pub fn minute(&self) -> i64 {
        self.minute
    }

    /// Commit on top of HEAD with the current author and committer
    pub fn add(&mut self, message: &str) -> Commit {
        let parents = self.head().into_iter().collect();
        self.write(parents, message)
    }

    /// Commit with HEAD and `other` as parents
    pub fn merge(&mut self, other: &Commit, message: &str) -> Commit {
        let mut parents: Vec<ObjectId> = self.head().into_iter().collect();
        parents.push(other.oid().clone());
        self.write(parents, message)
    }

    /// Create a branch at HEAD
    pub fn branch(&self, name: &str) {
        let head = self.head().expect("HEAD has no commit to branch from");
        self.repository
            .create_branch(name, &head)
            .expect("Failed to create branch");
    }

    pub fn checkout(&self, name: &str) {
        self.repository
            .checkout(name)
            .expect("Failed to checkout branch");
    }

    pub fn detach_at(&self, commit: &Commit) {
        self.repository
            .refs()
            .detach_head(commit.oid())
            .expect("Failed to detach HEAD");
    }

    pub fn head(&self) -> Option<ObjectId> {
        self.repository.head().expect("Failed to read HEAD")
    }

    fn write(&mut self, parents: Vec<ObjectId>, message: &str) -> Commit {
        let timestamp = at(self.minute);
        self.minute += 1;

        self.repository
            .commit(
                parents,
                self.author.at(timestamp),
                self.committer.at(timestamp),
                message,
            )
            .expect("Failed to write commit")
    }
}
