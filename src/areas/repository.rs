use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::log::commit_source::CommitSource;
use crate::artifacts::objects::EMPTY_TREE_OID;
use crate::artifacts::objects::commit::{Commit, Person};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::path::Path;

const GIT_DIR: &str = ".git";
const DEFAULT_BRANCH: &str = "master";

/// A git repository on disk: its loose object database and its refs
///
/// Holds no interior mutability, so one repository can back several walks
/// running on different threads.
#[derive(Debug)]
pub struct Repository {
    path: Box<Path>,
    database: Database,
    refs: Refs,
}

impl Repository {
    /// Create an empty repository with HEAD on an unborn `master` branch
    pub fn init(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let git_path = path.join(GIT_DIR);

        for dir in ["objects", "refs/heads"] {
            std::fs::create_dir_all(git_path.join(dir)).with_context(|| {
                format!("failed to create {:?}", git_path.join(dir))
            })?;
        }

        let repository = Self::open(path)?;
        if !repository.refs.head_path().exists() {
            repository
                .refs
                .set_head(&BranchName::try_parse(DEFAULT_BRANCH.to_string())?)?;
        }

        tracing::debug!(path = %repository.path.display(), "initialized repository");
        Ok(repository)
    }

    /// Open an existing repository, given either its working directory or its `.git` directory
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path
            .as_ref()
            .canonicalize()
            .with_context(|| format!("repository path {:?} does not exist", path.as_ref()))?;

        let (work_path, git_path) = if path.file_name().is_some_and(|name| name == GIT_DIR) {
            let work_path = path.parent().unwrap_or(&path).to_path_buf();
            (work_path, path)
        } else {
            let git_path = path.join(GIT_DIR);
            (path, git_path)
        };

        if !git_path.join("objects").is_dir() {
            anyhow::bail!("not a git repository: {}", work_path.display());
        }

        tracing::debug!(path = %work_path.display(), "opened repository");
        Ok(Repository {
            path: work_path.into_boxed_path(),
            database: Database::new(git_path.join("objects").into_boxed_path()),
            refs: Refs::new(git_path.into_boxed_path()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn head(&self) -> anyhow::Result<Option<ObjectId>> {
        self.refs.read_head()
    }

    /// Write a commit pointing at the empty tree and move HEAD's branch to it
    pub fn commit(
        &self,
        parents: Vec<ObjectId>,
        author: Person,
        committer: Person,
        message: &str,
    ) -> anyhow::Result<Commit> {
        let commit = Commit::new(
            parents,
            ObjectId::try_parse(EMPTY_TREE_OID.to_string())?,
            author,
            committer,
            message.to_string(),
        );

        self.database.store(&commit)?;
        self.refs.update_head(commit.oid())?;

        tracing::debug!(commit = %commit.oid(), message = commit.short_message(), "wrote commit");
        Ok(commit)
    }

    pub fn create_branch(&self, name: &str, oid: &ObjectId) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(name.to_string())?;
        self.load_commit(oid)?;

        self.refs.create_branch(&branch_name, oid)
    }

    /// Point HEAD at an existing branch
    pub fn checkout(&self, name: &str) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(name.to_string())?;
        if self.refs.read_branch(&branch_name)?.is_none() {
            anyhow::bail!("branch {} not found", branch_name);
        }

        self.refs.set_head(&branch_name)
    }

    pub fn branch(&self, name: &str) -> anyhow::Result<Option<ObjectId>> {
        self.refs
            .read_branch(&BranchName::try_parse(name.to_string())?)
    }
}

impl CommitSource for Repository {
    fn load_commit(&self, oid: &ObjectId) -> anyhow::Result<Commit> {
        match self.database.parse_object_as_commit(oid)? {
            Some(commit) => Ok(commit),
            None => {
                let object_type = self.database.get_object_type(oid)?;
                anyhow::bail!(
                    "object {} is a {}, not a commit",
                    oid.to_short_oid(),
                    object_type
                )
            }
        }
    }

    /// Branch tips sorted by branch name; a detached HEAD is used when no branch exists
    fn branch_heads(&self) -> anyhow::Result<Vec<ObjectId>> {
        let mut heads: Vec<ObjectId> = Vec::new();
        for (_, oid) in self.refs.list_branches()? {
            if !heads.contains(&oid) {
                heads.push(oid);
            }
        }

        if heads.is_empty()
            && let Some(head) = self.head()?
        {
            heads.push(head);
        }

        Ok(heads)
    }
}
