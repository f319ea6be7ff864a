use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

/// Read-only access to a commit graph
///
/// This is everything a history walk needs from storage: the commits the
/// walk starts from by default, and a way to load any commit by ID. Loading
/// must be repeatable so that several walks can run over the same source.
pub trait CommitSource {
    /// Load one commit; a missing or non-commit object is an error
    fn load_commit(&self, oid: &ObjectId) -> anyhow::Result<Commit>;

    /// Tips of every branch, in a stable order
    fn branch_heads(&self) -> anyhow::Result<Vec<ObjectId>>;
}

impl<S: CommitSource + ?Sized> CommitSource for &S {
    fn load_commit(&self, oid: &ObjectId) -> anyhow::Result<Commit> {
        (**self).load_commit(oid)
    }

    fn branch_heads(&self) -> anyhow::Result<Vec<ObjectId>> {
        (**self).branch_heads()
    }
}
