//! Newest-first revision walk
//!
//! Commits are kept in a priority queue ordered by committer timestamp, so a
//! walk started from several tips interleaves their histories the way
//! `git log` does. Every commit is marked as seen the moment it is queued,
//! which is what keeps a commit reachable through several merge paths from
//! being produced twice. Commits reachable from a hidden tip are never
//! produced.

use crate::artifacts::log::commit_source::CommitSource;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use bitflags::bitflags;
use chrono::{DateTime, FixedOffset};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct WalkFlags: u8 {
        const SEEN = 0b01;
        const HIDDEN = 0b10;
    }
}

/// A commit waiting in the queue
///
/// Ordered by timestamp, then by queue position so that, among commits with
/// the same timestamp, the one discovered first is produced first.
#[derive(Debug)]
struct QueuedCommit {
    timestamp: DateTime<FixedOffset>,
    sequence: u64,
    commit: Commit,
}

impl PartialEq for QueuedCommit {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedCommit {}

impl PartialOrd for QueuedCommit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedCommit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp
            .cmp(&other.timestamp)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Lazy iterator over the commits reachable from a set of start points
///
/// Yields `Err` at most once: after a storage failure the walk is over. A
/// commit whose parent cannot be loaded is still produced, and the failure is
/// reported on the following call.
pub struct RevList<'s> {
    source: &'s dyn CommitSource,
    queue: BinaryHeap<QueuedCommit>,
    flags: HashMap<ObjectId, WalkFlags>,
    sequence: u64,
    pending_error: Option<anyhow::Error>,
    finished: bool,
}

impl<'s> RevList<'s> {
    pub fn new(source: &'s dyn CommitSource) -> Self {
        RevList {
            source,
            queue: BinaryHeap::new(),
            flags: HashMap::new(),
            sequence: 0,
            pending_error: None,
            finished: false,
        }
    }

    /// Add a start point
    pub fn push(&mut self, oid: &ObjectId) -> anyhow::Result<()> {
        if self.has_flags(oid, WalkFlags::SEEN) || self.has_flags(oid, WalkFlags::HIDDEN) {
            return Ok(());
        }

        let commit = self.source.load_commit(oid)?;
        self.enqueue(commit);

        Ok(())
    }

    /// Exclude `oid` and all of its ancestors from the walk
    pub fn hide(&mut self, oid: &ObjectId) -> anyhow::Result<()> {
        let mut pending = vec![oid.clone()];

        while let Some(oid) = pending.pop() {
            if self.has_flags(&oid, WalkFlags::HIDDEN) {
                continue;
            }

            let commit = self.source.load_commit(&oid)?;
            tracing::trace!(commit = %oid, "hiding commit");
            self.flags.entry(oid).or_default().insert(WalkFlags::HIDDEN);
            pending.extend(commit.parents().iter().cloned());
        }

        Ok(())
    }

    fn has_flags(&self, oid: &ObjectId, flags: WalkFlags) -> bool {
        self.flags
            .get(oid)
            .is_some_and(|current| current.contains(flags))
    }

    fn enqueue(&mut self, commit: Commit) {
        tracing::trace!(commit = %commit.oid(), "queueing commit");
        self.flags
            .entry(commit.oid().clone())
            .or_default()
            .insert(WalkFlags::SEEN);

        self.queue.push(QueuedCommit {
            timestamp: commit.timestamp(),
            sequence: self.sequence,
            commit,
        });
        self.sequence += 1;
    }

    fn enqueue_parents(&mut self, commit: &Commit) -> anyhow::Result<()> {
        for parent in commit.parents() {
            if self.has_flags(parent, WalkFlags::SEEN) || self.has_flags(parent, WalkFlags::HIDDEN)
            {
                continue;
            }

            let parent_commit = self.source.load_commit(parent).map_err(|error| {
                error.context(format!(
                    "Unable to load parent {} of commit {}",
                    parent,
                    commit.oid()
                ))
            })?;
            self.enqueue(parent_commit);
        }

        Ok(())
    }
}

impl Iterator for RevList<'_> {
    type Item = anyhow::Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if let Some(error) = self.pending_error.take() {
            self.finished = true;
            return Some(Err(error));
        }

        while let Some(QueuedCommit { commit, .. }) = self.queue.pop() {
            // a start point may have been hidden after it was pushed
            if self.has_flags(commit.oid(), WalkFlags::HIDDEN) {
                continue;
            }

            if let Err(error) = self.enqueue_parents(&commit) {
                self.queue.clear();
                self.pending_error = Some(error);
            }

            return Some(Ok(commit));
        }

        self.finished = true;
        None
    }
}
