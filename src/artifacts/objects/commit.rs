//! Git commit object
//!
//! Commits are the records a history walk feeds into the filter tree. Each one
//! carries:
//! - Its own object ID (the SHA-1 of the encoded object)
//! - Parent commit ID(s) (for history)
//! - A tree object ID (directory snapshot)
//! - Author and committer information
//! - Commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame, hash_object};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset};
use derive_new::new;
use std::io::BufRead;

/// The (name, email) pair identifying an author or committer
///
/// Two identities are equal only when both fields are equal, which makes this
/// the key used when persons are collected into sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, new)]
pub struct Identity {
    #[new(into)]
    name: String,
    #[new(into)]
    email: String,
}

impl Identity {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Attach a timestamp, producing a full author/committer line
    pub fn at(&self, timestamp: DateTime<FixedOffset>) -> Person {
        Person::new(self.name.clone(), self.email.clone(), timestamp)
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Author or committer information
///
/// Contains name, email, and timestamp with timezone information.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Person {
    identity: Identity,
    timestamp: DateTime<FixedOffset>,
}

impl Person {
    /// Create a person with a specific timestamp
    pub fn new(name: String, email: String, timestamp: DateTime<FixedOffset>) -> Self {
        Person {
            identity: Identity::new(name, email),
            timestamp,
        }
    }

    pub fn name(&self) -> &str {
        self.identity.name()
    }

    pub fn email(&self) -> &str {
        self.identity.email()
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// "Name <email> timestamp timezone", as written in commit objects
    pub fn display(&self) -> String {
        format!(
            "{} <{}> {} {}",
            self.name(),
            self.email(),
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        )
    }

    fn parse_offset(offset: &str) -> anyhow::Result<FixedOffset> {
        let (sign, digits) = match offset.split_at_checked(1) {
            Some(("+", digits)) => (1, digits),
            Some(("-", digits)) => (-1, digits),
            _ => anyhow::bail!("Invalid timezone: {offset}"),
        };
        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            anyhow::bail!("Invalid timezone: {offset}");
        }

        let hours: i32 = digits[..2].parse()?;
        let minutes: i32 = digits[2..].parse()?;

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .ok_or_else(|| anyhow::anyhow!("Invalid timezone: {offset}"))
    }
}

impl TryFrom<&str> for Person {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // Format: "name <email> timestamp timezone"
        let parts: Vec<&str> = value.rsplitn(3, ' ').collect();
        if parts.len() < 3 {
            return Err(anyhow::anyhow!("Invalid person format: {value}"));
        }

        let offset = Self::parse_offset(parts[0])?;
        let seconds = parts[1]
            .parse::<i64>()
            .map_err(|_| anyhow::anyhow!("Invalid timestamp: {}", parts[1]))?;
        let name_email_part = parts[2];

        let email_start = name_email_part
            .find('<')
            .ok_or_else(|| anyhow::anyhow!("Invalid person format: missing '<'"))?;
        let email_end = name_email_part
            .rfind('>')
            .ok_or_else(|| anyhow::anyhow!("Invalid person format: missing '>'"))?;
        if email_end < email_start {
            anyhow::bail!("Invalid person format: misplaced '>'");
        }

        let name = name_email_part[..email_start].trim().to_string();
        let email = name_email_part[email_start + 1..email_end].to_string();

        let timestamp = DateTime::from_timestamp(seconds, 0)
            .ok_or_else(|| anyhow::anyhow!("Invalid timestamp: {seconds}"))?
            .with_timezone(&offset);

        Ok(Person::new(name, email, timestamp))
    }
}

/// Git commit object
///
/// Immutable once built: the object ID is derived from the encoded content,
/// either when the commit is created or when it is parsed from the database.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    oid: ObjectId,
    /// Parent commit IDs (empty for a root commit, several for a merge)
    parents: Vec<ObjectId>,
    tree_oid: ObjectId,
    author: Person,
    committer: Person,
    message: String,
}

impl Commit {
    pub fn new(
        parents: Vec<ObjectId>,
        tree_oid: ObjectId,
        author: Person,
        committer: Person,
        message: String,
    ) -> Self {
        let mut commit = Commit {
            oid: ObjectId::default(),
            parents,
            tree_oid,
            author,
            committer,
            message,
        };
        commit.oid = hash_object(&frame(ObjectType::Commit, commit.content().as_bytes()));

        commit
    }

    fn content(&self) -> String {
        let mut headers = vec![format!("tree {}", self.tree_oid)];
        for parent in &self.parents {
            headers.push(format!("parent {parent}"));
        }
        headers.push(format!("author {}", self.author.display()));
        headers.push(format!("committer {}", self.committer.display()));

        format!("{}\n\n{}", headers.join("\n"), self.message)
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn author(&self) -> &Person {
        &self.author
    }

    pub fn committer(&self) -> &Person {
        &self.committer
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the commit message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Commit time used to order the history walk
    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.committer.timestamp()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(frame(self.object_type(), self.content().as_bytes()))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut body = Vec::new();
        reader.read_to_end(&mut body)?;
        let oid = hash_object(&frame(ObjectType::Commit, &body));

        let content = String::from_utf8_lossy(&body);
        let (headers, message) = content
            .split_once("\n\n")
            .unwrap_or((content.as_ref(), ""));

        let mut tree_oid = None;
        let mut parents = Vec::new();
        let mut author = None;
        let mut committer = None;

        // unknown headers (gpgsig, encoding, ...) and their continuation lines are skipped
        for line in headers.lines() {
            if let Some(tree) = line.strip_prefix("tree ") {
                tree_oid = Some(ObjectId::try_parse(tree.to_string())?);
            } else if let Some(parent) = line.strip_prefix("parent ") {
                parents.push(ObjectId::try_parse(parent.to_string())?);
            } else if let Some(line) = line.strip_prefix("author ") {
                author = Some(Person::try_from(line)?);
            } else if let Some(line) = line.strip_prefix("committer ") {
                committer = Some(Person::try_from(line)?);
            }
        }

        Ok(Commit {
            oid,
            parents,
            tree_oid: tree_oid.context("Invalid commit object: missing tree line")?,
            author: author.context("Invalid commit object: missing author line")?,
            committer: committer.context("Invalid commit object: missing committer line")?,
            message: message.to_string(),
        })
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn object_id(&self) -> anyhow::Result<ObjectId> {
        Ok(self.oid.clone())
    }
}
