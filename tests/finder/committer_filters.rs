use crate::common::harness::{TestRepo, random_identity};
use crate::common::{messages, repo};
use bitquery::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashSet;

#[rstest]
fn committer_filter_ignores_author(mut repo: TestRepo) -> Result<(), Box<dyn std::error::Error>> {
    let maintainer = random_identity();
    let contributor = Identity::new("Contributor", "contributor@example.com");

    repo.set_author(&contributor);
    repo.set_committer(&maintainer);
    repo.add("applied patch");
    repo.set_committer(&contributor);
    repo.add("own commit");

    let mut by_maintainer = CommitListFilter::new();
    let mut by_author = CommitCountFilter::new();
    CommitFinder::new(repo.repository())
        .with_filter(
            AndCommitFilter::new()
                .add(AuthorFilter::from(&contributor))
                .add(&mut by_author)
                .add(CommitterFilter::from(&maintainer))
                .add(&mut by_maintainer),
        )
        .find()?;

    assert_eq!(by_author.count(), 2);
    assert_eq!(messages(by_maintainer.commits()), vec!["applied patch"]);
    Ok(())
}

#[rstest]
fn committer_set_collects_distinct_committers(
    mut repo: TestRepo,
) -> Result<(), Box<dyn std::error::Error>> {
    let first = random_identity();
    let second = Identity::new("Second Committer", "second@example.com");

    repo.set_committer(&first);
    repo.add("one");
    repo.set_committer(&second);
    repo.add("two");
    repo.add("three");

    let mut committers = CommitterSetFilter::new();
    CommitFinder::new(repo.repository())
        .with_filter(&mut committers)
        .find()?;

    assert_eq!(committers.persons(), &HashSet::from([first, second]));
    Ok(())
}
