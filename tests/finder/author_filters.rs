use crate::common::harness::{TestRepo, random_identity};
use crate::common::{messages, repo};
use bitquery::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashSet;

#[rstest]
fn clone_keeps_author_configuration() {
    let identity = random_identity();
    let filter = AuthorFilter::from(&identity);

    let cloned = filter.clone();

    assert_eq!(cloned, filter);
    assert_eq!(cloned.matcher().name(), Some(identity.name()));
    assert_eq!(cloned.matcher().email(), Some(identity.email()));
}

#[rstest]
fn author_filter_selects_commits_by_author(
    mut repo: TestRepo,
) -> Result<(), Box<dyn std::error::Error>> {
    let person = Identity::new("find user", "find@user.com");

    repo.add("commit0");
    repo.set_author(&person);
    repo.add("commit1");
    repo.add("commit2");

    let mut commits = CommitListFilter::new();
    CommitFinder::new(repo.repository())
        .with_filter(
            AndCommitFilter::new()
                .add(AuthorFilter::from(&person))
                .add(&mut commits),
        )
        .find()?;

    assert_eq!(messages(commits.commits()), vec!["commit2", "commit1"]);
    Ok(())
}

#[rstest]
fn author_set_of_one_author_has_one_entry(
    mut repo: TestRepo,
) -> Result<(), Box<dyn std::error::Error>> {
    let person = random_identity();
    repo.set_author(&person);
    repo.add("first");
    repo.add("second");

    let mut authors = AuthorSetFilter::new();
    CommitFinder::new(repo.repository())
        .with_filter(&mut authors)
        .find()?;

    assert_eq!(authors.persons(), &HashSet::from([person]));
    Ok(())
}

#[rstest]
fn author_filter_without_match_collects_nothing(
    mut repo: TestRepo,
) -> Result<(), Box<dyn std::error::Error>> {
    repo.set_author(&Identity::new("Present", "present@example.com"));
    repo.add("commit1");

    let mut commits = CommitListFilter::new();
    CommitFinder::new(repo.repository())
        .with_filter(
            AndCommitFilter::new()
                .add(AuthorFilter::new(Some("Absent"), Some("absent@example.com"))?)
                .add(&mut commits),
        )
        .find()?;

    assert!(commits.commits().is_empty());
    Ok(())
}

#[rstest]
#[case(Some("Ann Author"), None, vec!["work account", "home account"])]
#[case(None, Some("ann@home.example.com"), vec!["home account"])]
#[case(Some("Ann Author"), Some("ann@work.example.com"), vec!["work account"])]
#[case(Some("ann author"), None, vec![])]
fn author_filter_matches_configured_fields(
    mut repo: TestRepo,
    #[case] name: Option<&str>,
    #[case] email: Option<&str>,
    #[case] expected: Vec<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    repo.set_author(&Identity::new("Ann Author", "ann@home.example.com"));
    repo.add("home account");
    repo.set_author(&Identity::new("Ann Author", "ann@work.example.com"));
    repo.add("work account");
    repo.set_author(&Identity::new("Someone Else", "ann@home.example.com.au"));
    repo.add("lookalike");

    let mut commits = CommitListFilter::new();
    CommitFinder::new(repo.repository())
        .with_filter(
            AndCommitFilter::new()
                .add(AuthorFilter::new(name, email)?)
                .add(&mut commits),
        )
        .find()?;

    assert_eq!(messages(commits.commits()), expected);
    Ok(())
}

#[rstest]
fn author_set_collects_distinct_authors(
    mut repo: TestRepo,
) -> Result<(), Box<dyn std::error::Error>> {
    let ann = random_identity();
    let bob = Identity::new(format!("{} II", ann.name()), "bob@example.com");

    repo.set_author(&ann);
    repo.add("a1");
    repo.set_author(&bob);
    repo.add("b1");
    repo.set_author(&ann);
    repo.add("a2");

    let mut authors = AuthorSetFilter::new();
    CommitFinder::new(repo.repository())
        .with_filter(&mut authors)
        .find()?;

    assert_eq!(authors.persons(), &HashSet::from([ann, bob]));
    Ok(())
}

#[rstest]
fn author_set_is_empty_after_reset(mut repo: TestRepo) -> Result<(), Box<dyn std::error::Error>> {
    repo.add("only");

    let mut authors = AuthorSetFilter::new();
    CommitFinder::new(repo.repository())
        .with_filter(&mut authors)
        .find()?;
    assert_eq!(authors.persons().len(), 1);

    authors.reset();

    assert!(authors.persons().is_empty());
    Ok(())
}
