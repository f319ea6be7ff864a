use crate::common::harness::{TestRepo, random_identity};
use crate::common::{messages, repo};
use bitquery::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn list_all(repo: &TestRepo) -> Result<Vec<Commit>, FindError> {
    let mut commits = CommitListFilter::new();
    CommitFinder::new(repo.repository())
        .with_filter(&mut commits)
        .find()?;

    Ok(commits.into_commits())
}

/// Ann and Bob alternate, Bob's second commit is a merge of Ann's branch
fn shared_history(repo: &mut TestRepo) -> (Identity, Identity) {
    let ann = random_identity();
    let bob = Identity::new("Bob Builder", "bob@example.com");

    repo.set_author(&ann);
    repo.add("ann 1");
    repo.branch("topic");
    repo.set_author(&bob);
    repo.add("bob 1");
    repo.checkout("topic");
    repo.set_author(&ann);
    let topic = repo.add("ann 2");
    repo.checkout("master");
    repo.set_author(&bob);
    repo.merge(&topic, "bob merges topic");

    (ann, bob)
}

#[rstest]
fn or_collects_commits_of_either_author(
    mut repo: TestRepo,
) -> Result<(), Box<dyn std::error::Error>> {
    let (ann, bob) = shared_history(&mut repo);

    let mut commits = CommitListFilter::new();
    CommitFinder::new(repo.repository())
        .with_filter(
            AndCommitFilter::new()
                .add(
                    OrCommitFilter::new()
                        .add(AuthorFilter::from(&ann))
                        .add(AuthorFilter::from(&bob)),
                )
                .add(&mut commits),
        )
        .find()?;

    assert_eq!(commits.commits().len(), 4);
    Ok(())
}

#[rstest]
fn not_excludes_merges(mut repo: TestRepo) -> Result<(), Box<dyn std::error::Error>> {
    let (_, bob) = shared_history(&mut repo);

    let mut commits = CommitListFilter::new();
    CommitFinder::new(repo.repository())
        .with_filter(
            AndCommitFilter::new()
                .add(AuthorFilter::from(&bob))
                .add(NotCommitFilter::new(ParentCountFilter::merges()))
                .add(&mut commits),
        )
        .find()?;

    assert_eq!(messages(commits.commits()), vec!["bob 1"]);
    Ok(())
}

#[rstest]
fn accumulators_behind_each_branch_of_an_or(
    mut repo: TestRepo,
) -> Result<(), Box<dyn std::error::Error>> {
    let (ann, bob) = shared_history(&mut repo);

    let mut ann_commits = CommitCountFilter::new();
    let mut bob_commits = CommitCountFilter::new();
    let mut everything = CommitCountFilter::new();
    CommitFinder::new(repo.repository())
        .with_filter(
            AndCommitFilter::new().add(&mut everything).add(
                OrCommitFilter::new()
                    .add(
                        AndCommitFilter::new()
                            .add(AuthorFilter::from(&ann))
                            .add(&mut ann_commits),
                    )
                    .add(
                        AndCommitFilter::new()
                            .add(AuthorFilter::from(&bob))
                            .add(&mut bob_commits),
                    ),
            ),
        )
        .find()?;

    assert_eq!(
        (everything.count(), ann_commits.count(), bob_commits.count()),
        (4, 2, 2)
    );
    Ok(())
}

#[rstest]
fn empty_combinators(mut repo: TestRepo) -> Result<(), Box<dyn std::error::Error>> {
    shared_history(&mut repo);

    let mut under_and = CommitCountFilter::new();
    let mut under_or = CommitCountFilter::new();
    CommitFinder::new(repo.repository())
        .with_filter(
            OrCommitFilter::new()
                .add(
                    AndCommitFilter::new()
                        .add(OrCommitFilter::new())
                        .add(&mut under_or),
                )
                .add(
                    AndCommitFilter::new()
                        .add(AndCommitFilter::new())
                        .add(&mut under_and),
                ),
        )
        .find()?;

    assert_eq!((under_and.count(), under_or.count()), (4, 0));
    Ok(())
}

#[rstest]
fn cloned_tree_is_independent(mut repo: TestRepo) -> Result<(), Box<dyn std::error::Error>> {
    let (ann, _) = shared_history(&mut repo);

    let template = AndCommitFilter::new()
        .add(AuthorFilter::from(&ann))
        .add(CommitListFilter::new());
    let mut first = template.clone_filter();
    let mut second = template.clone_filter();

    CommitFinder::new(repo.repository())
        .with_filter(&mut first)
        .find()?;

    let mut commits = CommitListFilter::new();
    CommitFinder::new(repo.repository())
        .with_filter(AndCommitFilter::new().add(&mut second).add(&mut commits))
        .find()?;

    assert_eq!(messages(commits.commits()), vec!["ann 2", "ann 1"]);
    Ok(())
}

#[rstest]
fn clone_gives_the_same_verdicts(mut repo: TestRepo) -> Result<(), Box<dyn std::error::Error>> {
    let (ann, _) = shared_history(&mut repo);
    let all = list_all(&repo)?;

    let mut original = OrCommitFilter::new()
        .add(NotCommitFilter::new(AuthorFilter::from(&ann)))
        .add(
            AndCommitFilter::new()
                .add(MessageFilter::new("2$")?)
                .add(CommitLimitFilter::new(3)?),
        );
    let mut cloned = original.clone_filter();

    for commit in &all {
        assert_eq!(cloned.evaluate(commit), original.evaluate(commit));
    }
    Ok(())
}

#[rstest]
fn reset_clears_every_accumulator_in_the_tree(
    mut repo: TestRepo,
) -> Result<(), Box<dyn std::error::Error>> {
    shared_history(&mut repo);

    let mut commits = CommitListFilter::new();
    let mut authors = AuthorSetFilter::new();
    let mut limit = CommitLimitFilter::new(3)?;
    {
        let mut tree = AndCommitFilter::new()
            .add(&mut limit)
            .add(NotCommitFilter::new(
                AndCommitFilter::new()
                    .add(&mut authors)
                    .add(NotCommitFilter::new(&mut commits)),
            ));
        CommitFinder::new(repo.repository())
            .with_filter(&mut tree)
            .find()?;
        tree.reset();
        tree.reset();
    }

    assert!(commits.commits().is_empty());
    assert!(authors.persons().is_empty());
    assert_eq!(limit.seen(), 0);
    Ok(())
}
