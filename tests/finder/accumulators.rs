use crate::common::harness::TestRepo;
use crate::common::repo;
use bitquery::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn authored_history(repo: &mut TestRepo) -> Vec<Commit> {
    let ann = Identity::new("Ann", "ann@example.com");
    let bob = Identity::new("Bob", "bob@example.com");
    let cid = Identity::new("Cid", "cid@example.com");

    [&ann, &bob, &ann, &cid, &bob, &ann]
        .into_iter()
        .enumerate()
        .map(|(index, author)| {
            repo.set_author(author);
            repo.add(&format!("{} {index}", author.name()))
        })
        .collect()
}

#[rstest]
fn histogram_ranks_authors(mut repo: TestRepo) -> Result<(), Box<dyn std::error::Error>> {
    authored_history(&mut repo);

    let mut histogram = IdentityHistogramFilter::authors();
    CommitFinder::new(repo.repository())
        .with_filter(&mut histogram)
        .find()?;

    let ranked = histogram
        .ranked()
        .into_iter()
        .map(|(identity, count)| (identity.name(), count))
        .collect::<Vec<_>>();
    assert_eq!(ranked, vec![("Ann", 3), ("Bob", 2), ("Cid", 1)]);
    assert_eq!(
        histogram.count_for(&Identity::new("Bob", "bob@example.com")),
        2
    );
    Ok(())
}

#[rstest]
fn committer_histogram_counts_committers(
    mut repo: TestRepo,
) -> Result<(), Box<dyn std::error::Error>> {
    authored_history(&mut repo);

    let mut histogram = IdentityHistogramFilter::committers();
    CommitFinder::new(repo.repository())
        .with_filter(&mut histogram)
        .find()?;

    assert_eq!(histogram.counts().len(), 1);
    assert_eq!(histogram.counts().values().sum::<usize>(), 6);
    Ok(())
}

#[rstest]
fn first_commit_behind_author_gate_is_newest_match(
    mut repo: TestRepo,
) -> Result<(), Box<dyn std::error::Error>> {
    let commits = authored_history(&mut repo);

    let mut first = FirstCommitFilter::new();
    let mut visited = CommitCountFilter::new();
    CommitFinder::new(repo.repository())
        .with_filter(
            AndCommitFilter::new()
                .add(&mut visited)
                .add(AuthorFilter::new(Some("Cid"), None)?)
                .add(&mut first),
        )
        .find()?;

    assert_eq!(first.commit(), Some(&commits[3]));
    assert_eq!(visited.count(), 3);
    Ok(())
}

#[rstest]
fn last_commit_is_oldest_match(mut repo: TestRepo) -> Result<(), Box<dyn std::error::Error>> {
    let commits = authored_history(&mut repo);

    let mut last = LastCommitFilter::new();
    CommitFinder::new(repo.repository())
        .with_filter(
            AndCommitFilter::new()
                .add(AuthorFilter::new(Some("Bob"), None)?)
                .add(&mut last),
        )
        .find()?;

    assert_eq!(last.commit(), Some(&commits[1]));
    Ok(())
}

#[rstest]
fn count_matches_list_length(mut repo: TestRepo) -> Result<(), Box<dyn std::error::Error>> {
    authored_history(&mut repo);

    let mut count = CommitCountFilter::new();
    let mut commits = CommitListFilter::new();
    CommitFinder::new(repo.repository())
        .with_filter(
            AndCommitFilter::new()
                .add(ParentCountFilter::no_merges())
                .add(&mut count)
                .add(&mut commits),
        )
        .find()?;

    assert_eq!(count.count(), commits.commits().len());
    assert_eq!(count.count(), 6);
    Ok(())
}

#[rstest]
fn root_commit_is_found(mut repo: TestRepo) -> Result<(), Box<dyn std::error::Error>> {
    let commits = authored_history(&mut repo);

    let mut roots = CommitListFilter::new();
    CommitFinder::new(repo.repository())
        .with_filter(
            AndCommitFilter::new()
                .add(ParentCountFilter::roots())
                .add(&mut roots),
        )
        .find()?;

    assert_eq!(roots.commits(), &commits[..1]);
    Ok(())
}
