//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use async_trait::async_trait;
use changelog_release::{GitHubError, PullRequest, PullRequestSource};
use octocrab::Octocrab;
use serde_json::{Map, Value, json};
use wiremock::MockServer;

/// A pull request source serving a fixed, already ordered list.
pub struct StaticSource(pub Vec<PullRequest>);

#[async_trait]
impl PullRequestSource for StaticSource {
    async fn list_pulls_since_release(&self) -> Result<Vec<PullRequest>, GitHubError> {
        Ok(self.0.clone())
    }
}

/// A pull request source that always fails as if the repository were missing.
pub struct FailingSource;

#[async_trait]
impl PullRequestSource for FailingSource {
    async fn list_pulls_since_release(&self) -> Result<Vec<PullRequest>, GitHubError> {
        Err(GitHubError::RepositoryNotFound {
            owner: "owner".to_string(),
            repo: "repo".to_string(),
        })
    }
}

pub fn pull(number: u64, title: &str, body: &str) -> PullRequest {
    PullRequest {
        number,
        title: title.to_string(),
        body: Some(body.to_string()),
    }
}

/// Create a temporary directory for test output.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create an octocrab client pointing to a mock server.
pub fn mock_client(server: &MockServer) -> Octocrab {
    Octocrab::builder()
        .base_uri(server.uri())
        .expect("Failed to set base URI")
        .build()
        .expect("Failed to build octocrab")
}

/// Create a mock user object with the fields octocrab requires.
pub fn mock_user(login: &str, id: u64) -> Value {
    let api = format!("https://api.github.com/users/{}", login);
    let mut user = Map::new();
    user.insert("login".into(), json!(login));
    user.insert("id".into(), json!(id));
    user.insert("node_id".into(), json!(format!("MDQ6VXNlcnt{}", id)));
    user.insert(
        "avatar_url".into(),
        json!(format!("https://avatars.githubusercontent.com/u/{}?v=4", id)),
    );
    user.insert("gravatar_id".into(), json!(""));
    user.insert("url".into(), json!(api));
    user.insert("html_url".into(), json!(format!("https://github.com/{}", login)));
    for (key, suffix) in [
        ("followers_url", "/followers"),
        ("following_url", "/following{/other_user}"),
        ("gists_url", "/gists{/gist_id}"),
        ("starred_url", "/starred{/owner}{/repo}"),
        ("subscriptions_url", "/subscriptions"),
        ("organizations_url", "/orgs"),
        ("repos_url", "/repos"),
        ("events_url", "/events{/privacy}"),
        ("received_events_url", "/received_events"),
    ] {
        user.insert(key.into(), json!(format!("{}{}", api, suffix)));
    }
    user.insert("type".into(), json!("User"));
    user.insert("site_admin".into(), json!(false));
    Value::Object(user)
}

/// Create a mock repository object with the fields octocrab requires.
pub fn mock_repo() -> Value {
    let api = "https://api.github.com/repos/owner/repo";
    let mut repo = Map::new();
    repo.insert("id".into(), json!(1));
    repo.insert("node_id".into(), json!("MDEwOlJlcG9zaXRvcnkx"));
    repo.insert("name".into(), json!("repo"));
    repo.insert("full_name".into(), json!("owner/repo"));
    repo.insert("owner".into(), mock_user("owner", 1));
    repo.insert("private".into(), json!(false));
    repo.insert("html_url".into(), json!("https://github.com/owner/repo"));
    repo.insert("description".into(), json!("Test repository"));
    repo.insert("fork".into(), json!(false));
    repo.insert("url".into(), json!(api));
    for (key, suffix) in [
        ("forks_url", "/forks"),
        ("keys_url", "/keys{/key_id}"),
        ("collaborators_url", "/collaborators{/collaborator}"),
        ("teams_url", "/teams"),
        ("hooks_url", "/hooks"),
        ("issue_events_url", "/issues/events{/number}"),
        ("events_url", "/events"),
        ("assignees_url", "/assignees{/user}"),
        ("branches_url", "/branches{/branch}"),
        ("tags_url", "/tags"),
        ("blobs_url", "/git/blobs{/sha}"),
        ("git_tags_url", "/git/tags{/sha}"),
        ("git_refs_url", "/git/refs{/sha}"),
        ("trees_url", "/git/trees{/sha}"),
        ("statuses_url", "/statuses/{sha}"),
        ("languages_url", "/languages"),
        ("stargazers_url", "/stargazers"),
        ("contributors_url", "/contributors"),
        ("subscribers_url", "/subscribers"),
        ("subscription_url", "/subscription"),
        ("commits_url", "/commits{/sha}"),
        ("git_commits_url", "/git/commits{/sha}"),
        ("comments_url", "/comments{/number}"),
        ("issue_comment_url", "/issues/comments{/number}"),
        ("contents_url", "/contents/{+path}"),
        ("compare_url", "/compare/{base}...{head}"),
        ("merges_url", "/merges"),
        ("archive_url", "/{archive_format}{/ref}"),
        ("downloads_url", "/downloads"),
        ("issues_url", "/issues{/number}"),
        ("pulls_url", "/pulls{/number}"),
        ("milestones_url", "/milestones{/number}"),
        ("notifications_url", "/notifications{?since,all,participating}"),
        ("labels_url", "/labels{/name}"),
        ("releases_url", "/releases{/id}"),
        ("deployments_url", "/deployments"),
    ] {
        repo.insert(key.into(), json!(format!("{}{}", api, suffix)));
    }
    Value::Object(repo)
}

/// Create a closed PR as the GitHub API returns it.
///
/// `merged` controls whether the PR was merged or closed without merging.
pub fn mock_pr(number: u64, title: &str, body: Option<&str>, merged: bool) -> Value {
    let repo = mock_repo();
    let user = mock_user("testuser", 100);
    let api = format!("https://api.github.com/repos/owner/repo/pulls/{}", number);
    let issue = format!("https://api.github.com/repos/owner/repo/issues/{}", number);
    let html = format!("https://github.com/owner/repo/pull/{}", number);
    let closed_at = "2024-01-15T00:00:00Z";

    let head = json!({
        "label": "owner:feature",
        "ref": "feature",
        "sha": "abc123def456789",
        "user": user.clone(),
        "repo": repo.clone()
    });

    let base = json!({
        "label": "owner:main",
        "ref": "main",
        "sha": "def456abc789",
        "user": mock_user("owner", 1),
        "repo": repo
    });

    let links = json!({
        "self": { "href": api },
        "html": { "href": html },
        "issue": { "href": issue },
        "comments": { "href": format!("{}/comments", issue) },
        "review_comments": { "href": format!("{}/comments", api) },
        "review_comment": { "href": "https://api.github.com/repos/owner/repo/pulls/comments{/number}" },
        "commits": { "href": format!("{}/commits", api) },
        "statuses": { "href": "https://api.github.com/repos/owner/repo/statuses/abc123def456789" }
    });

    // Build the PR object using a Map to avoid macro recursion limits
    let mut pr = Map::new();
    pr.insert("url".into(), json!(api));
    pr.insert("id".into(), json!(number * 1000));
    pr.insert("node_id".into(), json!(format!("PR_{}", number)));
    pr.insert("html_url".into(), json!(html));
    pr.insert("diff_url".into(), json!(format!("{}.diff", html)));
    pr.insert("patch_url".into(), json!(format!("{}.patch", html)));
    pr.insert("issue_url".into(), json!(issue));
    pr.insert("commits_url".into(), json!(format!("{}/commits", api)));
    pr.insert("review_comments_url".into(), json!(format!("{}/comments", api)));
    pr.insert(
        "review_comment_url".into(),
        json!("https://api.github.com/repos/owner/repo/pulls/comments{/number}"),
    );
    pr.insert("comments_url".into(), json!(format!("{}/comments", issue)));
    pr.insert(
        "statuses_url".into(),
        json!("https://api.github.com/repos/owner/repo/statuses/abc123"),
    );
    pr.insert("number".into(), json!(number));
    pr.insert("state".into(), json!("closed"));
    pr.insert("locked".into(), json!(false));
    pr.insert("title".into(), json!(title));
    pr.insert("body".into(), json!(body));
    pr.insert("user".into(), user);
    pr.insert("labels".into(), json!([]));
    pr.insert("assignee".into(), Value::Null);
    pr.insert("assignees".into(), json!([]));
    pr.insert("requested_reviewers".into(), json!([]));
    pr.insert("requested_teams".into(), json!([]));
    pr.insert("milestone".into(), Value::Null);
    pr.insert("created_at".into(), json!("2024-01-01T00:00:00Z"));
    pr.insert("updated_at".into(), json!(closed_at));
    pr.insert("closed_at".into(), json!(closed_at));
    pr.insert("merged_at".into(), json!(merged.then_some(closed_at)));
    pr.insert("merge_commit_sha".into(), json!("abc123def456"));
    pr.insert("head".into(), head);
    pr.insert("base".into(), base);
    pr.insert("draft".into(), json!(false));
    pr.insert("merged".into(), json!(merged));
    pr.insert("mergeable".into(), json!(true));
    pr.insert("mergeable_state".into(), json!("clean"));
    pr.insert(
        "merged_by".into(),
        json!(merged.then(|| mock_user("merger", 200))),
    );
    pr.insert("comments".into(), json!(0));
    pr.insert("review_comments".into(), json!(0));
    pr.insert("maintainer_can_modify".into(), json!(true));
    pr.insert("commits".into(), json!(1));
    pr.insert("additions".into(), json!(10));
    pr.insert("deletions".into(), json!(2));
    pr.insert("changed_files".into(), json!(1));
    pr.insert("_links".into(), links);

    Value::Object(pr)
}
