//! JSON payloads shaped like the API responses the client consumes.

use serde_json::{json, Value};

/// A workflow-run object as the runs index returns it.
pub fn workflow_run_json(id: u64, branch: &str, status: &str, conclusion: Option<&str>) -> Value {
    json!({
        "id": id,
        "name": "ci",
        "display_title": "update pipeline",
        "node_id": "WFR_kwLOABCD1234",
        "path": ".github/workflows/ci.yml",
        "head_branch": branch,
        "head_sha": "8e3f0a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6e7f",
        "run_number": 128,
        "run_attempt": 1,
        "run_started_at": "2024-05-01T12:00:05Z",
        "event": "push",
        "status": status,
        "conclusion": conclusion,
        "workflow_id": 7,
        "check_suite_id": 1,
        "check_suite_node_id": "CS_kwABCD1234",
        "url": format!("https://api.github.com/repos/acme/widgets/actions/runs/{id}"),
        "html_url": format!("https://github.com/acme/widgets/actions/runs/{id}"),
        "created_at": "2024-05-01T12:00:00Z",
        "updated_at": "2024-05-01T12:10:00Z",
        "jobs_url": format!("https://api.github.com/repos/acme/widgets/actions/runs/{id}/jobs"),
        "logs_url": format!("https://api.github.com/repos/acme/widgets/actions/runs/{id}/logs"),
        "check_suite_url": "https://api.github.com/repos/acme/widgets/check-suites/1",
        "artifacts_url": format!("https://api.github.com/repos/acme/widgets/actions/runs/{id}/artifacts"),
        "cancel_url": format!("https://api.github.com/repos/acme/widgets/actions/runs/{id}/cancel"),
        "rerun_url": format!("https://api.github.com/repos/acme/widgets/actions/runs/{id}/rerun"),
        "workflow_url": "https://api.github.com/repos/acme/widgets/actions/workflows/7",
        "pull_requests": [],
        "head_commit": {
            "id": "8e3f0a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6e7f",
            "tree_id": "5c3f0a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6e7f",
            "message": "update pipeline",
            "timestamp": "2024-05-01T11:59:00Z",
            "author": { "name": "dev", "email": "dev@example.com" },
            "committer": { "name": "dev", "email": "dev@example.com" }
        },
        "repository": repository_json(),
        "head_repository": repository_json()
    })
}

/// A pull-request object as the open-PR listing returns it.
pub fn pull_request_json(number: u64, head_branch: &str) -> Value {
    json!({
        "url": format!("https://api.github.com/repos/acme/widgets/pulls/{number}"),
        "id": 1000 + number,
        "number": number,
        "state": "open",
        "title": "change something",
        "head": {
            "label": format!("acme:{head_branch}"),
            "ref": head_branch,
            "sha": "abc1230a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6e"
        },
        "base": {
            "label": "acme:main",
            "ref": "main",
            "sha": "def4560a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6e"
        }
    })
}

fn repository_json() -> Value {
    json!({
        "id": 1296269,
        "name": "widgets",
        "full_name": "acme/widgets",
        "private": false,
        "html_url": "https://github.com/acme/widgets",
        "url": "https://api.github.com/repos/acme/widgets"
    })
}
