use crate::client::{github_models::Issue, zenhub_models::Board};

const UNASSIGNED: &str = "unassigned";
const BACKLOG_PIPELINE: &str = "Backlog";

const HEADER_WIDTH: usize = 80;
const NUMBER_WIDTH: usize = 6;
const ASSIGNEE_WIDTH: usize = 15;

/// Pad with spaces, or cut, to exactly `width` characters.
pub fn pad(text: &str, width: usize) -> String {
    format!("{:<width$.width$}", text, width = width)
}

/// Render the `list` report.
///
/// Titles and assignees come from GitHub, ordering from the ZenHub board.
/// With a `login` filter, issues assigned to someone else are dropped while
/// unassigned ones stay visible. The per-pipeline count is the board's
/// count, before filtering.
pub fn render_board(
    repo_name: &str,
    board: &Board,
    issues: &[Issue],
    include_backlog: bool,
    login: Option<&str>,
) -> String {
    let mut out = format!(
        "Open issues for {}\n",
        pad(&format!("{}:", repo_name), HEADER_WIDTH)
    );

    for pipeline in &board.pipelines {
        if !include_backlog && pipeline.name == BACKLOG_PIPELINE {
            continue;
        }

        out.push_str(&format!("{} ({})\n", pipeline.name, pipeline.issues.len()));

        for board_issue in &pipeline.issues {
            let github_issue = issues
                .iter()
                .find(|issue| issue.number == board_issue.issue_number);
            let title = github_issue.map(|issue| issue.title.as_str()).unwrap_or("");
            let assignee = github_issue
                .and_then(Issue::assignee_login)
                .unwrap_or(UNASSIGNED);

            if let Some(login) = login.filter(|login| !login.is_empty())
                && assignee != UNASSIGNED
                && assignee != login
            {
                continue;
            }

            out.push_str(&format!(
                " - {}{}{}\n",
                pad(&board_issue.issue_number.to_string(), NUMBER_WIDTH),
                pad(assignee, ASSIGNEE_WIDTH),
                title
            ));
        }
    }

    out
}
