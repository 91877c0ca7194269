// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hubq_core::{Issue, Resolver};

/// Format an issue as a single list line.
///
/// `- [issue] (open, @alice) #42: Fix crash  {bug, priority.high}  %v2`
pub fn format_issue_line<R: Resolver + ?Sized>(issue: &Issue, resolver: &R) -> String {
    let kind = if issue.pull_request { "pr" } else { "issue" };
    let state_display = match &issue.assignee {
        Some(assignee) => format!("{}, @{}", issue.state, assignee),
        None => issue.state.to_string(),
    };
    let mut line = format!(
        "- [{}] ({}) #{}: {}",
        kind, state_display, issue.id, issue.title
    );

    if !issue.labels.is_empty() {
        line.push_str(&format!("  {{{}}}", issue.labels.join(", ")));
    }

    // Milestone ids missing from the model are shown raw
    if let Some(id) = issue.milestone {
        match resolver.milestone_by_id(id) {
            Some(m) => line.push_str(&format!("  %{}", m.title)),
            None => line.push_str(&format!("  %{}", id)),
        }
    }

    line
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
