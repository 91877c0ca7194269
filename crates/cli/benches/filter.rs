// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmarks for filter parsing, evaluation and pruning.

#![allow(clippy::expect_used)]

use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hubq_core::{parse_filter, Issue, Model, QualifierKind};

const INPUTS: [(&str, &str); 5] = [
    ("single", "label:bug"),
    ("conjunction", "label:bug assignee:alice is:open"),
    ("disjunction", "milestone:v1 OR milestone:v2 OR no:milestone"),
    ("ranges", "id:100..500 created:>=2024-01-01"),
    (
        "nested",
        "(label:priority. OR crash) NOT (is:closed | author:bot) updated:<2024-06-01",
    ),
];

fn filter_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_parsing");
    for (name, input) in INPUTS {
        group.bench_with_input(BenchmarkId::new("parse_filter", name), input, |b, i| {
            b.iter(|| parse_filter(i))
        });
    }
    group.finish();
}

fn filter_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_evaluation");
    let model = create_model();
    let issues = create_issues(1000);

    for (name, input) in INPUTS {
        let filter = parse_filter(input).expect("valid filter");
        group.bench_function(format!("scan_1000_{}", name), |b| {
            b.iter(|| {
                issues
                    .iter()
                    .filter(|issue| filter.is_satisfied_by(issue, &model))
                    .count()
            })
        });
    }
    group.finish();
}

fn filter_pruning(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_pruning");
    for (name, input) in INPUTS {
        let filter = parse_filter(input).expect("valid filter");
        group.bench_function(format!("without_is_{}", name), |b| {
            b.iter(|| filter.without_kind(QualifierKind::Is))
        });
    }
    group.finish();
}

fn create_model() -> Model {
    Model::new()
        .with_label("bug")
        .with_label("priority.high")
        .with_label("priority.low")
        .with_milestone(1, "v1")
        .with_milestone(2, "v2")
        .with_user("alice")
        .with_user("bot")
}

fn create_issues(count: u64) -> Vec<Issue> {
    let start = Utc
        .with_ymd_and_hms(2023, 6, 1, 0, 0, 0)
        .single()
        .expect("valid date");
    (0..count)
        .map(|id| {
            let created = start + Duration::hours(id as i64 * 7);
            let mut issue = Issue::new(
                id,
                format!("Issue {} crash", id),
                if id % 5 == 0 { "bot" } else { "alice" }.to_string(),
                created,
            );
            if id % 3 == 0 {
                issue.labels.push("bug".to_string());
            }
            if id % 4 == 0 {
                issue.labels.push("priority.high".to_string());
            }
            if id % 2 == 0 {
                issue.assignee = Some("alice".to_string());
            }
            issue.milestone = Some(id % 3);
            issue
        })
        .collect()
}

criterion_group!(benches, filter_parsing, filter_evaluation, filter_pruning);
criterion_main!(benches);
