//! Benchmarks for task list rendering.
//!
//! Every fetch replaces the whole list, so these measure the cost of parsing
//! a task mapping and rebuilding its display lines from scratch.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use task_assistant::client::TaskMap;
use task_assistant::ui::{task_lines, Theme};
use task_assistant::view::TaskListView;

fn task_body(count: usize) -> String {
    let entries: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#""task-{}": {{"description": "Task number {}", "completed": {}}}"#,
                i,
                i,
                i % 3 == 0
            )
        })
        .collect();
    format!("{{{}}}", entries.join(","))
}

fn bench_parse_task_map(c: &mut Criterion) {
    let body = task_body(200);
    c.bench_function("parse_task_map_200", |b| {
        b.iter(|| serde_json::from_str::<TaskMap>(black_box(&body)).unwrap())
    });
}

fn bench_render_task_lines(c: &mut Criterion) {
    let tasks: TaskMap = serde_json::from_str(&task_body(200)).unwrap();
    let theme = Theme::default();
    c.bench_function("render_task_lines_200", |b| {
        b.iter(|| {
            let content = TaskListView::render(black_box(&tasks));
            task_lines(&content, &theme)
        })
    });
}

criterion_group!(benches, bench_parse_task_map, bench_render_task_lines);
criterion_main!(benches);
