//! Seed dataset written on first run (or after a reset).
//!
//! Two projects, ten tasks spread across both, every priority, a range of
//! dates and one task already completed.

use crate::model::{make_project, make_task, Priority, Project, ProjectId, Task};
use crate::tasks::parse_stored_date;

pub fn seed_projects() -> Vec<Project> {
    vec![
        make_project(0, "Home"),
        make_project(1, "Ideal Year (A sample Project)"),
    ]
}

pub fn seed_tasks() -> Vec<Task> {
    let entry = |title: &str, details: &str, date: &str, priority: Priority, project: ProjectId| {
        make_task(title, details, parse_stored_date(date), priority, project)
    };

    vec![
        entry(
            "Design a personal vision board",
            "Capture the goals, values, and images that motivate your long-term direction.",
            "2025-12-28 00:00",
            Priority::None,
            0,
        ),
        entry(
            "Map out your ideal year",
            "Outline the experiences, milestones, and habits you want to cultivate in the coming months.",
            "2026-01-15 00:00",
            Priority::High,
            0,
        ),
        entry(
            "Share your latest creation with the world",
            "Upload your work and let it inspire others to start their own journey.",
            "2026-02-03 00:00",
            Priority::Medium,
            0,
        ),
        entry(
            "Move your body with intention",
            "Choose an activity that energizes you and reconnects you with your strength.",
            "2025-12-10 00:00",
            Priority::Low,
            0,
        )
        .with_completed(true),
        entry(
            "Support your wellbeing",
            "Take what you need today to feel balanced and grounded.",
            "2025-12-05 00:00",
            Priority::None,
            0,
        ),
        entry(
            "Start a passion project",
            "Open a new space dedicated to something you truly enjoy creating.",
            "2026-01-02 00:00",
            Priority::Low,
            1,
        ),
        entry(
            "Develop a creative concept",
            "Explore ideas freely and shape them into something meaningful.",
            "2026-01-22 00:00",
            Priority::None,
            1,
        ),
        entry(
            "Complete a 30-day creativity streak",
            "Produce something small each day: writing, sketching, music, or ideas.",
            "2026-01-25 00:00",
            Priority::High,
            1,
        ),
        entry(
            "Plan a future-self strategy day",
            "Map the next 3–5 years and identify the first actionable steps.",
            "2026-02-18 00:00",
            Priority::Medium,
            1,
        ),
        entry(
            "Declutter one major zone of your life",
            "Tackle a digital archive, workspace, or physical storage to regain focus.",
            "2025-12-30 00:00",
            Priority::Low,
            1,
        ),
    ]
}
