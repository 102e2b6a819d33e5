//! # View Engine
//!
//! Computes what a renderer should show for the current selection.
//!
//! ## Pipeline
//!
//! 1. **Filter** by [`Selection`]:
//!    - `Project(pos)`: tasks whose `project_id` is that project's id, dated or not.
//!    - `DateFilter(Today)`: tasks dated on the current local day.
//!    - `DateFilter(ThisWeek)`: tasks dated in the current local week.
//!      Undated tasks never match a date filter.
//! 2. **Sort** by [`SortDirective`], only when it is not `None`. Undated tasks
//!    count as older than any date: first when ascending, last when descending.
//!    The sort is stable, so equal dates keep collection order.
//! 3. **Partition** into completed and uncompleted, keeping the order from step 2.
//!
//! Every entry carries the task's storage position so a renderer can route a
//! click back to [`crate::tasks::TaskStore`] operations. Positions are carried
//! alongside the borrowed task; the task itself is never tagged.
//!
//! [`compute_view`] is a pure function of the stores, the selection, the sort
//! directive, the week start and `now`.

use crate::error::Result;
use crate::model::Task;
use crate::projects::ProjectStore;
use crate::tasks::TaskStore;
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFilter {
    Today,
    ThisWeek,
}

impl DateFilter {
    pub fn label(&self) -> &'static str {
        match self {
            DateFilter::Today => "Today",
            DateFilter::ThisWeek => "This Week",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    /// A project, by position in the project store.
    Project(usize),
    DateFilter(DateFilter),
}

impl Selection {
    pub const TODAY: Selection = Selection::DateFilter(DateFilter::Today);
    pub const THIS_WEEK: Selection = Selection::DateFilter(DateFilter::ThisWeek);

    /// New tasks can only be added while a project is selected.
    pub fn accepts_new_tasks(&self) -> bool {
        matches!(self, Selection::Project(_))
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Project(0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirective {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirective {
    /// Next state of the sort toggle: unset, ascending, descending, unset.
    pub fn next(self) -> Self {
        match self {
            SortDirective::None => SortDirective::Ascending,
            SortDirective::Ascending => SortDirective::Descending,
            SortDirective::Descending => SortDirective::None,
        }
    }
}

/// First day of the "This Week" window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// The first day of the week containing `day`.
    pub fn week_of(&self, day: NaiveDate) -> NaiveDate {
        let offset = match self {
            WeekStart::Sunday => day.weekday().num_days_from_sunday(),
            WeekStart::Monday => day.weekday().num_days_from_monday(),
        };
        day - Duration::days(i64::from(offset))
    }
}

/// A task in a view, paired with its position in the task store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewEntry<'a> {
    pub position: usize,
    pub task: &'a Task,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct View<'a> {
    pub completed: Vec<ViewEntry<'a>>,
    pub uncompleted: Vec<ViewEntry<'a>>,
}

impl<'a> View<'a> {
    /// Nothing left to do: the renderer shows its empty state.
    pub fn is_empty_uncompleted(&self) -> bool {
        self.uncompleted.is_empty()
    }

    pub fn len(&self) -> usize {
        self.completed.len() + self.uncompleted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty() && self.uncompleted.is_empty()
    }

    pub fn positions(&self) -> (Vec<usize>, Vec<usize>) {
        (
            self.completed.iter().map(|e| e.position).collect(),
            self.uncompleted.iter().map(|e| e.position).collect(),
        )
    }
}

/// Filter step: matching tasks with their storage positions, in storage order.
pub fn filter_tasks<'a>(
    projects: &ProjectStore,
    tasks: &'a TaskStore,
    selection: Selection,
    week_start: WeekStart,
    now: DateTime<Local>,
) -> Result<Vec<ViewEntry<'a>>> {
    let entries = tasks
        .iter()
        .enumerate()
        .map(|(position, task)| ViewEntry { position, task });

    let filtered: Vec<ViewEntry<'a>> = match selection {
        Selection::Project(position) => {
            let id = projects.require(position)?.id;
            entries.filter(|e| e.task.project_id == id).collect()
        }
        Selection::DateFilter(DateFilter::Today) => {
            let today = now.date_naive();
            entries
                .filter(|e| e.task.date.is_some_and(|d| d.date_naive() == today))
                .collect()
        }
        Selection::DateFilter(DateFilter::ThisWeek) => {
            let week = week_start.week_of(now.date_naive());
            entries
                .filter(|e| {
                    e.task
                        .date
                        .is_some_and(|d| week_start.week_of(d.date_naive()) == week)
                })
                .collect()
        }
    };

    Ok(filtered)
}

/// Stable date sort. `Option` ordering puts undated tasks before any date.
pub fn sort_entries(entries: &mut [ViewEntry<'_>], sort: SortDirective) {
    match sort {
        SortDirective::None => {}
        SortDirective::Ascending => entries.sort_by(|a, b| a.task.date.cmp(&b.task.date)),
        SortDirective::Descending => entries.sort_by(|a, b| b.task.date.cmp(&a.task.date)),
    }
}

pub fn partition(entries: Vec<ViewEntry<'_>>) -> View<'_> {
    let (completed, uncompleted) = entries.into_iter().partition(|e| e.task.completed);
    View {
        completed,
        uncompleted,
    }
}

pub fn compute_view<'a>(
    projects: &ProjectStore,
    tasks: &'a TaskStore,
    selection: Selection,
    sort: SortDirective,
    week_start: WeekStart,
    now: DateTime<Local>,
) -> Result<View<'a>> {
    let mut entries = filter_tasks(projects, tasks, selection, week_start, now)?;
    sort_entries(&mut entries, sort);
    let view = partition(entries);
    tracing::debug!(
        ?selection,
        ?sort,
        completed = view.completed.len(),
        uncompleted = view.uncompleted.len(),
        "computed view"
    );
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;
    use crate::model::{make_project, make_task, Priority, ProjectId};
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    // Wednesday
    fn now() -> DateTime<Local> {
        at(2026, 1, 14, 12)
    }

    fn dated(title: &str, date: Option<DateTime<Local>>, project: ProjectId) -> Task {
        make_task(title, "", date, Priority::None, project)
    }

    fn projects() -> ProjectStore {
        ProjectStore::with_projects(vec![make_project(0, "Home"), make_project(5, "Side")])
    }

    fn titles(entries: &[ViewEntry<'_>]) -> Vec<String> {
        entries.iter().map(|e| e.task.title.clone()).collect()
    }

    #[test]
    fn test_sort_ascending_puts_undated_first() {
        let tasks = TaskStore::with_tasks(vec![
            dated("null-a", None, 0),
            dated("jan-15", Some(at(2026, 1, 15, 0)), 0),
            dated("null-b", None, 0),
            dated("dec-01", Some(at(2025, 12, 1, 0)), 0),
        ]);
        let view = compute_view(
            &projects(),
            &tasks,
            Selection::Project(0),
            SortDirective::Ascending,
            WeekStart::Sunday,
            now(),
        )
        .unwrap();

        assert_eq!(
            titles(&view.uncompleted),
            vec!["null-a", "null-b", "dec-01", "jan-15"]
        );
    }

    #[test]
    fn test_sort_descending_puts_undated_last() {
        let tasks = TaskStore::with_tasks(vec![
            dated("null-a", None, 0),
            dated("jan-15", Some(at(2026, 1, 15, 0)), 0),
            dated("null-b", None, 0),
            dated("dec-01", Some(at(2025, 12, 1, 0)), 0),
        ]);
        let view = compute_view(
            &projects(),
            &tasks,
            Selection::Project(0),
            SortDirective::Descending,
            WeekStart::Sunday,
            now(),
        )
        .unwrap();

        assert_eq!(
            titles(&view.uncompleted),
            vec!["jan-15", "dec-01", "null-a", "null-b"]
        );
    }

    #[test]
    fn test_sort_is_stable_on_equal_dates() {
        let same = Some(at(2026, 1, 10, 0));
        let mut tasks = vec![dated("first", same, 0), dated("second", same, 0)];
        tasks.push(dated("third", same, 0));
        let tasks = TaskStore::with_tasks(tasks);

        for sort in [SortDirective::Ascending, SortDirective::Descending] {
            let view = compute_view(
                &projects(),
                &tasks,
                Selection::Project(0),
                sort,
                WeekStart::Sunday,
                now(),
            )
            .unwrap();
            assert_eq!(titles(&view.uncompleted), vec!["first", "second", "third"]);
        }
    }

    #[test]
    fn test_no_sort_keeps_storage_order() {
        let tasks = TaskStore::with_tasks(vec![
            dated("late", Some(at(2026, 3, 1, 0)), 0),
            dated("early", Some(at(2025, 3, 1, 0)), 0),
        ]);
        let view = compute_view(
            &projects(),
            &tasks,
            Selection::Project(0),
            SortDirective::None,
            WeekStart::Sunday,
            now(),
        )
        .unwrap();
        assert_eq!(titles(&view.uncompleted), vec!["late", "early"]);
    }

    #[test]
    fn test_project_filter_uses_id_not_position() {
        let tasks = TaskStore::with_tasks(vec![
            dated("home", None, 0),
            dated("side", None, 5),
            dated("position-one", None, 1),
        ]);
        let view = compute_view(
            &projects(),
            &tasks,
            Selection::Project(1),
            SortDirective::None,
            WeekStart::Sunday,
            now(),
        )
        .unwrap();

        assert_eq!(titles(&view.uncompleted), vec!["side"]);
        assert_eq!(view.uncompleted[0].position, 1);
    }

    #[test]
    fn test_project_filter_out_of_range() {
        let tasks = TaskStore::new();
        let err = compute_view(
            &projects(),
            &tasks,
            Selection::Project(9),
            SortDirective::None,
            WeekStart::Sunday,
            now(),
        )
        .unwrap_err();
        assert!(matches!(err, TodoError::IndexOutOfRange { .. }));
    }

    #[test]
    fn test_today_filter() {
        let tasks = TaskStore::with_tasks(vec![
            dated("late tonight", Some(at(2026, 1, 14, 23)), 0),
            dated("yesterday", Some(at(2026, 1, 13, 12)), 0),
            dated("undated", None, 0),
            dated("early today other project", Some(at(2026, 1, 14, 0)), 5),
        ]);
        let view = compute_view(
            &projects(),
            &tasks,
            Selection::TODAY,
            SortDirective::None,
            WeekStart::Sunday,
            now(),
        )
        .unwrap();

        assert_eq!(
            titles(&view.uncompleted),
            vec!["late tonight", "early today other project"]
        );
    }

    #[test]
    fn test_this_week_filter_sunday_start() {
        let tasks = TaskStore::with_tasks(vec![
            dated("sun", Some(at(2026, 1, 11, 8)), 0),
            dated("sat", Some(at(2026, 1, 17, 20)), 0),
            dated("prev sat", Some(at(2026, 1, 10, 8)), 0),
            dated("next sun", Some(at(2026, 1, 18, 8)), 0),
            dated("undated", None, 0),
        ]);
        let view = compute_view(
            &projects(),
            &tasks,
            Selection::THIS_WEEK,
            SortDirective::None,
            WeekStart::Sunday,
            now(),
        )
        .unwrap();

        assert_eq!(titles(&view.uncompleted), vec!["sun", "sat"]);
    }

    #[test]
    fn test_this_week_filter_monday_start() {
        let tasks = TaskStore::with_tasks(vec![
            dated("sun before", Some(at(2026, 1, 11, 8)), 0),
            dated("mon", Some(at(2026, 1, 12, 8)), 0),
            dated("sun after", Some(at(2026, 1, 18, 8)), 0),
        ]);
        let view = compute_view(
            &projects(),
            &tasks,
            Selection::THIS_WEEK,
            SortDirective::None,
            WeekStart::Monday,
            now(),
        )
        .unwrap();

        assert_eq!(titles(&view.uncompleted), vec!["mon", "sun after"]);
    }

    #[test]
    fn test_partition_keeps_sorted_order() {
        let tasks = TaskStore::with_tasks(vec![
            dated("c-late", Some(at(2026, 2, 1, 0)), 0).with_completed(true),
            dated("u-late", Some(at(2026, 2, 2, 0)), 0),
            dated("c-early", Some(at(2026, 1, 1, 0)), 0).with_completed(true),
            dated("u-early", Some(at(2026, 1, 2, 0)), 0),
        ]);
        let view = compute_view(
            &projects(),
            &tasks,
            Selection::Project(0),
            SortDirective::Ascending,
            WeekStart::Sunday,
            now(),
        )
        .unwrap();

        assert_eq!(titles(&view.completed), vec!["c-early", "c-late"]);
        assert_eq!(titles(&view.uncompleted), vec!["u-early", "u-late"]);
        assert_eq!(view.positions(), (vec![2, 0], vec![3, 1]));
    }

    #[test]
    fn test_view_is_idempotent() {
        let tasks = TaskStore::with_tasks(vec![
            dated("a", None, 0),
            dated("b", Some(at(2026, 1, 14, 9)), 0).with_completed(true),
            dated("c", Some(at(2026, 1, 1, 9)), 0),
        ]);
        let projects = projects();
        let first = compute_view(
            &projects,
            &tasks,
            Selection::Project(0),
            SortDirective::Descending,
            WeekStart::Sunday,
            now(),
        )
        .unwrap();
        let second = compute_view(
            &projects,
            &tasks,
            Selection::Project(0),
            SortDirective::Descending,
            WeekStart::Sunday,
            now(),
        )
        .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_sort_directive_cycle() {
        let mut sort = SortDirective::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            sort = sort.next();
            seen.push(sort);
        }
        assert_eq!(
            seen,
            vec![
                SortDirective::Ascending,
                SortDirective::Descending,
                SortDirective::None,
                SortDirective::Ascending
            ]
        );
    }

    #[test]
    fn test_selection_helpers() {
        assert!(Selection::Project(3).accepts_new_tasks());
        assert!(!Selection::TODAY.accepts_new_tasks());
        assert_eq!(DateFilter::ThisWeek.label(), "This Week");
        assert_eq!(Selection::default(), Selection::Project(0));
    }

    #[test]
    fn test_week_of() {
        let wed = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
        assert_eq!(
            WeekStart::Sunday.week_of(wed),
            NaiveDate::from_ymd_opt(2026, 1, 11).unwrap()
        );
        assert_eq!(
            WeekStart::Monday.week_of(wed),
            NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
        );
    }
}
