//! Integration test for the drag-and-drop protocol and the search filter.

use tender_kanban::{
    search,
    task::{AddTask, DeleteTask},
    BoardContext, ColumnId, Task,
};

fn setup() -> BoardContext {
    BoardContext::with_defaults()
}

fn add(ctx: &mut BoardContext, title: &str) -> Task {
    AddTask::new(title)
        .with_due_date("2024-01-01".parse().unwrap())
        .execute(ctx)
        .unwrap()
}

fn col(id: &str) -> ColumnId {
    ColumnId::from_string(id)
}

#[test]
fn test_completed_drag_moves_the_task_and_goes_idle() {
    let mut ctx = setup();
    let task = add(&mut ctx, "Dragged");

    ctx.begin_drag(task.id.clone());
    ctx.hover_column(col("completed"));
    let moved = ctx.drop_on(col("completed")).unwrap();

    assert_eq!(moved.status, col("completed"));
    assert_eq!(ctx.get(&task.id).unwrap().status, col("completed"));
    assert!(ctx.drag().is_idle());
}

#[test]
fn test_cancelled_drag_mutates_nothing() {
    let mut ctx = setup();
    let task = add(&mut ctx, "Kept");
    let original = task.status.clone();

    ctx.begin_drag(task.id.clone());
    ctx.hover_column(col("completed"));
    ctx.cancel_drag();

    assert_eq!(ctx.get(&task.id).unwrap().status, original);
    assert!(ctx.drag().is_idle());
}

#[test]
fn test_hover_highlight_tracks_the_pointer() {
    let mut ctx = setup();
    let task = add(&mut ctx, "Hovering");

    ctx.begin_drag(task.id.clone());
    assert!(ctx.drag().hovered_column().is_none());

    ctx.hover_column(col("in-progress"));
    assert_eq!(ctx.drag().hovered_column(), Some(&col("in-progress")));

    // Leaving a surface keeps the gesture alive.
    ctx.leave_column();
    assert!(ctx.drag().hovered_column().is_none());
    assert_eq!(ctx.drag().dragged_task(), Some(&task.id));

    ctx.hover_column(col("completed"));
    let moved = ctx.drop_on(col("completed")).unwrap();
    assert_eq!(moved.status, col("completed"));
}

#[test]
fn test_drop_races_with_delete() {
    let mut ctx = setup();
    let task = add(&mut ctx, "Deleted mid-drag");

    ctx.begin_drag(task.id.clone());
    DeleteTask::new(task.id.clone()).execute(&mut ctx);

    // The drop resolves the gesture but moves nothing.
    assert!(ctx.drop_on(col("completed")).is_none());
    assert!(ctx.drag().is_idle());
    assert!(ctx.tasks().is_empty());
}

#[test]
fn test_filter_contract() {
    let mut ctx = setup();
    add(&mut ctx, "Other");
    add(&mut ctx, "Flux capacitor");

    let tasks = ctx.snapshot();

    // Empty query is the identity.
    let all = search::filter(&tasks, "");
    assert_eq!(all.len(), tasks.len());
    assert_eq!(all[0].id, tasks[0].id);

    // Case-insensitive substring over title.
    let hits = search::filter(&tasks, "FLUX");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Flux capacitor");
}

#[test]
fn test_filter_recomputes_after_every_mutation() {
    let mut ctx = setup();
    let task = add(&mut ctx, "tender briefing");

    assert_eq!(search::filter(ctx.tasks(), "tender").len(), 1);

    DeleteTask::new(task.id).execute(&mut ctx);
    assert!(search::filter(ctx.tasks(), "tender").is_empty());
}

#[test]
fn test_board_view_follows_drops() {
    let mut ctx = setup();
    let task = add(&mut ctx, "On the move");

    let view = ctx.board_view("");
    assert_eq!(view.columns[0].column.id, col("todo"));
    assert_eq!(view.columns[0].count(), 1);

    ctx.begin_drag(task.id.clone());
    ctx.drop_on(col("completed"));

    let view = ctx.board_view("");
    assert_eq!(view.columns[0].count(), 0);
    let completed = view
        .columns
        .iter()
        .find(|c| c.column.id == col("completed"))
        .unwrap();
    assert_eq!(completed.count(), 1);
    assert_eq!(completed.tasks[0].id, task.id);
}
