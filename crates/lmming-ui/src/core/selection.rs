//! Selection gate: keeps bulk-action buttons and the select-all control in
//! step with the row checkboxes of a table.
//!
//! # Design
//! - Every operation is total over empty tables, missing select-all and missing buttons.
//! - `refresh_is_allowed` is the negation of `any_row_checked`; there is no second scan.
//! - Recompute is idempotent and runs after every row change notification.

/// Surface the gate reads and mutates. The browser implementation lives in
/// `dom::surface`; tests use an in-memory table.
pub trait SelectionSurface {
    /// Handle to one row checkbox.
    type Row;

    /// Row checkboxes in document order.
    fn rows(&self) -> Vec<Self::Row>;

    /// Checked state of a row checkbox.
    fn is_checked(&self, row: &Self::Row) -> bool;

    /// Set the checked state of a row checkbox without notifying listeners.
    fn set_checked(&mut self, row: &Self::Row, checked: bool);

    /// Emit a change notification for a row. Listeners, including the gate's
    /// own recompute, run before this returns.
    fn notify_changed(&mut self, row: &Self::Row);

    /// Checked state of the select-all control, `None` when absent.
    fn select_all(&self) -> Option<bool>;

    /// Set the select-all control; a no-op when absent.
    fn set_select_all(&mut self, checked: bool);

    /// Apply or remove the disabled presentation on every bulk-action button.
    /// Returns the number of buttons touched.
    fn set_actions_disabled(&mut self, disabled: bool) -> usize;
}

/// What a recompute applied to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Availability {
    /// Bulk actions are enabled (at least one row is checked).
    pub enabled: bool,
    /// Number of bulk-action buttons updated.
    pub buttons: usize,
    /// The select-all control was checked and has been forced off.
    pub cleared_select_all: bool,
}

/// True as soon as one row checkbox is checked.
#[must_use]
pub fn any_row_checked<S>(surface: &S) -> bool
where
    S: SelectionSurface + ?Sized,
{
    surface.rows().iter().any(|row| surface.is_checked(row))
}

/// True when no row is selected, so a refresh would not discard a selection.
#[must_use]
pub fn refresh_is_allowed<S>(surface: &S) -> bool
where
    S: SelectionSurface + ?Sized,
{
    !any_row_checked(surface)
}

/// Number of checked rows.
#[must_use]
pub fn selected_count<S>(surface: &S) -> usize
where
    S: SelectionSurface + ?Sized,
{
    surface
        .rows()
        .iter()
        .filter(|row| surface.is_checked(row))
        .count()
}

/// Set every row checkbox, then notify each row so dependent listeners run.
pub fn set_all_row_checkboxes<S>(surface: &mut S, checked: bool)
where
    S: SelectionSurface + ?Sized,
{
    let rows = surface.rows();
    for row in &rows {
        surface.set_checked(row, checked);
    }
    for row in &rows {
        surface.notify_changed(row);
    }
}

/// Mirror the select-all control onto every row. Returns the state applied,
/// or `None` when the page has no select-all control.
pub fn toggle_from_select_all<S>(surface: &mut S) -> Option<bool>
where
    S: SelectionSurface + ?Sized,
{
    let checked = surface.select_all()?;
    set_all_row_checkboxes(surface, checked);
    Some(checked)
}

/// Enable bulk actions when any row is checked; otherwise disable them and
/// force select-all off.
pub fn recompute_bulk_action_availability<S>(surface: &mut S) -> Availability
where
    S: SelectionSurface + ?Sized,
{
    let enabled = any_row_checked(surface);
    let buttons = surface.set_actions_disabled(!enabled);
    let mut cleared_select_all = false;
    if !enabled {
        cleared_select_all = surface.select_all() == Some(true);
        surface.set_select_all(false);
    }
    Availability {
        enabled,
        buttons,
        cleared_select_all,
    }
}
