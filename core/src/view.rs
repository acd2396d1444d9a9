//! In-memory view state for the todo list.
//!
//! # Design
//! `TodoView` is pure state with no I/O. It holds the last collection the
//! server returned, the active filter, the pagination cursor, the form
//! buffer, and which form (if any) is open. The filtered collection is
//! always recomputed from scratch from the full collection; it is never
//! patched.
//!
//! `ViewMode` makes "add form and edit form both open" unrepresentable.

use std::fmt;
use std::str::FromStr;

use crate::types::{NewTodo, Todo, TodoId};

pub const PAGE_SIZE: usize = 10;

/// Which text field the filter matches against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterField {
    #[default]
    Description,
    Priority,
}

impl FilterField {
    fn value(self, todo: &Todo) -> &str {
        match self {
            FilterField::Description => &todo.description,
            FilterField::Priority => &todo.priority,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterField::Description => f.write_str("description"),
            FilterField::Priority => f.write_str("priority"),
        }
    }
}

impl FromStr for FilterField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "description" => Ok(FilterField::Description),
            "priority" => Ok(FilterField::Priority),
            other => Err(format!("unknown filter field: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Listing,
    Adding,
    Editing(TodoId),
}

/// Text the user typed into the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoForm {
    pub description: String,
    pub due_date: String,
    pub priority: String,
}

impl TodoForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_new_todo(&self) -> NewTodo {
        NewTodo {
            description: self.description.clone(),
            due_date: self.due_date.clone(),
            priority: self.priority.clone(),
        }
    }

    pub fn to_todo(&self, id: TodoId) -> Todo {
        self.to_new_todo().with_id(id)
    }

    fn load(&mut self, todo: &Todo) {
        self.description = todo.description.clone();
        self.due_date = todo.due_date.clone();
        self.priority = todo.priority.clone();
    }
}

#[derive(Debug, Clone)]
pub struct TodoView {
    todos: Vec<Todo>,
    filtered: Vec<Todo>,
    filter_text: String,
    filter_field: FilterField,
    current_page: usize,
    mode: ViewMode,
    form: TodoForm,
}

impl Default for TodoView {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoView {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            filtered: Vec::new(),
            filter_text: String::new(),
            filter_field: FilterField::default(),
            current_page: 1,
            mode: ViewMode::Listing,
            form: TodoForm::default(),
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn filtered(&self) -> &[Todo] {
        &self.filtered
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn filter_field(&self) -> FilterField {
        self.filter_field
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    pub fn form(&self) -> &TodoForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TodoForm {
        &mut self.form
    }

    pub fn find(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| &todo.id == id)
    }

    /// Swap in a freshly fetched collection and recompute the filtered view.
    ///
    /// The page cursor is pulled back if the collection shrank under it.
    pub fn replace_todos(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
        self.apply_filter();
        self.current_page = self.current_page.clamp(1, self.total_pages().max(1));
    }

    /// Recompute `filtered` from the full collection and the active filter.
    pub fn apply_filter(&mut self) {
        let needle = self.filter_text.to_lowercase();
        let field = self.filter_field;
        self.filtered = self
            .todos
            .iter()
            .filter(|todo| {
                let value = field.value(todo);
                // An empty field is treated as absent and never matches.
                !value.is_empty() && value.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        self.current_page = 1;
        self.apply_filter();
    }

    pub fn set_filter_field(&mut self, field: FilterField) {
        self.filter_field = field;
        self.current_page = 1;
        self.apply_filter();
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(PAGE_SIZE)
    }

    /// The slice of the filtered collection on the current page.
    pub fn page_items(&self) -> &[Todo] {
        let start = (self.current_page - 1) * PAGE_SIZE;
        if start >= self.filtered.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(self.filtered.len());
        &self.filtered[start..end]
    }

    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Show the add form, or hide it if it is already showing.
    ///
    /// Form contents are left alone in both directions.
    pub fn toggle_add_form(&mut self) {
        self.mode = match self.mode {
            ViewMode::Adding => ViewMode::Listing,
            _ => ViewMode::Adding,
        };
    }

    /// Load `todo` into the form and open it for editing. Asking to edit the
    /// item that is already open closes the form instead.
    pub fn open_edit_form(&mut self, todo: &Todo) {
        self.form.load(todo);
        self.mode = match &self.mode {
            ViewMode::Editing(id) if *id == todo.id => ViewMode::Listing,
            _ => ViewMode::Editing(todo.id.clone()),
        };
    }

    pub fn edit_target(&self) -> Option<&TodoId> {
        match &self.mode {
            ViewMode::Editing(id) => Some(id),
            _ => None,
        }
    }

    /// Close whichever form is open and clear its fields.
    pub fn cancel(&mut self) {
        self.mode = ViewMode::Listing;
        self.form.clear();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn todo(id: &str, description: &str, priority: &str) -> Todo {
        Todo {
            id: TodoId::new(id),
            description: description.to_string(),
            due_date: "2026-10-18".to_string(),
            priority: priority.to_string(),
        }
    }

    fn numbered(n: usize) -> Vec<Todo> {
        (1..=n)
            .map(|i| todo(&i.to_string(), &format!("task {i}"), "low"))
            .collect()
    }

    fn ids(todos: &[Todo]) -> Vec<&str> {
        todos.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let mut view = TodoView::new();
        view.replace_todos(numbered(3));
        assert_eq!(view.filtered().len(), 3);
    }

    #[test]
    fn priority_filter_is_case_insensitive_substring() {
        let mut view = TodoView::new();
        view.replace_todos(vec![
            todo("1", "buy milk", "low"),
            todo("2", "write report", "high"),
        ]);
        view.set_filter_field(FilterField::Priority);
        view.set_filter_text("HI");
        assert_eq!(ids(view.filtered()), vec!["2"]);
    }

    #[test]
    fn description_filter_ignores_priority() {
        let mut view = TodoView::new();
        view.replace_todos(vec![
            todo("1", "high shelf", "low"),
            todo("2", "write report", "high"),
        ]);
        view.set_filter_text("high");
        assert_eq!(ids(view.filtered()), vec!["1"]);
    }

    #[test]
    fn items_with_empty_field_never_match() {
        let mut view = TodoView::new();
        view.replace_todos(vec![todo("1", "", "low"), todo("2", "dishes", "")]);
        assert_eq!(ids(view.filtered()), vec!["2"]);
        view.set_filter_field(FilterField::Priority);
        assert_eq!(ids(view.filtered()), vec!["1"]);
    }

    #[test]
    fn filtered_is_recomputed_on_refresh() {
        let mut view = TodoView::new();
        view.set_filter_text("milk");
        view.replace_todos(vec![todo("1", "buy milk", "low")]);
        assert_eq!(ids(view.filtered()), vec!["1"]);
        view.replace_todos(vec![todo("2", "write report", "high")]);
        assert!(view.filtered().is_empty());
    }

    #[test]
    fn fifteen_items_paginate_into_two_pages() {
        let mut view = TodoView::new();
        view.replace_todos(numbered(15));
        assert_eq!(view.total_pages(), 2);
        assert_eq!(view.page_items().len(), 10);
        assert_eq!(view.page_items()[0].id.as_str(), "1");

        view.next_page();
        assert_eq!(view.current_page(), 2);
        assert_eq!(ids(view.page_items()), vec!["11", "12", "13", "14", "15"]);

        view.next_page();
        assert_eq!(view.current_page(), 2);
    }

    #[test]
    fn previous_page_stops_at_one() {
        let mut view = TodoView::new();
        view.replace_todos(numbered(25));
        view.previous_page();
        assert_eq!(view.current_page(), 1);
        view.next_page();
        view.next_page();
        assert_eq!(view.current_page(), 3);
        view.previous_page();
        assert_eq!(view.current_page(), 2);
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let mut view = TodoView::new();
        assert_eq!(view.total_pages(), 0);
        assert!(view.page_items().is_empty());
        view.next_page();
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn filter_change_resets_to_first_page() {
        let mut view = TodoView::new();
        view.replace_todos(numbered(25));
        view.next_page();
        view.next_page();
        view.set_filter_text("task 2");
        assert_eq!(view.current_page(), 1);
        assert_eq!(ids(view.page_items()), vec!["2", "20", "21", "22", "23", "24", "25"]);
    }

    #[test]
    fn shrinking_collection_clamps_page() {
        let mut view = TodoView::new();
        view.replace_todos(numbered(11));
        view.next_page();
        assert_eq!(view.current_page(), 2);
        view.replace_todos(numbered(10));
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.page_items().len(), 10);
    }

    #[test]
    fn toggle_add_form_keeps_form_contents() {
        let mut view = TodoView::new();
        view.form_mut().description = "draft".to_string();
        view.toggle_add_form();
        assert_eq!(view.mode(), &ViewMode::Adding);
        view.toggle_add_form();
        assert_eq!(view.mode(), &ViewMode::Listing);
        assert_eq!(view.form().description, "draft");
    }

    #[test]
    fn open_edit_form_copies_fields() {
        let mut view = TodoView::new();
        let item = todo("7", "write report", "high");
        view.open_edit_form(&item);
        assert_eq!(view.mode(), &ViewMode::Editing(TodoId::new("7")));
        assert_eq!(view.edit_target(), Some(&TodoId::new("7")));
        assert_eq!(
            view.form(),
            &TodoForm {
                description: "write report".to_string(),
                due_date: "2026-10-18".to_string(),
                priority: "high".to_string(),
            }
        );
        assert_eq!(view.form().to_todo(TodoId::new("7")), item);
    }

    #[test]
    fn editing_same_item_again_closes_form() {
        let mut view = TodoView::new();
        let item = todo("7", "write report", "high");
        view.open_edit_form(&item);
        view.open_edit_form(&item);
        assert_eq!(view.mode(), &ViewMode::Listing);
    }

    #[test]
    fn edit_form_replaces_add_form() {
        let mut view = TodoView::new();
        view.toggle_add_form();
        view.open_edit_form(&todo("3", "x", "low"));
        assert_eq!(view.mode(), &ViewMode::Editing(TodoId::new("3")));
    }

    #[test]
    fn cancel_closes_any_form_and_clears_fields() {
        let mut view = TodoView::new();
        view.open_edit_form(&todo("7", "write report", "high"));
        view.cancel();
        assert_eq!(view.mode(), &ViewMode::Listing);
        assert_eq!(view.form(), &TodoForm::default());
    }

    #[test]
    fn filter_field_parses_case_insensitively() {
        assert_eq!("Priority".parse::<FilterField>(), Ok(FilterField::Priority));
        assert_eq!("description".parse::<FilterField>(), Ok(FilterField::Description));
        assert!("due".parse::<FilterField>().is_err());
    }
}
