//! Regrouping todos by their subject tags
//!
//! Used by the binary to turn a flat snapshot into project or context groups.
//! A todo tagged with several projects appears once under each of them.

use crate::subject::{extract_contexts, extract_projects};
use crate::todo::{GroupedTodos, Todo};

pub const ALL_GROUP: &str = "all";
pub const NO_PROJECTS_GROUP: &str = "No projects";
pub const NO_CONTEXTS_GROUP: &str = "No contexts";

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupBy {
    /// Keep the groups as given
    #[default]
    keep,
    /// Everything in a single group
    none,
    project,
    context,
}

impl std::str::FromStr for GroupBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep" => Ok(GroupBy::keep),
            "none" => Ok(GroupBy::none),
            "project" => Ok(GroupBy::project),
            "context" => Ok(GroupBy::context),
            _ => Err(format!(
                "Invalid grouping '{}'. Valid options are: keep, none, project, context",
                s
            )),
        }
    }
}

/// Regroup todos, visiting the source groups in key order
pub fn regroup(grouped: &GroupedTodos, by: GroupBy) -> GroupedTodos {
    if by == GroupBy::keep {
        return grouped.clone();
    }

    let mut regrouped = GroupedTodos::new();
    for key in grouped.sorted_keys() {
        for todo in &grouped.groups[key] {
            for group in group_keys(todo, by) {
                regrouped.insert(group, todo.clone());
            }
        }
    }
    regrouped
}

fn group_keys(todo: &Todo, by: GroupBy) -> Vec<String> {
    let (tags, fallback) = match by {
        GroupBy::project => (extract_projects(&todo.subject), NO_PROJECTS_GROUP),
        GroupBy::context => (extract_contexts(&todo.subject), NO_CONTEXTS_GROUP),
        GroupBy::keep | GroupBy::none => return vec![ALL_GROUP.to_string()],
    };
    if tags.is_empty() {
        vec![fallback.to_string()]
    } else {
        tags
    }
}
