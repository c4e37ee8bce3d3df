//! Cursor pagination over ordered sequences
//!
//! Forward pagination (`first`/`after`) and backward pagination
//! (`last`/`before`) over any slice of [`Node`]s. Each list is identified by a
//! [`Scope`] so the same entities can be paginated independently under
//! different parents in one response.

use serde::Deserialize;

use crate::cursor::Cursor;
use crate::entity::Node;
use crate::error::{Error, Result};

/// Page size used when `first`/`last` is negative
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination arguments as received from a client
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationArgs {
    pub first: Option<i32>,
    pub after: Option<String>,
    pub last: Option<i32>,
    pub before: Option<String>,
}

impl PaginationArgs {
    /// First `n` items
    pub fn forward(n: i32) -> Self {
        Self {
            first: Some(n),
            ..Self::default()
        }
    }

    /// Last `n` items
    pub fn backward(n: i32) -> Self {
        Self {
            last: Some(n),
            ..Self::default()
        }
    }

    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }
}

/// Identity of a paginated list: the parent it belongs to, if any
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Scope {
    pub parent_id: Option<String>,
    pub parent_type: Option<String>,
}

impl Scope {
    /// A top-level list
    pub fn root() -> Self {
        Self::default()
    }

    /// A list nested under the entity `parent_id` of kind `parent_type`
    pub fn nested(parent_id: impl Into<String>, parent_type: impl Into<String>) -> Self {
        Self {
            parent_id: Some(parent_id.into()),
            parent_type: Some(parent_type.into()),
        }
    }
}

/// A node with the cursor that resumes right after (or before) it
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<T> {
    pub node: T,
    pub cursor: String,
}

/// Page boundary metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

/// One window of a sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
}

impl<T> Page<T> {
    /// Convert nodes while keeping cursors and page info
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            edges: self
                .edges
                .into_iter()
                .map(|edge| Edge {
                    node: f(edge.node),
                    cursor: edge.cursor,
                })
                .collect(),
            page_info: self.page_info,
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|edge| &edge.node)
    }
}

/// Which way the arguments drive the query
enum Direction {
    Forward(usize),
    Backward(usize),
    Unbounded,
}

/// Slices sequences into pages according to [`PaginationArgs`]
///
/// The default paginator honours any requested page size. A cap is opt-in,
/// through [`Paginator::new`] or [`Paginator::with_max_page_size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    default_page_size: usize,
    max_page_size: Option<usize>,
    strict_scope: bool,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: None,
            strict_scope: true,
        }
    }
}

impl Paginator {
    /// Create a capped paginator; `max_page_size` is raised to `default_page_size` if lower
    pub fn new(default_page_size: usize, max_page_size: usize) -> Self {
        Self {
            default_page_size,
            ..Self::default()
        }
        .with_max_page_size(max_page_size)
    }

    /// Clamp requested page sizes to `max_page_size`
    pub fn with_max_page_size(mut self, max_page_size: usize) -> Self {
        self.max_page_size = Some(max_page_size.max(self.default_page_size));
        self
    }

    /// Choose whether cursors minted for another list are rejected
    ///
    /// When lenient, a cursor is matched by node id alone, whatever list it
    /// came from.
    pub fn with_strict_scope(mut self, strict: bool) -> Self {
        self.strict_scope = strict;
        self
    }

    pub fn default_page_size(&self) -> usize {
        self.default_page_size
    }

    pub fn max_page_size(&self) -> Option<usize> {
        self.max_page_size
    }

    pub fn strict_scope(&self) -> bool {
        self.strict_scope
    }

    /// Return the page of `items` selected by `args`
    ///
    /// `first` takes precedence over `last`. With neither, the whole sequence
    /// is one page and both boundary flags are false. A well-formed cursor
    /// whose node is no longer in `items` is ignored; a malformed one fails
    /// with [`Error::InvalidCursor`].
    pub fn paginate<T: Node + Clone>(
        &self,
        items: &[T],
        args: &PaginationArgs,
        scope: &Scope,
    ) -> Result<Page<T>> {
        let after = self.decode(args.after.as_deref(), scope)?;
        let before = self.decode(args.before.as_deref(), scope)?;

        let direction = match (args.first, args.last) {
            (Some(first), _) => Direction::Forward(self.limit(first)),
            (None, Some(last)) => Direction::Backward(self.limit(last)),
            (None, None) => Direction::Unbounded,
        };

        let (window, has_next_page, has_previous_page) = match direction {
            Direction::Forward(limit) => {
                let start = after
                    .and_then(|c| position(items, &c.id))
                    .map_or(0, |pos| pos + 1);
                let end = items.len().min(start.saturating_add(limit).saturating_add(1));
                let window = &items[start..end];
                let has_next = window.len() > limit;
                let window = if has_next { &window[..limit] } else { window };
                (window, has_next, start > 0)
            }
            Direction::Backward(limit) => {
                let end = before
                    .and_then(|c| position(items, &c.id))
                    .unwrap_or(items.len());
                let start = end.saturating_sub(limit.saturating_add(1));
                let window = &items[start..end];
                let has_previous = window.len() > limit;
                let window = if has_previous { &window[1..] } else { window };
                (window, end < items.len(), has_previous)
            }
            Direction::Unbounded => (items, false, false),
        };

        let edges: Vec<Edge<T>> = window
            .iter()
            .map(|node| Edge {
                cursor: Cursor::scoped(node.id(), scope).encode(),
                node: node.clone(),
            })
            .collect();

        let page_info = PageInfo {
            has_next_page,
            has_previous_page,
            start_cursor: edges.first().map(|e| e.cursor.clone()),
            end_cursor: edges.last().map(|e| e.cursor.clone()),
        };

        Ok(Page { edges, page_info })
    }

    fn limit(&self, requested: i32) -> usize {
        match usize::try_from(requested) {
            Ok(n) => self.max_page_size.map_or(n, |max| n.min(max)),
            Err(_) => {
                tracing::debug!(
                    requested,
                    fallback = self.default_page_size,
                    "Negative page size, using default"
                );
                self.default_page_size
            }
        }
    }

    fn decode(&self, token: Option<&str>, scope: &Scope) -> Result<Option<Cursor>> {
        let Some(token) = token else {
            return Ok(None);
        };

        let cursor = Cursor::decode(token)?;
        if self.strict_scope && cursor.scope() != *scope {
            return Err(Error::invalid_cursor(format!(
                "cursor belongs to another list ({}/{})",
                cursor.parent_type.as_deref().unwrap_or("root"),
                cursor.parent_id.as_deref().unwrap_or("-"),
            )));
        }
        Ok(Some(cursor))
    }
}

fn position<T: Node>(items: &[T], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Paginate with the default [`Paginator`]
pub fn paginate<T: Node + Clone>(items: &[T], args: &PaginationArgs, scope: &Scope) -> Result<Page<T>> {
    Paginator::default().paginate(items, args, scope)
}
