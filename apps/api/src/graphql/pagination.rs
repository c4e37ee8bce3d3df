//! Shared pagination utilities for GraphQL resolvers
//!
//! Every connection field takes an optional `PaginationInput` and runs it
//! through the schema's [`Paginator`], so limits and cursor checks are the same
//! at every nesting level.

use async_graphql::{Context, InputObject, Result};
use bookshelf_dataloader::{Node, PaginationArgs, Paginator, Scope};

use crate::error::graphql_error;

use super::types::Connection;

/// Cursor pagination arguments
#[derive(InputObject, Debug, Clone, Default)]
pub struct PaginationInput {
    /// Number of items after `after`
    pub first: Option<i32>,
    /// Resume after this cursor
    pub after: Option<String>,
    /// Number of items before `before`
    pub last: Option<i32>,
    /// Resume before this cursor
    pub before: Option<String>,
}

impl From<PaginationInput> for PaginationArgs {
    fn from(input: PaginationInput) -> Self {
        Self {
            first: input.first,
            after: input.after,
            last: input.last,
            before: input.before,
        }
    }
}

/// Paginate `items` into the connection type `C`
///
/// A bad cursor becomes a field error carrying `INVALID_CURSOR`.
pub fn paginate_connection<T, C>(
    ctx: &Context<'_>,
    items: &[T],
    pagination: Option<PaginationInput>,
    scope: &Scope,
) -> Result<C>
where
    T: Node + Clone,
    C: Connection,
    C::Node: From<T>,
{
    let paginator = ctx.data_opt::<Paginator>().copied().unwrap_or_default();
    let args = pagination.map(PaginationArgs::from).unwrap_or_default();

    let page = paginator
        .paginate(items, &args, scope)
        .map_err(graphql_error)?;

    Ok(C::from_page(page))
}
