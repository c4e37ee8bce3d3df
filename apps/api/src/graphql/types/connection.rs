//! Connection types for cursor pagination

use async_graphql::SimpleObject;
use bookshelf_dataloader::Page;

use super::{Author, Book};

/// Pagination information for cursor-based pagination
#[derive(SimpleObject, Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

impl From<bookshelf_dataloader::PageInfo> for PageInfo {
    fn from(info: bookshelf_dataloader::PageInfo) -> Self {
        Self {
            has_next_page: info.has_next_page,
            has_previous_page: info.has_previous_page,
            start_cursor: info.start_cursor,
            end_cursor: info.end_cursor,
        }
    }
}

/// A book with the cursor that resumes pagination from it
#[derive(SimpleObject)]
pub struct BookEdge {
    pub node: Book,
    pub cursor: String,
}

/// A page of books
#[derive(SimpleObject)]
pub struct BookConnection {
    pub edges: Vec<BookEdge>,
    pub page_info: PageInfo,
}

/// An author with the cursor that resumes pagination from it
#[derive(SimpleObject)]
pub struct AuthorEdge {
    pub node: Author,
    pub cursor: String,
}

/// A page of authors
#[derive(SimpleObject)]
pub struct AuthorConnection {
    pub edges: Vec<AuthorEdge>,
    pub page_info: PageInfo,
}

/// GraphQL connection built from a page of catalog records
pub trait Connection: Sized {
    type Node;

    fn from_edges(edges: Vec<(Self::Node, String)>, page_info: PageInfo) -> Self;

    /// Build a connection from a page, converting each node
    fn from_page<N>(page: Page<N>) -> Self
    where
        Self::Node: From<N>,
    {
        let Page { edges, page_info } = page;
        let edges = edges
            .into_iter()
            .map(|edge| (Self::Node::from(edge.node), edge.cursor))
            .collect();
        Self::from_edges(edges, page_info.into())
    }
}

impl Connection for BookConnection {
    type Node = Book;

    fn from_edges(edges: Vec<(Book, String)>, page_info: PageInfo) -> Self {
        Self {
            edges: edges
                .into_iter()
                .map(|(node, cursor)| BookEdge { node, cursor })
                .collect(),
            page_info,
        }
    }
}

impl Connection for AuthorConnection {
    type Node = Author;

    fn from_edges(edges: Vec<(Author, String)>, page_info: PageInfo) -> Self {
        Self {
            edges: edges
                .into_iter()
                .map(|(node, cursor)| AuthorEdge { node, cursor })
                .collect(),
            page_info,
        }
    }
}
