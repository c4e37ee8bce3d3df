//! Seed dataset: 10 authors and 24 books
//!
//! Several books share an author and book-17 is co-authored, so list queries
//! naturally request the same author many times.

use crate::models::{Author, Book};

type AuthorRow = (&'static str, &'static str, &'static str, &'static [&'static str]);
type BookRow = (&'static str, &'static str, &'static str, i32, &'static [&'static str]);

const AUTHORS: &[AuthorRow] = &[
    (
        "author-1",
        "J.K. Rowling",
        "British author, best known for the Harry Potter series",
        &["book-1", "book-2", "book-3"],
    ),
    (
        "author-2",
        "George R.R. Martin",
        "American novelist and short story writer",
        &["book-4", "book-5"],
    ),
    (
        "author-3",
        "J.R.R. Tolkien",
        "English writer and philologist",
        &["book-6", "book-7", "book-8"],
    ),
    (
        "author-4",
        "Stephen King",
        "American author of horror, supernatural fiction, suspense, and fantasy novels",
        &["book-9", "book-10", "book-11", "book-12"],
    ),
    (
        "author-5",
        "Agatha Christie",
        "English writer known for her detective novels",
        &["book-13", "book-14"],
    ),
    (
        "author-6",
        "Isaac Asimov",
        "American writer and professor of biochemistry",
        &["book-15"],
    ),
    (
        "author-7",
        "Margaret Atwood",
        "Canadian poet, novelist, and literary critic",
        &["book-16"],
    ),
    (
        "author-8",
        "Neil Gaiman",
        "English author of short fiction, novels, comic books, and graphic novels",
        &["book-17", "book-18"],
    ),
    (
        "author-9",
        "Terry Pratchett",
        "English humorist, satirist, and author of fantasy novels",
        &["book-17"],
    ),
    (
        "author-10",
        "Brandon Sanderson",
        "American fantasy and science fiction writer",
        &["book-19", "book-20", "book-21", "book-22", "book-23", "book-24"],
    ),
];

const BOOKS: &[BookRow] = &[
    ("book-1", "Harry Potter and the Philosopher's Stone", "978-0747532699", 1997, &["author-1"]),
    ("book-2", "Harry Potter and the Chamber of Secrets", "978-0747538496", 1998, &["author-1"]),
    ("book-3", "Harry Potter and the Prisoner of Azkaban", "978-0747542155", 1999, &["author-1"]),
    ("book-4", "A Game of Thrones", "978-0553103540", 1996, &["author-2"]),
    ("book-5", "A Clash of Kings", "978-0553108033", 1998, &["author-2"]),
    ("book-6", "The Hobbit", "978-0547928227", 1937, &["author-3"]),
    ("book-7", "The Fellowship of the Ring", "978-0547928210", 1954, &["author-3"]),
    ("book-8", "The Two Towers", "978-0547928203", 1954, &["author-3"]),
    ("book-9", "The Shining", "978-0307743657", 1977, &["author-4"]),
    ("book-10", "It", "978-1501142970", 1986, &["author-4"]),
    ("book-11", "The Stand", "978-0307743688", 1978, &["author-4"]),
    ("book-12", "Carrie", "978-0307743664", 1974, &["author-4"]),
    ("book-13", "Murder on the Orient Express", "978-0062693662", 1934, &["author-5"]),
    ("book-14", "And Then There Were None", "978-0062073488", 1939, &["author-5"]),
    ("book-15", "Foundation", "978-0553293357", 1951, &["author-6"]),
    ("book-16", "The Handmaid's Tale", "978-0385490818", 1985, &["author-7"]),
    ("book-17", "Good Omens", "978-0060853983", 1990, &["author-8", "author-9"]),
    ("book-18", "American Gods", "978-0060558123", 2001, &["author-8"]),
    ("book-19", "The Way of Kings", "978-0765326355", 2010, &["author-10"]),
    ("book-20", "Words of Radiance", "978-0765326362", 2014, &["author-10"]),
    ("book-21", "Oathbringer", "978-0765326379", 2017, &["author-10"]),
    ("book-22", "Rhythm of War", "978-0765326386", 2020, &["author-10"]),
    ("book-23", "Mistborn: The Final Empire", "978-0765311788", 2006, &["author-10"]),
    ("book-24", "The Well of Ascension", "978-0765316882", 2007, &["author-10"]),
];

fn owned(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

pub fn authors() -> Vec<Author> {
    AUTHORS
        .iter()
        .map(|&(id, name, bio, book_ids)| Author {
            id: id.to_string(),
            name: name.to_string(),
            bio: Some(bio.to_string()),
            book_ids: owned(book_ids),
        })
        .collect()
}

pub fn books() -> Vec<Book> {
    BOOKS
        .iter()
        .map(|&(id, title, isbn, year, author_ids)| Book {
            id: id.to_string(),
            title: title.to_string(),
            isbn: Some(isbn.to_string()),
            published_year: Some(year),
            author_ids: owned(author_ids),
        })
        .collect()
}
