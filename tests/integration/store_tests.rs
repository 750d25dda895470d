//! PostgreSQL store tests
//!
//! Require a reachable database: `DATABASE_URL=postgres://... cargo test -- --ignored`

use library_api::{
    models::{Author, Book, Borrowed, Member},
    repository::{AuthorStore, BookStore, BorrowedStore, HealthStore, MemberStore, Repository},
    StoreError,
};
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

async fn repository() -> Repository {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    Repository::new(pool)
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

async fn seed_author(repo: &Repository) -> Author {
    let author = Author {
        id: new_id(),
        full_name: Some("Frank Herbert".to_string()),
        nick_name: "fherbert".to_string(),
        specialization: "Novelist".to_string(),
    };
    repo.authors.create(&author).await.expect("create author");
    author
}

async fn seed_book(repo: &Repository, authors_id: Option<String>, title: &str) -> Book {
    let book = Book {
        id: new_id(),
        authors_id,
        title: title.to_string(),
        genre: "Science fiction".to_string(),
        isbn: "978-0441172719".to_string(),
        ..Default::default()
    };
    repo.books.create(&book).await.expect("create book");
    book
}

async fn seed_member(repo: &Repository) -> Member {
    let member = Member {
        id: new_id(),
        full_name: "John Doe".to_string(),
    };
    repo.members.create(&member).await.expect("create member");
    member
}

#[tokio::test]
#[ignore]
async fn test_ping() {
    let repo = repository().await;
    assert!(repo.ping().await.is_ok());
}

#[tokio::test]
#[ignore]
async fn test_author_lifecycle() {
    let repo = repository().await;
    let author = seed_author(&repo).await;

    let authors = repo.authors.get().await.unwrap();
    assert!(authors.iter().any(|a| a.id == author.id && a.nick_name == "fherbert"));

    repo.authors.exists(&author.id).await.unwrap();

    let renamed = Author {
        full_name: None,
        nick_name: "frank".to_string(),
        ..author.clone()
    };
    repo.authors.update(&author.id, &renamed).await.unwrap();

    let authors = repo.authors.get().await.unwrap();
    let stored = authors.iter().find(|a| a.id == author.id).unwrap();
    assert_eq!(stored.nick_name, "frank");
    assert!(stored.full_name.is_none());

    repo.authors.delete(&author.id).await.unwrap();
    assert!(matches!(
        repo.authors.exists(&author.id).await,
        Err(StoreError::NotFound("author"))
    ));
}

#[tokio::test]
#[ignore]
async fn test_exists_unknown_ids() {
    let repo = repository().await;
    let id = new_id();

    assert!(matches!(repo.authors.exists(&id).await, Err(StoreError::NotFound(_))));
    assert!(matches!(repo.books.exists(&id).await, Err(StoreError::NotFound(_))));
    assert!(matches!(repo.members.exists(&id).await, Err(StoreError::NotFound(_))));
}

#[tokio::test]
#[ignore]
async fn test_author_with_books_cannot_be_deleted() {
    let repo = repository().await;
    let author = seed_author(&repo).await;
    let dune = seed_book(&repo, Some(author.id.clone()), "Dune").await;
    let messiah = seed_book(&repo, Some(author.id.clone()), "Dune Messiah").await;

    let mut titles = repo.authors.get_authors_books(&author.id).await.unwrap();
    titles.sort();
    assert_eq!(titles, vec!["Dune".to_string(), "Dune Messiah".to_string()]);

    let err = repo.authors.delete(&author.id).await.unwrap_err();
    assert!(err.is_foreign_key_violation());

    repo.books.delete(&dune.id).await.unwrap();
    repo.books.delete(&messiah.id).await.unwrap();
    repo.authors.delete(&author.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_book_with_unknown_author_is_rejected() {
    let repo = repository().await;
    let book = Book {
        id: new_id(),
        authors_id: Some(new_id()),
        title: "Orphan".to_string(),
        ..Default::default()
    };

    assert!(repo.books.create(&book).await.is_err());
}

#[tokio::test]
#[ignore]
async fn test_borrowing_and_returning() {
    let repo = repository().await;
    let author = seed_author(&repo).await;
    let dune = seed_book(&repo, Some(author.id.clone()), "Dune").await;
    let messiah = seed_book(&repo, Some(author.id.clone()), "Dune Messiah").await;
    let member = seed_member(&repo).await;

    assert!(repo.borrowed.get(&member.id).await.unwrap().is_empty());

    for book in [&dune, &messiah] {
        repo.borrowed
            .create(&Borrowed {
                member_id: member.id.clone(),
                book_id: book.id.clone(),
            })
            .await
            .unwrap();
    }

    let books = repo.borrowed.get(&member.id).await.unwrap();
    assert_eq!(books.len(), 2);
    assert!(books
        .iter()
        .all(|b| b.author.full_name.as_deref() == Some("Frank Herbert") && b.id.is_empty()));

    // Borrowed books and their borrower are pinned by the loan rows
    assert!(repo.books.delete(&dune.id).await.unwrap_err().is_foreign_key_violation());
    assert!(repo.members.delete(&member.id).await.unwrap_err().is_foreign_key_violation());

    repo.borrowed.delete(&member.id, &dune.id).await.unwrap();
    assert_eq!(repo.borrowed.get(&member.id).await.unwrap().len(), 1);

    repo.borrowed
        .delete_list(&member.id, &[messiah.id.clone(), new_id()])
        .await
        .unwrap();
    assert!(repo.borrowed.get(&member.id).await.unwrap().is_empty());

    repo.members.delete(&member.id).await.unwrap();
    repo.books.delete(&dune.id).await.unwrap();
    repo.books.delete(&messiah.id).await.unwrap();
    repo.authors.delete(&author.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_member_update() {
    let repo = repository().await;
    let member = seed_member(&repo).await;

    repo.members
        .update(
            &member.id,
            &Member {
                id: String::new(),
                full_name: "Jane Doe".to_string(),
            },
        )
        .await
        .unwrap();

    let members = repo.members.get().await.unwrap();
    let stored = members.iter().find(|m| m.id == member.id).unwrap();
    assert_eq!(stored.full_name, "Jane Doe");

    repo.members.delete(&member.id).await.unwrap();
}
