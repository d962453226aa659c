use std::env;
use std::error::Error;
use serde::Serialize;
use simple_error::SimpleError;
use tracing::info;
use uuid::Uuid;
use book_catalog::books::dto::BookDto;
use book_catalog::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use book_catalog::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use book_catalog::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use book_catalog::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use book_catalog::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use book_catalog::catalog::factory;
use book_catalog::core::command::Command;
use book_catalog::core::domain::Configuration;
use book_catalog::utils::logging::setup_tracing;

const DEV_MODE: bool = true;

const USAGE: &str = "usage: catalog list | get <id> | add <title> <author> <year> | remove <id> | search <title>";

// Fixed ids so that an id printed by `list` can be passed to `get` or `remove` on a later run.
fn sample_books() -> Vec<BookDto> {
    vec![
        BookDto::with_id(Uuid::from_u128(0x1), "Dune", "Frank Herbert", 1965),
        BookDto::with_id(Uuid::from_u128(0x2), "Children of Dune", "Frank Herbert", 1976),
        BookDto::with_id(Uuid::from_u128(0x3), "Tutunamayanlar", "Oğuz Atay", 1972),
        BookDto::with_id(Uuid::from_u128(0x4), "İnce Memed", "Yaşar Kemal", 1955),
        BookDto::with_id(Uuid::from_u128(0x5), "The Left Hand of Darkness", "Ursula K. Le Guin", 1969),
    ]
}

fn to_json<T: Serialize>(res: &T) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(res)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let (config, seed) = if DEV_MODE {
        (Configuration::new("dev"), sample_books())
    } else {
        (Configuration::new("prod"), vec![])
    };
    info!(branch_id = config.branch_id.as_str(), books = seed.len(), "starting catalog");
    let svc = factory::create_catalog_service(&config, &seed)?;

    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let json = match args.as_slice() {
        ["list"] => {
            to_json(&ListBooksCommand::new(svc).execute(ListBooksCommandRequest::new()).await?)?
        }
        ["get", book_id] => {
            let req = GetBookCommandRequest::new(book_id.to_string());
            to_json(&GetBookCommand::new(svc).execute(req).await?)?
        }
        ["add", title, author, year] => {
            let published_year: i32 = year.parse()
                .map_err(|_| SimpleError::new(format!("invalid publication year {}", year)))?;
            let req = AddBookCommandRequest::new(title, author, published_year);
            to_json(&AddBookCommand::new(svc).execute(req).await?)?
        }
        ["remove", book_id] => {
            let req = RemoveBookCommandRequest::new(book_id.to_string());
            to_json(&RemoveBookCommand::new(svc).execute(req).await?)?
        }
        ["search", title] => {
            let req = SearchBooksCommandRequest::new(title);
            to_json(&SearchBooksCommand::new(svc).execute(req).await?)?
        }
        _ => return Err(SimpleError::new(USAGE).into()),
    };
    println!("{}", json);
    Ok(())
}
