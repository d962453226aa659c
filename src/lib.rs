pub mod books {
    pub mod domain;
    pub mod dto;
    pub mod factory;
    pub mod repository;
}

pub mod catalog {
    pub mod command {
        pub mod add_book_cmd;
        pub mod get_book_cmd;
        pub mod list_books_cmd;
        pub mod remove_book_cmd;
        pub mod search_books_cmd;
    }
    pub mod domain;
    pub mod factory;
}

pub mod core {
    pub mod command;
    pub mod domain;
    pub mod library;
}

pub mod utils {
    pub mod logging;
}
