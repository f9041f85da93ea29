pub mod catalog_client;
pub mod command;
pub mod controller;
pub mod filter;
pub mod html_parser;
pub mod loader;
pub mod options;
pub mod page;
pub mod scrape;
pub mod view;
