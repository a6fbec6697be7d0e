pub mod cli_parser;
