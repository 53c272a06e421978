pub mod word_server;
