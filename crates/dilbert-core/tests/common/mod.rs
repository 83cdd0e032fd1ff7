pub mod strip_server;
