pub mod request_options;
