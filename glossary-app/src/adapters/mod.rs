//! Platform adapters for non-browser frontends (CLI, desktop shell).

mod file_downloader;
mod http_api_client;
mod json_file_store;

pub use file_downloader::FileDownloader;
pub use http_api_client::{HttpApiClient, PROXY_COMMAND};
pub use json_file_store::JsonFileStore;
