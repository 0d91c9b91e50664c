pub mod config;
pub mod logging;

// Pipeline stages, leaves first.
pub mod paths;
pub mod url_model;
pub mod html;
pub mod http;
pub mod storage;
pub mod extract;
pub mod cleaner;
pub mod downloader;
pub mod converter;
