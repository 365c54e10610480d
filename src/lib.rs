//! Embedded static site server
//!
//! Serves a tree of static files bundled into the binary at compile time,
//! deriving each file's URL route from its filename: HTML files get clean
//! extensionless routes (`about.html` -> `/about`, `index.html` -> `/`),
//! every other asset keeps its extension (`style.css` -> `/style.css`).

pub mod assets;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
