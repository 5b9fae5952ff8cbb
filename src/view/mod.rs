//! View layer: pure state machines for each page, plus the thin async
//! adapters that connect them to the API client and the text renderers
//! that turn their states into output.

pub mod admin;
pub mod fetch;
pub mod mvi;
pub mod pages;
pub mod render;
pub mod route;
pub mod runtime;
