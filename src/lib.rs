pub mod config;
pub mod convert;
pub mod error;
pub mod extract;
pub mod header;
pub mod markdown;
pub mod migrate;
pub mod naming;
pub mod timestamp;

pub use config::Config;
pub use convert::convert_post;
pub use error::{Error, Result};
pub use markdown::{EmphasisSymbol, MarkdownRenderer};
pub use migrate::{expand_inputs, Migrator, Report};
pub use naming::output_name;
