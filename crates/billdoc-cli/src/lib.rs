//! billdoc CLI - Command-line interface library
//!
//! This library provides the commands behind the `billdoc` binary:
//! - Outline: indented structural captions
//! - Text: running text of the body
//! - Sponsors: members named as sponsors, cosponsors or nonsponsors
//! - Json: the decoded tree as JSON
//!
//! # Binary Usage
//!
//! ```bash
//! billdoc outline BILLS-115s1804is.xml --max-depth 2
//! billdoc text BILLS-115s1804is.xml --keep-deleted
//! billdoc sponsors BILLS-115s1804is.xml
//! billdoc --config billdoc.toml json BILLS-115s1804is.xml
//! ```

pub mod app;
pub mod config;
pub mod visitors;

pub use app::{
    json_command, load_bill, load_settings, outline_command, run_cli, sponsors_command,
    text_command,
};
pub use config::{OutlineSettings, Settings, TextSettings};
