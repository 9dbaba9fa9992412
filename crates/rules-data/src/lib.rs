//! Markdown rule catalog.
//!
//! Rules live on disk as `<root>/<category>/<slug>.md`: a YAML header between
//! `---` lines followed by a markdown body. [`RuleLibrary`] lists categories,
//! lists and looks up rules, and runs a plain substring search. Each call reads
//! the files again; there is no cache.
//!
//! ```no_run
//! use rules_data::RuleLibrary;
//!
//! let library = RuleLibrary::new("content/rules");
//! for category in library.list_categories()? {
//!     println!("{} ({})", category.name, category.count);
//! }
//! let hits = library.search_rules("react")?;
//! println!("{} rules mention react", hits.len());
//! # Ok::<(), rules_data::RulesError>(())
//! ```

pub mod error;
pub mod frontmatter;
pub mod library;
pub mod model;
pub mod parser;
pub mod scanner;
pub mod search;
pub mod transform;

pub use error::{Result, RulesError};
pub use library::RuleLibrary;
pub use model::{display_name, Category, Rule, RuleFrontmatter, RulePath};
pub use parser::{parse_rule, parse_rule_file};
