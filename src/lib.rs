// src/lib.rs
//! Doge speak rewriter.
//!
//! ```
//! use dogeify::{Dogeify, ProcessOptions};
//!
//! let mut doge = Dogeify::new().seeded(42);
//! let out = doge.process("Dogs are very happy today.", &ProcessOptions::default());
//! assert!(out.contains("doges."));
//! ```

pub mod category;
pub mod config;
pub mod debug;
pub mod emotion;
pub mod error;
pub mod ignore;
pub mod normalize;
pub mod pipeline;
pub mod pool;
pub mod respell;
pub mod tagger;
pub mod vocab;

mod metrics;

// ---- Re-exports for stable public API ----
pub use crate::category::{Category, PosTag};
pub use crate::config::{load_config_default, load_config_from, DogeifyConfig};
pub use crate::debug::CallStats;
pub use crate::error::{DogeifyError, DogeifyResult};
pub use crate::ignore::IgnoreEntry;
pub use crate::pipeline::{Dogeify, DogeifyHandle, ProcessOptions};
pub use crate::respell::respell;
pub use crate::tagger::{LexiconTagger, MarkupTagger, TaggedWord, Tagger};

/// Build an instance from the default config lookup (`$DOGEIFY_CONFIG_PATH`, then `config/`).
pub fn from_default_config() -> anyhow::Result<Dogeify> {
    let cfg = load_config_default()?;
    Dogeify::from_config(&cfg)
}
