//! qembed Token Encoding
//!
//! Maps integer token ids onto circuit parameters and turns the measured
//! outcome distribution into a per-token embedding.
//!
//! # Schemes
//!
//! | Scheme | Gates (n qubits) | Varies with token |
//! |--------|------------------|-------------------|
//! | `amplitude` | `Ry(0)`, CX chain | outcome weights |
//! | `phase` | `H` on all, `Rz(0)`, CX chain | relative phase only |
//! | `hybrid` | amplitude then phase | both |
//!
//! Phase encoding starts from a uniform superposition that `Rz` and the CX
//! chain leave uniform, so its measured distribution does not depend on the
//! token id.
//!
//! # Example
//!
//! ```rust
//! use qembed_token::{EncodingScheme, ProcessorConfig, TokenProcessor};
//!
//! let config = ProcessorConfig::new()
//!     .with_num_qubits(2)
//!     .with_scheme(EncodingScheme::Amplitude)
//!     .with_seed(42);
//! let processor = TokenProcessor::new(config).unwrap();
//!
//! let embedding = processor.process_token(2).unwrap();
//! assert_eq!(embedding.distribution.len(), 2); // "00" and "11"
//! ```

pub mod config;
pub mod embedding;
pub mod encoding;
pub mod error;
pub mod processor;

pub use config::ProcessorConfig;
pub use embedding::TokenEmbedding;
pub use encoding::EncodingScheme;
pub use error::{TokenError, TokenResult};
pub use processor::{DominantOutcome, SchemeComparison, TokenProcessor};
