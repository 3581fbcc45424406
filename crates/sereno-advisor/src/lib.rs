//! Sereno Advisor
//!
//! Maps an analysis outcome to user-facing guidance: the per-(emotion,
//! stress tier) recommendation text, the support-session classification,
//! and the longer-form session guidance rendered by conversational
//! front-ends.
//!
//! Everything here is a pure lookup over static tables; the advisor never
//! fails and holds no state.
//!
//! # Examples
//!
//! ```
//! use sereno_advisor::recommend;
//! use sereno_domain::{EmotionLabel, SessionTier};
//!
//! let rec = recommend(Some(EmotionLabel::Anxiety), 7.2);
//! assert_eq!(rec.session, SessionTier::Critical);
//! assert!(rec.text.contains("7.2"));
//! ```

#![warn(missing_docs)]

mod recommendation;
mod support;

pub use recommendation::{
    recommend, recommend_label, Recommendation, EMPTY_INPUT_PROMPT, GENERIC_FALLBACK,
};
pub use support::{opening_line, support_session};
