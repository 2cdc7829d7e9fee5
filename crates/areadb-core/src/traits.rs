// crates/areadb-core/src/traits.rs
use crate::text::fold_key;
use serde::{Deserialize, Serialize};

/// Storage backend for strings used by the directory model.
///
/// This abstraction allows the crate to swap how textual data is stored
/// internally (for example to use a more compact string type) without
/// changing the public API of accessors that return `&str` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and ensure the
/// associated type can be serialized/deserialized so databases can be
/// cached via bincode.
pub trait AreaBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;

    fn str_from(s: &str) -> Self::Str;

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }
}

/// Default backend: plain `String`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

impl AreaBackend for DefaultBackend {
    type Str = String;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }
}

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes accent-insensitive and case-insensitive comparisons
/// based on [`fold_key`]. Implementors provide a `&str` view of their
/// canonical name via [`NameMatch::name_str`], and get convenient helpers:
/// - [`NameMatch::is_named`] — equality on folded form
/// - [`NameMatch::name_starts_with`] — prefix match on folded form
/// - [`NameMatch::name_contains`] — substring match on folded form
///
/// # Examples
/// ```rust
/// use areadb_core::traits::NameMatch;
///
/// struct Town(&'static str);
/// impl NameMatch for Town {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Town("Wells").is_named("WELLS"));
/// assert!(Town("Burnham-on-Sea").name_starts_with("burnham"));
/// assert!(Town("Shepton Mallet").name_contains("mallet"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive name comparison on folded form.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Case-insensitive prefix match on folded form.
    #[inline]
    fn name_starts_with(&self, q: &str) -> bool {
        fold_key(self.name_str()).starts_with(&fold_key(q))
    }

    /// Case-insensitive substring match on folded form.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}
