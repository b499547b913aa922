//! Values returned by renderers and aggregated by the engine.

use crate::domain::markup::Attributes;

/// One column definition contributed by a column element to its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub key: String,
    /// The column element's attributes, already interpolated.
    pub attributes: Attributes,
}

/// Outcome of rendering one node.
///
/// `Void` means "nothing to emit": whatever the renderer produced went into a
/// shared builder. Aggregation ([`RenderResult::merge`]) is associative with
/// `Void` as identity; adjacent fragments concatenate and sequences flatten,
/// so a `Sequence` always holds at least two parts and never nests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenderResult {
    #[default]
    Void,
    Fragment(String),
    Column(ColumnSpec),
    Sequence(Vec<RenderResult>),
}

impl RenderResult {
    pub fn fragment(text: impl Into<String>) -> Self {
        Self::Fragment(text.into())
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// Append `other` after `self`.
    pub fn merge(self, other: RenderResult) -> RenderResult {
        match (self, other) {
            (Self::Void, r) | (r, Self::Void) => r,
            (Self::Fragment(mut a), Self::Fragment(b)) => {
                a.push_str(&b);
                Self::Fragment(a)
            }
            (a, b) => {
                let mut parts = a.into_parts();
                for part in b.into_parts() {
                    push_part(&mut parts, part);
                }
                Self::Sequence(parts)
            }
        }
    }

    fn into_parts(self) -> Vec<RenderResult> {
        match self {
            Self::Void => Vec::new(),
            Self::Sequence(parts) => parts,
            other => vec![other],
        }
    }

    /// Concatenated text of every fragment, ignoring structured parts.
    pub fn text(&self) -> String {
        match self {
            Self::Fragment(text) => text.clone(),
            Self::Sequence(parts) => parts.iter().map(RenderResult::text).collect(),
            Self::Void | Self::Column(_) => String::new(),
        }
    }

    /// Column specs in document order.
    pub fn columns(&self) -> Vec<&ColumnSpec> {
        match self {
            Self::Column(spec) => vec![spec],
            Self::Sequence(parts) => parts.iter().flat_map(RenderResult::columns).collect(),
            Self::Void | Self::Fragment(_) => Vec::new(),
        }
    }

    pub fn into_columns(self) -> Vec<ColumnSpec> {
        match self {
            Self::Column(spec) => vec![spec],
            Self::Sequence(parts) => parts
                .into_iter()
                .flat_map(RenderResult::into_columns)
                .collect(),
            Self::Void | Self::Fragment(_) => Vec::new(),
        }
    }
}

fn push_part(parts: &mut Vec<RenderResult>, part: RenderResult) {
    if let (Some(RenderResult::Fragment(last)), RenderResult::Fragment(next)) =
        (parts.last_mut(), &part)
    {
        last.push_str(next);
        return;
    }
    parts.push(part);
}

impl FromIterator<RenderResult> for RenderResult {
    fn from_iter<I: IntoIterator<Item = RenderResult>>(iter: I) -> Self {
        iter.into_iter().fold(Self::Void, RenderResult::merge)
    }
}
