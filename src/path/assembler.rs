// Interleaves literal segments with rendered placeholders

use std::borrow::Cow;
use std::iter;

use super::param::{Param, ParamValues};

/// Joins a template's literal segments with one rendered value per placeholder.
///
/// The output alternates segment, value, segment, ... and always ends on the
/// last segment. A placeholder that renders to `None` is dropped, leaving its
/// neighbouring segments adjacent.
pub(crate) struct Assembler<'t> {
    segments: &'t [String],
    params: &'t [Param],
}

impl<'t> Assembler<'t> {
    /// Callers guarantee `segments.len() == params.len() + 1`.
    pub(crate) fn new(segments: &'t [String], params: &'t [Param]) -> Self {
        Self { segments, params }
    }

    /// Canonical form: every placeholder shown as `<prefix><key>`
    pub(crate) fn canonical(&self, prefix: &str) -> String {
        self.join(|param| Some(Cow::Owned(format!("{}{}", prefix, param.key()))))
    }

    /// Build form: every placeholder replaced by its value, missing values omitted
    pub(crate) fn substitute<V>(&self, values: &V) -> String
    where
        V: ParamValues + ?Sized,
    {
        self.join(|param| param.extract(values).map(Cow::Borrowed))
    }

    fn join<'a, F>(&self, mut render: F) -> String
    where
        't: 'a,
        F: FnMut(&'t Param) -> Option<Cow<'a, str>>,
    {
        // No placeholder follows the last segment
        let rendered = self
            .params
            .iter()
            .map(&mut render)
            .chain(iter::repeat_with(|| None));

        self.segments
            .iter()
            .zip(rendered)
            .flat_map(|(segment, value)| [Some(Cow::Borrowed(segment.as_str())), value])
            .flatten()
            .collect()
    }
}
