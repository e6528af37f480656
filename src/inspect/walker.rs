//! Group-shape recursion.

use super::classify::ShapeContribution;
use super::Inspector;
use crate::images::ImageStore;
use crate::presentation::Shape;

impl Inspector {
    /// Classify every child of `group` and concatenate the results in
    /// child order. Nested groups recurse through [`Inspector::classify`].
    ///
    /// Non-group shapes have no children and give an empty contribution.
    pub fn walk_group(
        &self,
        group: &Shape,
        slide_number: usize,
        images: &mut dyn ImageStore,
    ) -> ShapeContribution {
        group
            .children()
            .iter()
            .fold(ShapeContribution::default(), |mut merged, child| {
                merged.merge(self.classify(child, slide_number, images));
                merged
            })
    }
}
