//! Builder composing one full documentation page per type.
//!
//! Page chrome and type-level comments come from the page writer; member
//! detail sections are delegated to the member builders, which decide for
//! themselves whether they have anything to document.

use super::{Context, EnumConstantBuilder};
use crate::content::Content;
use crate::writer::{EnumConstantWriter, PageWriter};

/// Builds the documentation page for a single type.
pub struct TypePageBuilder<'a, W> {
    context: Context<'a>,
    writer: &'a W,
}

impl<'a, W: PageWriter + EnumConstantWriter> TypePageBuilder<'a, W> {
    pub fn new(context: Context<'a>, writer: &'a W) -> Self {
        Self { context, writer }
    }

    /// Append the complete page for this type to `target`.
    pub fn build(&self, target: &mut Content) {
        target.add(self.writer.page_header(self.context.type_decl));
        target.add(self.writer.type_heading(self.context.type_decl));
        if !self.context.options.no_comments {
            self.writer
                .add_type_comments(self.context.type_decl, target);
        }

        let enum_constants = EnumConstantBuilder::new(self.context, self.writer);
        if enum_constants.has_members_to_document() {
            enum_constants.build(target);
        }

        target.add(self.writer.page_footer());
    }
}
