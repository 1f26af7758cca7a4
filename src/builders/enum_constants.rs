//! Builder for the enum constants section of a type page.
//!
//! Assembles the section by requesting fragments from the writer in a fixed
//! per-constant order; all rendering decisions stay with the writer. The
//! visible constant sequence is resolved once, at construction, and never
//! reordered.

use super::Context;
use crate::content::Content;
use crate::model::{MemberDecl, MemberKind, TypeDecl};
use crate::options::BuildOptions;
use crate::writer::EnumConstantWriter;

/// Builds documentation for the enum constants of a single type.
pub struct EnumConstantBuilder<'a, W> {
    type_decl: &'a TypeDecl,
    options: &'a BuildOptions,
    writer: &'a W,
    constants: Vec<&'a MemberDecl>,
}

impl<'a, W: EnumConstantWriter> EnumConstantBuilder<'a, W> {
    /// Construct a builder for the type in `context`, resolving its visible
    /// enum constants once.
    pub fn new(context: Context<'a>, writer: &'a W) -> Self {
        let constants = context.members.visible_members(MemberKind::EnumConstant);
        Self {
            type_decl: context.type_decl,
            options: context.options,
            writer,
            constants,
        }
    }

    /// Whether this type has any enum constants to document.
    pub fn has_members_to_document(&self) -> bool {
        !self.constants.is_empty()
    }

    /// Append the enum constant details section to `target`. No-op if the
    /// type has no visible enum constants; calling twice appends twice.
    pub fn build(&self, target: &mut Content) {
        if !self.has_members_to_document() {
            return;
        }
        let details_header = self.writer.details_header(self.type_decl);
        let mut member_list = self.writer.member_list();

        for constant in &self.constants {
            let mut entry = self.writer.member_header(constant);

            self.build_signature(constant, &mut entry);
            self.build_deprecation_info(constant, &mut entry);
            self.build_preview_info(constant, &mut entry);
            self.build_comments(constant, &mut entry);
            self.build_tag_info(constant, &mut entry);

            member_list.add(self.writer.member_list_item(entry));
        }
        target.add(self.writer.details(details_header, member_list));
    }

    fn build_signature(&self, constant: &MemberDecl, target: &mut Content) {
        target.add(self.writer.signature(constant));
    }

    fn build_deprecation_info(&self, constant: &MemberDecl, target: &mut Content) {
        self.writer.add_deprecated(constant, target);
    }

    fn build_preview_info(&self, constant: &MemberDecl, target: &mut Content) {
        self.writer.add_preview(constant, target);
    }

    /// Skipped entirely when comments are suppressed by options.
    fn build_comments(&self, constant: &MemberDecl, target: &mut Content) {
        if !self.options.no_comments {
            self.writer.add_comments(constant, target);
        }
    }

    fn build_tag_info(&self, constant: &MemberDecl, target: &mut Content) {
        self.writer.add_tags(constant, target);
    }
}
