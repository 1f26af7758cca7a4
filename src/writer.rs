//! Writer capability set consumed by member builders.
//!
//! Builders sequence calls against this trait in a fixed order; the writer
//! decides what, if anything, each call renders. Any renderer implementing
//! the trait is substitutable.

use crate::content::Content;
use crate::model::{MemberDecl, TypeDecl};

/// Fragment-producing operations for the enum constants section of a type.
pub trait EnumConstantWriter {
    /// Section header for the enum constant details of `type_decl`.
    fn details_header(&self, type_decl: &TypeDecl) -> Content;

    /// Empty list container for per-constant entries.
    fn member_list(&self) -> Content;

    /// Per-constant header opening one entry.
    fn member_header(&self, constant: &MemberDecl) -> Content;

    /// Declaration signature for one constant.
    fn signature(&self, constant: &MemberDecl) -> Content;

    /// Deprecation marker; renders nothing if the constant is not deprecated.
    fn add_deprecated(&self, constant: &MemberDecl, target: &mut Content);

    /// Preview marker; renders nothing if the constant is not a preview.
    fn add_preview(&self, constant: &MemberDecl, target: &mut Content);

    /// Descriptive doc comments for one constant.
    fn add_comments(&self, constant: &MemberDecl, target: &mut Content);

    /// Block tag section for one constant.
    fn add_tags(&self, constant: &MemberDecl, target: &mut Content);

    /// Wrap one completed entry as a list item.
    fn member_list_item(&self, entry: Content) -> Content;

    /// Combine the section header and the member list into one details
    /// fragment.
    fn details(&self, header: Content, list: Content) -> Content;
}

/// Page-level operations for one type documentation page.
pub trait PageWriter {
    /// Opening page chrome for `type_decl`.
    fn page_header(&self, type_decl: &TypeDecl) -> Content;

    /// Heading naming the documented type.
    fn type_heading(&self, type_decl: &TypeDecl) -> Content;

    /// Type-level doc comments.
    fn add_type_comments(&self, type_decl: &TypeDecl, target: &mut Content);

    /// Closing page chrome.
    fn page_footer(&self) -> Content;
}
