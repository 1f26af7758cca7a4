//! Member and page builders.
//!
//! Builders sequence writer calls; they hold no rendering knowledge of their
//! own. Each builder is constructed once per documented type, used for one
//! build pass, and discarded.

use crate::members::VisibleMemberTable;
use crate::model::TypeDecl;
use crate::options::BuildOptions;

mod enum_constants;
mod type_page;

pub use enum_constants::EnumConstantBuilder;
pub use type_page::TypePageBuilder;

/// Shared per-type build context handed to member builders at construction.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub type_decl: &'a TypeDecl,
    pub members: &'a VisibleMemberTable,
    pub options: &'a BuildOptions,
}
