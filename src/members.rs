//! Visible member resolution for a single type declaration.
//!
//! Computed once per type before any builder runs: model order is preserved,
//! non-visible members are dropped, and duplicate names keep their first
//! occurrence. Builders consume the resulting sequences and never mutate
//! them.

use crate::model::{MemberDecl, MemberKind, TypeDecl, Visibility};
use crate::options::BuildOptions;
use std::collections::BTreeSet;

/// Ordered, visibility-filtered member sequences for one type.
#[derive(Debug)]
pub struct VisibleMemberTable {
    members: Vec<MemberDecl>,
}

impl VisibleMemberTable {
    /// Resolve the visible members of `type_decl` under `options`.
    pub fn new(type_decl: &TypeDecl, options: &BuildOptions) -> Self {
        let mut seen: BTreeSet<(MemberKind, &str)> = BTreeSet::new();
        let mut members = Vec::new();
        for member in &type_decl.members {
            if member.visibility == Visibility::Private && !options.include_private {
                continue;
            }
            if !seen.insert((member.kind, member.name.as_str())) {
                continue;
            }
            members.push(member.clone());
        }
        Self { members }
    }

    /// The visible members of `kind`, in documentation order.
    pub fn visible_members(&self, kind: MemberKind) -> Vec<&MemberDecl> {
        self.members
            .iter()
            .filter(|member| member.kind == kind)
            .collect()
    }

    /// Count of visible members across all kinds.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeKind;

    fn member(name: &str, kind: MemberKind, visibility: Visibility) -> MemberDecl {
        MemberDecl {
            name: name.to_string(),
            kind,
            visibility,
            deprecated: None,
            preview: false,
            doc: None,
            tags: Vec::new(),
        }
    }

    fn enum_type(members: Vec<MemberDecl>) -> TypeDecl {
        TypeDecl {
            name: "Color".to_string(),
            kind: TypeKind::Enum,
            doc: None,
            members,
        }
    }

    #[test]
    fn preserves_model_order() {
        let decl = enum_type(vec![
            member("RED", MemberKind::EnumConstant, Visibility::Public),
            member("GREEN", MemberKind::EnumConstant, Visibility::Public),
            member("BLUE", MemberKind::EnumConstant, Visibility::Public),
        ]);
        let table = VisibleMemberTable::new(&decl, &BuildOptions::default());
        let names: Vec<&str> = table
            .visible_members(MemberKind::EnumConstant)
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, ["RED", "GREEN", "BLUE"]);
    }

    #[test]
    fn filters_private_members_by_default() {
        let decl = enum_type(vec![
            member("RED", MemberKind::EnumConstant, Visibility::Public),
            member("HIDDEN", MemberKind::Field, Visibility::Private),
        ]);
        let table = VisibleMemberTable::new(&decl, &BuildOptions::default());
        assert_eq!(table.len(), 1);
        assert!(table.visible_members(MemberKind::Field).is_empty());

        let options = BuildOptions {
            include_private: true,
            ..Default::default()
        };
        let table = VisibleMemberTable::new(&decl, &options);
        assert_eq!(table.visible_members(MemberKind::Field).len(), 1);
    }

    #[test]
    fn drops_duplicate_names_keeping_first() {
        let mut duplicate = member("RED", MemberKind::EnumConstant, Visibility::Public);
        duplicate.preview = true;
        let decl = enum_type(vec![
            member("RED", MemberKind::EnumConstant, Visibility::Public),
            duplicate,
        ]);
        let table = VisibleMemberTable::new(&decl, &BuildOptions::default());
        let constants = table.visible_members(MemberKind::EnumConstant);
        assert_eq!(constants.len(), 1);
        assert!(!constants[0].preview);
    }

    #[test]
    fn empty_type_has_no_visible_members() {
        let decl = enum_type(Vec::new());
        let table = VisibleMemberTable::new(&decl, &BuildOptions::default());
        assert!(table.is_empty());
        assert!(table.visible_members(MemberKind::EnumConstant).is_empty());
    }
}
