//! JSON schema types for the input doc model.
//!
//! The model keeps documentation intent declarative: types, members, and
//! their doc comments arrive pre-structured, so the toolkit stays a
//! mechanical renderer.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Model schema version accepted by this toolkit.
pub const SCHEMA_VERSION: u32 = 1;

/// Kind of a documented type declaration.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Enum,
    Class,
}

/// Kind of a documented member declaration.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    EnumConstant,
    Field,
}

/// Declared visibility of a member.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Private,
}

/// Deprecation marker carried by a declaration.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct Deprecation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Structured doc comment: a one-line summary plus optional body paragraphs.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct DocComment {
    pub summary: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<String>,
}

/// Pre-parsed block tag attached to a declaration (`see`, `since`, ...).
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct BlockTag {
    pub name: String,
    pub text: String,
}

/// One member declaration inside a type.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct MemberDecl {
    pub name: String,
    pub kind: MemberKind,
    #[serde(default = "default_visibility")]
    pub visibility: Visibility,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecation>,
    #[serde(default)]
    pub preview: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<DocComment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<BlockTag>,
}

fn default_visibility() -> Visibility {
    Visibility::Public
}

/// One type declaration to document. Member order is documentation order.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct TypeDecl {
    pub name: String,
    pub kind: TypeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<DocComment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<MemberDecl>,
}

/// Root of the doc model file.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct DocModel {
    pub schema_version: u32,
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

/// Load and validate a doc model from a JSON file.
pub fn load_model(path: &Path) -> Result<DocModel> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read doc model {}", path.display()))?;
    let model: DocModel = serde_json::from_str(&raw)
        .with_context(|| format!("parse doc model {}", path.display()))?;
    validate_model(&model)?;
    Ok(model)
}

/// Reject models this toolkit cannot render faithfully.
pub fn validate_model(model: &DocModel) -> Result<()> {
    if model.schema_version != SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported doc model schema_version {} (expected {})",
            model.schema_version,
            SCHEMA_VERSION
        ));
    }
    let mut seen = BTreeSet::new();
    for type_decl in &model.types {
        if type_decl.name.is_empty() {
            return Err(anyhow!("type with empty name in doc model"));
        }
        if !seen.insert(type_decl.name.as_str()) {
            return Err(anyhow!("duplicate type name {} in doc model", type_decl.name));
        }
        for member in &type_decl.members {
            if member.name.is_empty() {
                return Err(anyhow!("member with empty name in type {}", type_decl.name));
            }
            if member.kind == MemberKind::EnumConstant && type_decl.kind != TypeKind::Enum {
                return Err(anyhow!(
                    "enum constant {} declared in non-enum type {}",
                    member.name,
                    type_decl.name
                ));
            }
        }
    }
    Ok(())
}
